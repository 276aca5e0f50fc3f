//! Border and separator glyphs
//!
//! Lines are painted onto the canvas as connectivity masks ([`Arms`]) and
//! only turned into characters once everything is drawn. A corner, tee or
//! cross is therefore picked from whichever neighbours actually connect,
//! which keeps junctions correct around spanning cells.

/// Glyph family used to draw a line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// `-`, `|` and `+`
    #[default]
    Ascii,
    /// `*` everywhere
    Star,
    /// Unicode light box drawing
    Light,
    /// Unicode heavy box drawing
    Heavy,
    /// Unicode double box drawing
    Double,
    /// Light lines with rounded corners
    Rounded,
}

/// Characters for every junction shape of one line style
struct Glyphs {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    tee_right: char,
    tee_left: char,
    tee_down: char,
    tee_up: char,
    cross: char,
}

const ASCII: Glyphs = Glyphs {
    horizontal: '-',
    vertical: '|',
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    tee_right: '+',
    tee_left: '+',
    tee_down: '+',
    tee_up: '+',
    cross: '+',
};

const STAR: Glyphs = Glyphs {
    horizontal: '*',
    vertical: '*',
    top_left: '*',
    top_right: '*',
    bottom_left: '*',
    bottom_right: '*',
    tee_right: '*',
    tee_left: '*',
    tee_down: '*',
    tee_up: '*',
    cross: '*',
};

const LIGHT: Glyphs = Glyphs {
    horizontal: '─',
    vertical: '│',
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    tee_right: '├',
    tee_left: '┤',
    tee_down: '┬',
    tee_up: '┴',
    cross: '┼',
};

const HEAVY: Glyphs = Glyphs {
    horizontal: '━',
    vertical: '┃',
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    tee_right: '┣',
    tee_left: '┫',
    tee_down: '┳',
    tee_up: '┻',
    cross: '╋',
};

const DOUBLE: Glyphs = Glyphs {
    horizontal: '═',
    vertical: '║',
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    tee_right: '╠',
    tee_left: '╣',
    tee_down: '╦',
    tee_up: '╩',
    cross: '╬',
};

const ROUNDED: Glyphs = Glyphs {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    ..LIGHT
};

impl LineStyle {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            LineStyle::Ascii => &ASCII,
            LineStyle::Star => &STAR,
            LineStyle::Light => &LIGHT,
            LineStyle::Heavy => &HEAVY,
            LineStyle::Double => &DOUBLE,
            LineStyle::Rounded => &ROUNDED,
        }
    }

    /// Closest style that only uses ASCII characters
    pub fn ascii_fallback(self) -> LineStyle {
        match self {
            LineStyle::Star => LineStyle::Star,
            _ => LineStyle::Ascii,
        }
    }

    /// Character for a set of connected arms
    ///
    /// `upright` picks the bare line character when no arm connects.
    pub fn glyph(self, arms: Arms, upright: bool) -> char {
        let g = self.glyphs();
        let (up, down, left, right) = (
            arms.contains(Arms::UP),
            arms.contains(Arms::DOWN),
            arms.contains(Arms::LEFT),
            arms.contains(Arms::RIGHT),
        );
        match (up, down, left, right) {
            (true, true, true, true) => g.cross,
            (true, true, false, true) => g.tee_right,
            (true, true, true, false) => g.tee_left,
            (false, true, true, true) => g.tee_down,
            (true, false, true, true) => g.tee_up,
            (false, true, false, true) => g.top_left,
            (false, true, true, false) => g.top_right,
            (true, false, false, true) => g.bottom_left,
            (true, false, true, false) => g.bottom_right,
            (true, _, false, false) | (_, true, false, false) => g.vertical,
            (false, false, _, _) if left || right => g.horizontal,
            _ if upright => g.vertical,
            _ => g.horizontal,
        }
    }
}

/// Directions a line segment connects to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms(u8);

impl Arms {
    pub const NONE: Arms = Arms(0);
    pub const UP: Arms = Arms(1);
    pub const DOWN: Arms = Arms(2);
    pub const LEFT: Arms = Arms(4);
    pub const RIGHT: Arms = Arms(8);

    pub fn contains(self, other: Arms) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn union(self, other: Arms) -> Arms {
        Arms(self.0 | other.0)
    }

    pub fn remove(self, other: Arms) -> Arms {
        Arms(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The arm pointing back from a neighbour
    pub fn opposite(self) -> Arms {
        let mut out = Arms::NONE;
        if self.contains(Arms::UP) {
            out = out.union(Arms::DOWN);
        }
        if self.contains(Arms::DOWN) {
            out = out.union(Arms::UP);
        }
        if self.contains(Arms::LEFT) {
            out = out.union(Arms::RIGHT);
        }
        if self.contains(Arms::RIGHT) {
            out = out.union(Arms::LEFT);
        }
        out
    }
}

/// Which outer edges a border draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edges {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Edges {
    pub const ALL: Edges = Edges {
        top: true,
        bottom: true,
        left: true,
        right: true,
    };

    /// Top and bottom rules only
    pub const HORIZONTAL: Edges = Edges {
        top: true,
        bottom: true,
        left: false,
        right: false,
    };

    /// Left and right rules only
    pub const VERTICAL: Edges = Edges {
        top: false,
        bottom: false,
        left: true,
        right: true,
    };
}

impl Default for Edges {
    fn default() -> Self {
        Self::ALL
    }
}

/// Outer border of a table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    pub line: LineStyle,
    pub edges: Edges,
}

impl BorderStyle {
    /// Border on all four edges
    pub fn new(line: LineStyle) -> Self {
        Self {
            line,
            edges: Edges::ALL,
        }
    }

    pub fn with_edges(mut self, edges: Edges) -> Self {
        self.edges = edges;
        self
    }

    pub fn ascii() -> Self {
        Self::new(LineStyle::Ascii)
    }

    pub fn light() -> Self {
        Self::new(LineStyle::Light)
    }

    pub fn rounded() -> Self {
        Self::new(LineStyle::Rounded)
    }

    /// Columns taken by the left and right edges
    pub fn horizontal_overhead(&self) -> usize {
        usize::from(self.edges.left) + usize::from(self.edges.right)
    }

    /// Lines taken by the top and bottom edges
    pub fn vertical_overhead(&self) -> usize {
        usize::from(self.edges.top) + usize::from(self.edges.bottom)
    }
}

/// Internal rules between rows and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeparatorStyle {
    pub line: LineStyle,
    pub horizontal: bool,
    pub vertical: bool,
}

impl SeparatorStyle {
    /// Rules between rows and between columns
    pub fn new(line: LineStyle) -> Self {
        Self {
            line,
            horizontal: true,
            vertical: true,
        }
    }

    /// Rules between columns only
    pub fn columns(line: LineStyle) -> Self {
        Self {
            line,
            horizontal: false,
            vertical: true,
        }
    }

    /// Rules between rows only
    pub fn rows(line: LineStyle) -> Self {
        Self {
            line,
            horizontal: true,
            vertical: false,
        }
    }
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self::new(LineStyle::default())
    }
}

/// Border and separator of one table, resolved for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    border: Option<BorderStyle>,
    separator: Option<SeparatorStyle>,
}

impl Frame {
    pub fn new(
        border: Option<BorderStyle>,
        separator: Option<SeparatorStyle>,
        ascii: bool,
    ) -> Self {
        if !ascii {
            return Self { border, separator };
        }
        Self {
            border: border.map(|b| BorderStyle {
                line: b.line.ascii_fallback(),
                ..b
            }),
            separator: separator.map(|s| SeparatorStyle {
                line: s.line.ascii_fallback(),
                ..s
            }),
        }
    }

    pub fn border(&self) -> Option<&BorderStyle> {
        self.border.as_ref()
    }

    pub fn left(&self) -> usize {
        self.border.map_or(0, |b| usize::from(b.edges.left))
    }

    pub fn right(&self) -> usize {
        self.border.map_or(0, |b| usize::from(b.edges.right))
    }

    pub fn top(&self) -> usize {
        self.border.map_or(0, |b| usize::from(b.edges.top))
    }

    pub fn bottom(&self) -> usize {
        self.border.map_or(0, |b| usize::from(b.edges.bottom))
    }

    /// Style of the rule between columns, if any
    pub fn column_rule(&self) -> Option<LineStyle> {
        self.separator.filter(|s| s.vertical).map(|s| s.line)
    }

    /// Style of the rule drawn after a row that is not the last one
    ///
    /// Header rows get a rule even when rows are collapsed, falling back to
    /// the separator's line style and then the border's.
    pub fn row_rule(&self, header: bool) -> Option<LineStyle> {
        match self.separator {
            Some(s) if s.horizontal => Some(s.line),
            _ if header => self
                .separator
                .map(|s| s.line)
                .or_else(|| self.border.map(|b| b.line)),
            _ => None,
        }
    }

    /// Columns consumed by borders and column rules
    pub fn horizontal_overhead(&self, columns: usize) -> usize {
        let rules = match self.column_rule() {
            Some(_) => columns.saturating_sub(1),
            None => 0,
        };
        self.left() + self.right() + rules
    }

    /// Lines consumed by borders and row rules, given each row's header flag
    pub fn vertical_overhead(&self, headers: &[bool]) -> usize {
        let rules = match headers.split_last() {
            Some((_, leading)) => leading
                .iter()
                .filter(|&&h| self.row_rule(h).is_some())
                .count(),
            None => 0,
        };
        self.top() + self.bottom() + rules
    }
}
