//! Transient drawing surface for one render pass
//!
//! The draw phase paints rules, cell boxes and nested tables into a
//! [`Canvas`], then [`Canvas::resolve`] turns line masks into characters.
//! Reading a resolved canvas row back yields a [`Line`].

use crate::border::{Arms, LineStyle};
use crate::line::Line;
use crate::style::Style;
use crate::text::Glyph;

/// A rectangular region in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the right edge (x + width)
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Get the bottom edge (y + height)
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// What occupies one terminal column of a canvas row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Mark {
    #[default]
    Blank,
    Char(char),
    /// Printed grapheme cluster
    Cluster(Box<str>),
    /// Right half of a double-width character
    Continuation,
    /// Unresolved rule segment
    Rule {
        arms: Arms,
        line: LineStyle,
        upright: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Tile {
    mark: Mark,
    style: Style,
}

/// A 2D buffer of tiles for composing table output
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Canvas {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    fn tile(&self, x: usize, y: usize) -> Option<&Tile> {
        self.index(x, y).map(|i| &self.tiles[i])
    }

    fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.index(x, y).map(|i| &mut self.tiles[i])
    }

    /// Blank out a region with a style
    pub fn fill(&mut self, rect: Rect, style: Style) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(tile) = self.tile_mut(x, y) {
                    *tile = Tile {
                        mark: Mark::Blank,
                        style,
                    };
                }
            }
        }
    }

    /// Print a line of glyphs, hard-clipped at `max_width` columns
    ///
    /// Glyph styles are layered over `base`. A double-width glyph that would
    /// straddle the clip edge is dropped, leaving the blank underneath.
    pub fn print(
        &mut self,
        x: usize,
        y: usize,
        max_width: usize,
        glyphs: &[Glyph],
        base: Style,
    ) {
        let mut used = 0;
        for glyph in glyphs {
            if used + glyph.width > max_width {
                break;
            }
            let style = Style::combine(&base, &glyph.style);
            if let Some(tile) = self.tile_mut(x + used, y) {
                *tile = Tile {
                    mark: Mark::Cluster(glyph.cluster.clone()),
                    style,
                };
            }
            for dx in 1..glyph.width {
                if let Some(tile) = self.tile_mut(x + used + dx, y) {
                    *tile = Tile {
                        mark: Mark::Continuation,
                        style,
                    };
                }
            }
            used += glyph.width;
        }
    }

    fn add_rule(
        &mut self,
        x: usize,
        y: usize,
        arms: Arms,
        line: LineStyle,
        upright: bool,
        style: Style,
    ) {
        if let Some(tile) = self.tile_mut(x, y) {
            let arms = match tile.mark {
                Mark::Rule { arms: existing, .. } => existing.union(arms),
                _ => arms,
            };
            *tile = Tile {
                mark: Mark::Rule {
                    arms,
                    line,
                    upright,
                },
                style,
            };
        }
    }

    /// Draw a horizontal rule from `x0` to `x1` inclusive
    pub fn hline(&mut self, x0: usize, x1: usize, y: usize, line: LineStyle, style: Style) {
        for x in x0..=x1 {
            let mut arms = Arms::NONE;
            if x > x0 {
                arms = arms.union(Arms::LEFT);
            }
            if x < x1 {
                arms = arms.union(Arms::RIGHT);
            }
            self.add_rule(x, y, arms, line, false, style);
        }
    }

    /// Draw a vertical rule from `y0` to `y1` inclusive
    pub fn vline(&mut self, x: usize, y0: usize, y1: usize, line: LineStyle, style: Style) {
        for y in y0..=y1 {
            let mut arms = Arms::NONE;
            if y > y0 {
                arms = arms.union(Arms::UP);
            }
            if y < y1 {
                arms = arms.union(Arms::DOWN);
            }
            self.add_rule(x, y, arms, line, true, style);
        }
    }

    /// Copy another canvas into a region, clipped to the region
    pub fn blit(&mut self, source: &Canvas, rect: Rect) {
        let width = rect.width.min(source.width);
        let height = rect.height.min(source.height);
        for y in 0..height {
            for x in 0..width {
                let tile = &source.tiles[y * source.width + x];
                if let Some(dest) = self.tile_mut(rect.x + x, rect.y + y) {
                    *dest = tile.clone();
                }
            }
        }
    }

    /// Whether the neighbour in direction `arm` connects back to (x, y)
    fn connects(&self, x: usize, y: usize, arm: Arms) -> bool {
        let neighbour = if arm == Arms::UP {
            y.checked_sub(1).and_then(|ny| self.tile(x, ny))
        } else if arm == Arms::DOWN {
            self.tile(x, y + 1)
        } else if arm == Arms::LEFT {
            x.checked_sub(1).and_then(|nx| self.tile(nx, y))
        } else {
            self.tile(x + 1, y)
        };
        matches!(
            neighbour,
            Some(Tile { mark: Mark::Rule { arms, .. }, .. }) if arms.contains(arm.opposite())
        )
    }

    /// Turn every rule mask into its junction character
    ///
    /// An arm survives only when the neighbour it points at has the
    /// reciprocal arm, so rules cut by a spanning cell end in tees.
    pub fn resolve(&mut self) {
        let mut resolved = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let Some(Tile {
                    mark:
                        Mark::Rule {
                            arms,
                            line,
                            upright,
                        },
                    ..
                }) = self.tile(x, y).cloned()
                else {
                    continue;
                };
                let mut live = arms;
                for arm in [Arms::UP, Arms::DOWN, Arms::LEFT, Arms::RIGHT] {
                    if arms.contains(arm) && !self.connects(x, y, arm) {
                        live = live.remove(arm);
                    }
                }
                resolved.push((x, y, line.glyph(live, upright)));
            }
        }
        for (x, y, ch) in resolved {
            if let Some(tile) = self.tile_mut(x, y) {
                tile.mark = Mark::Char(ch);
            }
        }
    }

    /// Read a row back as styled runs
    pub fn line(&self, y: usize) -> Line {
        let mut line = Line::new();
        for x in 0..self.width {
            let tile = &self.tiles[y * self.width + x];
            match &tile.mark {
                Mark::Blank => line.push_char(' ', tile.style),
                Mark::Char(ch) => line.push_char(*ch, tile.style),
                Mark::Cluster(cluster) => line.push_str(cluster, tile.style),
                Mark::Continuation => {}
                Mark::Rule {
                    arms,
                    line: style,
                    upright,
                } => line.push_char(style.glyph(*arms, *upright), tile.style),
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{logical_lines, StyledText};
    use crossterm::style::Color;

    fn plain_rows(canvas: &Canvas) -> Vec<String> {
        (0..canvas.height()).map(|y| canvas.line(y).plain()).collect()
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert!(!r.is_empty());
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_blank_canvas_reads_as_spaces() {
        let canvas = Canvas::new(4, 2);
        assert_eq!(plain_rows(&canvas), vec!["    ", "    "]);
    }

    #[test]
    fn test_print_clips_at_width() {
        let mut canvas = Canvas::new(6, 1);
        let lines = logical_lines(&StyledText::from("Hello world"));
        canvas.print(0, 0, 5, &lines[0], Style::default());
        assert_eq!(canvas.line(0).plain(), "Hello ");
    }

    #[test]
    fn test_print_drops_straddling_wide_char() {
        let mut canvas = Canvas::new(4, 1);
        let lines = logical_lines(&StyledText::from("a日本"));
        canvas.print(0, 0, 4, &lines[0], Style::default());
        assert_eq!(canvas.line(0).plain(), "a日 ");
        assert_eq!(canvas.line(0).width(), 4);
    }

    #[test]
    fn test_print_keeps_clusters_whole() {
        let mut canvas = Canvas::new(4, 1);
        let lines = logical_lines(&StyledText::from("\u{1F44D}\u{1F3FD}xyz"));
        canvas.print(0, 0, 4, &lines[0], Style::default());
        let line = canvas.line(0);
        assert_eq!(line.plain(), "\u{1F44D}\u{1F3FD}xy");
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn test_print_layers_style() {
        let mut canvas = Canvas::new(3, 1);
        let base = Style::new().bg(Color::Blue);
        canvas.fill(Rect::new(0, 0, 3, 1), base);
        let lines = logical_lines(&StyledText::new().span("ab", Style::new().bold()));
        canvas.print(0, 0, 3, &lines[0], base);

        let line = canvas.line(0);
        assert_eq!(line.runs().len(), 2);
        assert!(line.runs()[0].style.bold);
        assert_eq!(line.runs()[0].style.bg, Some(Color::Blue));
        assert_eq!(line.runs()[1].text, " ");
    }

    #[test]
    fn test_box_resolves_corners() {
        let mut canvas = Canvas::new(5, 3);
        let style = Style::default();
        canvas.hline(0, 4, 0, LineStyle::Light, style);
        canvas.hline(0, 4, 2, LineStyle::Light, style);
        canvas.vline(0, 0, 2, LineStyle::Light, style);
        canvas.vline(4, 0, 2, LineStyle::Light, style);
        canvas.resolve();

        assert_eq!(plain_rows(&canvas), vec!["┌───┐", "│   │", "└───┘"]);
    }

    #[test]
    fn test_cleared_segment_turns_cross_into_tee() {
        let mut canvas = Canvas::new(5, 3);
        let style = Style::default();
        canvas.hline(0, 4, 1, LineStyle::Light, style);
        canvas.vline(2, 0, 2, LineStyle::Light, style);
        // Wipe the lower half of the vertical rule
        canvas.fill(Rect::new(2, 2, 1, 1), style);
        canvas.resolve();

        assert_eq!(plain_rows(&canvas), vec!["  │  ", "──┴──", "     "]);
    }

    #[test]
    fn test_blit_clips_to_region() {
        let mut inner = Canvas::new(3, 2);
        let lines = logical_lines(&StyledText::from("xyz\nuvw"));
        inner.print(0, 0, 3, &lines[0], Style::default());
        inner.print(0, 1, 3, &lines[1], Style::default());

        let mut outer = Canvas::new(4, 2);
        outer.blit(&inner, Rect::new(1, 0, 2, 1));
        assert_eq!(plain_rows(&outer), vec![" xy ", "    "]);
    }
}
