//! Styled text runs and their measurement
//!
//! Cell text is broken into logical lines of [`Glyph`]s before layout: one
//! glyph per grapheme cluster (via unicode-segmentation), carrying its display
//! width (via unicode-width) and the style of the span it came from.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::style::Style;

/// Columns between tab stops
const TAB_STOP: usize = 4;

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// Text made of several differently styled spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span, builder style
    pub fn span(mut self, text: impl Into<String>, style: Style) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        self.spans.push(Span::new(text, style));
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The text with styles stripped
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }
}

impl From<Vec<Span>> for StyledText {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

/// A printable grapheme cluster with its display width and style
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Glyph {
    pub cluster: Box<str>,
    pub width: usize,
    pub style: Style,
}

impl Glyph {
    fn blank(style: Style) -> Self {
        Self {
            cluster: " ".into(),
            width: 1,
            style,
        }
    }
}

pub(crate) type TextLine = Vec<Glyph>;

/// Display width of one grapheme cluster
///
/// `None` for control characters, which are never printed. Zero-width
/// clusters (a combining mark with no base, a lone joiner) measure 0.
pub(crate) fn cluster_width(cluster: &str) -> Option<usize> {
    match cluster.chars().next() {
        Some(c) if !c.is_control() => Some(cluster.width()),
        _ => None,
    }
}

/// Display width of a string, summed over its grapheme clusters
pub(crate) fn str_width(text: &str) -> usize {
    text.graphemes(true).filter_map(cluster_width).sum()
}

/// Split text into logical lines on `\n`
///
/// Tabs expand to the next tab stop. Control characters and zero-width
/// clusters are dropped so every glyph occupies at least one column.
pub(crate) fn logical_lines(text: &StyledText) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut current = TextLine::new();
    let mut column = 0;

    for span in &text.spans {
        for (i, segment) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(std::mem::take(&mut current));
                column = 0;
            }
            for cluster in segment.graphemes(true) {
                if cluster == "\t" {
                    let pad = TAB_STOP - column % TAB_STOP;
                    current.extend((0..pad).map(|_| Glyph::blank(span.style)));
                    column += pad;
                    continue;
                }
                let width = match cluster_width(cluster) {
                    Some(w) if w > 0 => w,
                    _ => continue,
                };
                current.push(Glyph {
                    cluster: cluster.into(),
                    width,
                    style: span.style,
                });
                column += width;
            }
        }
    }
    lines.push(current);

    lines
}

/// Display width of a line
pub(crate) fn line_width(line: &[Glyph]) -> usize {
    line.iter().map(|g| g.width).sum()
}

/// Widest line, in display columns
pub(crate) fn natural_width(lines: &[TextLine]) -> usize {
    lines.iter().map(|l| line_width(l)).max().unwrap_or(0)
}

/// Break a line into chunks no wider than `width`
///
/// Breaks fall on character boundaries. A glyph wider than `width` gets a
/// chunk of its own (the draw phase pads it away). A zero width leaves the
/// line whole since it will be clipped to nothing anyway.
pub(crate) fn wrap(line: &[Glyph], width: usize) -> Vec<TextLine> {
    if width == 0 || line_width(line) <= width {
        return vec![line.to_vec()];
    }

    let mut chunks = Vec::new();
    let mut current = TextLine::new();
    let mut used = 0;

    for glyph in line {
        if used + glyph.width > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(glyph.clone());
        used += glyph.width;
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    fn text_of(line: &[Glyph]) -> String {
        line.iter().map(|g| &*g.cluster).collect()
    }

    #[test]
    fn test_logical_lines_split_on_newline() {
        let lines = logical_lines(&StyledText::from("one\ntwo\n"));
        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[0]), "one");
        assert_eq!(text_of(&lines[1]), "two");
        assert!(lines[2].is_empty());
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        let lines = logical_lines(&StyledText::new());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_spans_keep_their_style() {
        let red = Style::new().fg(Color::Red);
        let text = StyledText::new()
            .span("ab", Style::default())
            .span("cd", red);

        let lines = logical_lines(&text);
        assert_eq!(lines[0][1].style, Style::default());
        assert_eq!(lines[0][2].style, red);
        assert_eq!(text.plain(), "abcd");
    }

    #[test]
    fn test_tab_expands_to_stop() {
        let lines = logical_lines(&StyledText::from("ab\tc"));
        assert_eq!(text_of(&lines[0]), "ab  c");
    }

    #[test]
    fn test_control_chars_dropped() {
        let lines = logical_lines(&StyledText::from("a\u{7}b\r"));
        assert_eq!(text_of(&lines[0]), "ab");
    }

    #[test]
    fn test_wide_chars_measure_two() {
        let lines = logical_lines(&StyledText::from("日本"));
        assert_eq!(line_width(&lines[0]), 4);
        assert_eq!(natural_width(&lines), 4);
    }

    #[test]
    fn test_modifier_sequence_is_one_glyph() {
        // Thumbs up plus a skin tone modifier draws as a single wide cell
        let lines = logical_lines(&StyledText::from("\u{1F44D}\u{1F3FD}x"));
        assert_eq!(lines[0].len(), 2);
        assert_eq!(&*lines[0][0].cluster, "\u{1F44D}\u{1F3FD}");
        assert_eq!(lines[0][0].width, 2);
        assert_eq!(line_width(&lines[0]), 3);
        assert_eq!(str_width("\u{1F44D}\u{1F3FD}x"), 3);
    }

    #[test]
    fn test_combining_mark_stays_with_base() {
        let lines = logical_lines(&StyledText::from("e\u{301}t\r\n2"));
        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "e\u{301}t");
        assert_eq!(line_width(&lines[0]), 2);
        assert_eq!(text_of(&lines[1]), "2");
    }

    #[test]
    fn test_wrap_at_width() {
        let lines = logical_lines(&StyledText::from("abcdefg"));
        let chunks = wrap(&lines[0], 3);
        let texts: Vec<String> = chunks.iter().map(|c| text_of(c)).collect();
        assert_eq!(texts, vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_wrap_never_splits_wide_char() {
        let lines = logical_lines(&StyledText::from("a日b"));
        let chunks = wrap(&lines[0], 2);
        let texts: Vec<String> = chunks.iter().map(|c| text_of(c)).collect();
        assert_eq!(texts, vec!["a", "日", "b"]);
    }

    #[test]
    fn test_wrap_zero_width_keeps_line() {
        let lines = logical_lines(&StyledText::from("abc"));
        assert_eq!(wrap(&lines[0], 0).len(), 1);
    }
}
