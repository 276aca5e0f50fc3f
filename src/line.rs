//! Rendered output lines
//!
//! A [`Line`] is a sequence of [`Run`]s, each a piece of text with one style.
//! Adjacent characters sharing a style always end up in the same run.

use crate::style::Style;
use crate::text;

/// Text sharing a single style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: Style,
}

/// One full-width line of table output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    runs: Vec<Run>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character, extending the last run when the style matches
    pub(crate) fn push_char(&mut self, ch: char, style: Style) {
        match self.runs.last_mut() {
            Some(run) if run.style == style => run.text.push(ch),
            _ => self.runs.push(Run {
                text: ch.to_string(),
                style,
            }),
        }
    }

    /// Append a whole grapheme cluster under one style
    pub(crate) fn push_str(&mut self, cluster: &str, style: Style) {
        match self.runs.last_mut() {
            Some(run) if run.style == style => run.text.push_str(cluster),
            _ => self.runs.push(Run {
                text: cluster.to_string(),
                style,
            }),
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The text with styles stripped
    pub fn plain(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Display width in terminal columns, measured per grapheme cluster
    pub fn width(&self) -> usize {
        self.runs.iter().map(|r| text::str_width(&r.text)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn test_push_char_merges_runs() {
        let red = Style::new().fg(Color::Red);
        let mut line = Line::new();
        line.push_char('a', Style::default());
        line.push_char('b', Style::default());
        line.push_char('c', red);
        line.push_char('d', Style::default());

        assert_eq!(line.runs().len(), 3);
        assert_eq!(line.runs()[0].text, "ab");
        assert_eq!(line.runs()[1].style, red);
        assert_eq!(line.plain(), "abcd");
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn test_width_counts_wide_chars() {
        let mut line = Line::new();
        for ch in "日x".chars() {
            line.push_char(ch, Style::default());
        }
        assert_eq!(line.width(), 3);
    }

    #[test]
    fn test_push_str_keeps_cluster() {
        let mut line = Line::new();
        line.push_char('[', Style::default());
        line.push_str("\u{1F44D}\u{1F3FD}", Style::default());
        line.push_char(']', Style::default());
        assert_eq!(line.runs().len(), 1);
        assert_eq!(line.width(), 4);
    }
}
