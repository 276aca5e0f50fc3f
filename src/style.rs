//! Text styling attached to runs of table output
//!
//! The renderer never interprets a style; it only composes them (table
//! default, then row, then cell, then span) and carries the result alongside
//! the characters it draws. Sinks decide how to encode it.

use crossterm::style::Color;

/// Colors and attributes for a run of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// True when the style carries no color and no attribute
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// Layer `over` on top of `base`
    ///
    /// Colors set in `over` replace those of `base`; attributes accumulate.
    pub fn combine(base: &Style, over: &Style) -> Style {
        Style {
            fg: over.fg.or(base.fg),
            bg: over.bg.or(base.bg),
            bold: base.bold || over.bold,
            dim: base.dim || over.dim,
            italic: base.italic || over.italic,
            underline: base.underline || over.underline,
        }
    }

    /// Combine with an optional override, returning `self` when there is none
    pub(crate) fn layered(&self, over: Option<&Style>) -> Style {
        match over {
            Some(over) => Style::combine(self, over),
            None => *self,
        }
    }

    /// Parse a color from string
    /// Supports: hex (#rrggbb), the sixteen terminal color names, "dim" as dark grey
    pub fn parse_color(s: &str) -> Option<Color> {
        if s.starts_with('#') && s.len() == 7 {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            return Some(Color::Rgb { r, g, b });
        }

        Some(match s.to_lowercase().as_str() {
            "black" => Color::Black,
            "red" => Color::DarkRed,
            "green" => Color::DarkGreen,
            "yellow" => Color::DarkYellow,
            "blue" => Color::DarkBlue,
            "magenta" => Color::DarkMagenta,
            "cyan" => Color::DarkCyan,
            "white" => Color::White,
            "grey" | "gray" => Color::Grey,
            "darkgrey" | "darkgray" | "dim" => Color::DarkGrey,
            "brightred" => Color::Red,
            "brightgreen" => Color::Green,
            "brightyellow" => Color::Yellow,
            "brightblue" => Color::Blue,
            "brightmagenta" => Color::Magenta,
            "brightcyan" => Color::Cyan,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_override_wins_for_colors() {
        let base = Style::new().fg(Color::Red).bg(Color::Black);
        let over = Style::new().fg(Color::Green);

        let combined = Style::combine(&base, &over);
        assert_eq!(combined.fg, Some(Color::Green));
        assert_eq!(combined.bg, Some(Color::Black));
    }

    #[test]
    fn test_combine_attributes_accumulate() {
        let base = Style::new().bold();
        let over = Style::new().underline();

        let combined = Style::combine(&base, &over);
        assert!(combined.bold);
        assert!(combined.underline);
        assert!(!combined.italic);
    }

    #[test]
    fn test_layered_without_override() {
        let base = Style::new().dim();
        assert_eq!(base.layered(None), base);
        assert!(Style::new().is_plain());
        assert!(!base.is_plain());
    }

    #[test]
    fn test_parse_color() {
        let color = Style::parse_color("#ff0000").unwrap();
        assert!(matches!(color, Color::Rgb { r: 255, g: 0, b: 0 }));

        assert_eq!(Style::parse_color("Cyan"), Some(Color::DarkCyan));
        assert_eq!(Style::parse_color("dim"), Some(Color::DarkGrey));
        assert!(Style::parse_color("notacolor").is_none());
        assert!(Style::parse_color("#zz0000").is_none());
    }
}
