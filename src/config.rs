//! Render configuration

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::render::RenderOptions;
use crate::sink::LineEnding;
use crate::style::Style;

/// Settings read from a TOML file by the `termgrid` binary
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target width when none is given on the command line
    pub width: usize,
    /// Draw borders with ASCII only
    pub ascii: bool,
    /// Emit ANSI styles
    pub color: bool,
    pub line_ending: LineEnding,
    /// Color name or #rrggbb for borders and rules
    pub rule_color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            ascii: false,
            color: true,
            line_ending: LineEnding::Lf,
            rule_color: None,
        }
    }
}

impl RenderConfig {
    /// Load config from a TOML file, falling back to defaults when it is missing
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("render config not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let config: RenderConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;

        tracing::info!(
            width = config.width,
            ascii = config.ascii,
            "loaded render config from {}",
            path.display()
        );

        Ok(config)
    }

    pub fn options(&self) -> Result<RenderOptions> {
        let rule_style = match &self.rule_color {
            Some(name) => match Style::parse_color(name) {
                Some(color) => Some(Style::new().fg(color)),
                None => bail!("unknown rule_color {name:?}"),
            },
            None => None,
        };
        Ok(RenderOptions {
            ascii: self.ascii,
            rule_style,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RenderConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.width, 80);
        assert!(config.color);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "width = 120\nline_ending = \"crlf\"\nrule_color = \"dim\"").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 120);
        assert_eq!(config.line_ending, LineEnding::CrLf);
        assert!(!config.ascii);

        let options = config.options().unwrap();
        assert_eq!(options.rule_style.and_then(|s| s.fg), Some(Color::DarkGrey));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "width = \"wide\"").unwrap();
        let err = RenderConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_unknown_rule_color() {
        let config = RenderConfig {
            rule_color: Some("chartreuse".to_string()),
            ..RenderConfig::default()
        };
        assert!(config.options().is_err());
    }
}
