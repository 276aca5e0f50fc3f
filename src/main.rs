//! termgrid - render a sample report table to stdout
//!
//! Usage:
//!   termgrid [width]
//!
//! Settings come from `termgrid.toml` in the working directory, or the file
//! named by `TERMGRID_CONFIG`.

use std::env;
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use tracing::{debug, info};

use termgrid::{
    AnsiSink, BorderStyle, Cell, Color, LineSink, LineStyle, Overflow, PlainSink,
    RenderConfig, Row, SeparatorStyle, Style, StyledText, Table,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termgrid=info".parse()?),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if matches!(args.get(1).map(String::as_str), Some("help" | "--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let config_path =
        env::var("TERMGRID_CONFIG").unwrap_or_else(|_| "termgrid.toml".to_string());
    let config = RenderConfig::load(&config_path)?;
    let options = config.options()?;

    let width = match args.get(1) {
        Some(arg) => arg
            .parse::<usize>()
            .with_context(|| format!("width must be a number, got {arg:?}"))?,
        None => config.width,
    };

    let table = sample_report()?;
    let rendered = table
        .render_with(&options, width, None)
        .with_context(|| format!("failed to render at width {width}"))?;
    info!(width, lines = rendered.len(), "rendered sample report");

    let stdout = io::stdout().lock();
    let color = config.color && io::stdout().is_terminal();
    debug!(color, "writing output");
    if color {
        AnsiSink::new(stdout)
            .with_line_ending(config.line_ending)
            .write_rendered(&rendered)?;
    } else {
        PlainSink::new(stdout)
            .with_line_ending(config.line_ending)
            .write_rendered(&rendered)?;
    }

    Ok(())
}

/// Process listing with a nested summary table
fn sample_report() -> termgrid::Result<Table> {
    let header = Style::new().bold();
    let ok = Style::new().fg(Color::DarkGreen);
    let warn = Style::new().fg(Color::DarkYellow).bold();

    let summary = Table::new()
        .with_border(BorderStyle::new(LineStyle::Light))
        .with_row(["total", "3"].into_iter().collect())
        .with_row(
            Row::new()
                .with_cell("failing")
                .with_cell(Cell::new("1").with_style(warn)),
        );

    let table = Table::with_column_weights(&[1, 3, 2, 2])?
        .with_border(BorderStyle::rounded())
        .with_separator(SeparatorStyle::columns(LineStyle::Light))
        .with_row(
            Row::header()
                .with_style(header)
                .with_cell("pid")
                .with_cell("command")
                .with_cell("state")
                .with_cell("summary"),
        )
        .with_row(
            Row::new()
                .with_cell("101")
                .with_cell("sshd -D")
                .with_cell(Cell::new(StyledText::new().span("running", ok)))
                .with_cell(Cell::new(summary).with_span(1, 3)?),
        )
        .with_row(
            Row::new()
                .with_cell("233")
                .with_cell(
                    Cell::new("cron -f -l 8 --long-argument-list").with_overflow(Overflow::Wrap),
                )
                .with_cell(Cell::new(StyledText::new().span("running", ok))),
        )
        .with_row(
            Row::new()
                .with_cell("871")
                .with_cell("backup\tnightly")
                .with_cell(Cell::new("stalled").with_style(warn)),
        )
        .with_row(
            Row::new().with_cell(
                Cell::new("3 processes")
                    .with_span(4, 1)?
                    .with_style(Style::new().dim()),
            ),
        );

    Ok(table)
}

fn print_usage() {
    eprintln!(
        r#"termgrid - render a sample table

Usage:
  termgrid [width]

Environment:
  TERMGRID_CONFIG    Path to render config (default: termgrid.toml)
  RUST_LOG           Log filter, e.g. termgrid=debug

Config keys:
  width        default width (80)
  ascii        ASCII-only borders (false)
  color        ANSI styles when stdout is a terminal (true)
  line_ending  "lf" or "crlf"
  rule_color   color name or #rrggbb for borders and rules
"#
    );
}
