//! Line sinks
//!
//! Rendering stops at styled [`Line`]s. A sink turns them into bytes: ANSI
//! escape sequences through crossterm, or bare text.

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use serde::Deserialize;

use crate::line::{Line, Run};
use crate::render::Rendered;

/// Terminator written after every line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    /// Raw-mode terminals need the carriage return
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Destination for rendered lines
pub trait LineSink {
    fn write_line(&mut self, line: &Line) -> io::Result<()>;

    /// Write every line of a render, in order
    fn write_rendered(&mut self, rendered: &Rendered) -> io::Result<()> {
        for line in rendered {
            self.write_line(&line)?;
        }
        Ok(())
    }
}

/// Writes lines with their styles encoded as ANSI escape sequences
pub struct AnsiSink<W> {
    out: W,
    ending: LineEnding,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ending: LineEnding::Lf,
        }
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Append one run, resetting attributes after any styled text
fn encode_run(buf: &mut String, run: &Run) -> std::fmt::Result {
    let style = &run.style;
    if style.is_plain() {
        buf.push_str(&run.text);
        return Ok(());
    }

    if let Some(color) = style.fg {
        SetForegroundColor(color).write_ansi(buf)?;
    }
    if let Some(color) = style.bg {
        SetBackgroundColor(color).write_ansi(buf)?;
    }
    if style.bold {
        SetAttribute(Attribute::Bold).write_ansi(buf)?;
    }
    if style.dim {
        SetAttribute(Attribute::Dim).write_ansi(buf)?;
    }
    if style.italic {
        SetAttribute(Attribute::Italic).write_ansi(buf)?;
    }
    if style.underline {
        SetAttribute(Attribute::Underlined).write_ansi(buf)?;
    }
    buf.write_str(&run.text)?;
    SetAttribute(Attribute::Reset).write_ansi(buf)
}

impl<W: Write> LineSink for AnsiSink<W> {
    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        let mut buf = String::new();
        for run in line.runs() {
            encode_run(&mut buf, run).map_err(|_| io::Error::other("failed to encode ANSI run"))?;
        }
        buf.push_str(self.ending.as_str());
        self.out.write_all(buf.as_bytes())
    }
}

/// Writes lines as bare text, dropping every style
pub struct PlainSink<W> {
    out: W,
    ending: LineEnding,
}

impl<W: Write> PlainSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            ending: LineEnding::Lf,
        }
    }

    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.ending = ending;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> LineSink for PlainSink<W> {
    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        self.out.write_all(line.plain().as_bytes())?;
        self.out.write_all(self.ending.as_str().as_bytes())
    }
}

/// Collects lines in memory
#[derive(Debug, Default)]
pub struct Collect {
    pub lines: Vec<Line>,
}

impl LineSink for Collect {
    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }
}
