//! Table renderer
//!
//! Turns a [`Table`] into lines of styled text exactly `width` columns wide.
//! Each call runs the same fixed sequence:
//!
//! 1. grid placement - resolve spans into slots
//! 2. measurement - natural width of every cell, nested tables included
//! 3. column sizing - the column layout distributes the width left after
//!    borders and rules
//! 4. row sizing - content is laid out at the fixed widths to get natural
//!    heights; with a height bound the row layout distributes it
//! 5. draw - rules, borders and cell boxes painted onto a canvas
//!
//! Every error surfaces before drawing starts, so a failed render yields no
//! lines at all.

mod draw;
mod grid;
mod measure;

use tracing::debug;

use crate::border::Frame;
use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::line::Line;
use crate::model::Table;
use crate::style::Style;
use draw::Geometry;

/// Knobs that apply to a whole render, nested tables included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Replace box-drawing glyphs with ASCII
    pub ascii: bool,
    /// Style layered over the table style for borders and rules
    pub rule_style: Option<Style>,
}

/// Output of a successful render
///
/// Lines are produced on demand from the painted canvas; iterating again
/// yields the same lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    canvas: Canvas,
}

impl Rendered {
    pub fn lines(&self) -> Lines<'_> {
        Lines {
            canvas: &self.canvas,
            next: 0,
        }
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.canvas.height()
    }

    pub fn is_empty(&self) -> bool {
        self.canvas.height() == 0
    }

    /// Width of every line, in terminal columns
    pub fn width(&self) -> usize {
        self.canvas.width()
    }
}

impl<'a> IntoIterator for &'a Rendered {
    type Item = Line;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Iterator over the lines of a [`Rendered`] table
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    canvas: &'a Canvas,
    next: usize,
}

impl Iterator for Lines<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.next >= self.canvas.height() {
            return None;
        }
        let line = self.canvas.line(self.next);
        self.next += 1;
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.canvas.height() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Lines<'_> {}

impl Table {
    /// Render at `width` columns, every row at its natural height
    pub fn render(&self, width: usize) -> Result<Rendered> {
        self.render_with(&RenderOptions::default(), width, None)
    }

    /// Render into a `width` x `height` box, sizing rows with the row layout
    pub fn render_bounded(&self, width: usize, height: usize) -> Result<Rendered> {
        self.render_with(&RenderOptions::default(), width, Some(height))
    }

    pub fn render_with(
        &self,
        options: &RenderOptions,
        width: usize,
        height: Option<usize>,
    ) -> Result<Rendered> {
        let canvas = draw_table(self, width, height, Style::default(), options)?;
        Ok(Rendered { canvas })
    }
}

/// Lay out and paint one table; nested tables come back through here
pub(crate) fn draw_table(
    table: &Table,
    width: usize,
    height: Option<usize>,
    base: Style,
    options: &RenderOptions,
) -> Result<Canvas> {
    if table.rows().is_empty() {
        return Ok(Canvas::new(width, 0));
    }

    let style = base.layered(table.style());
    let rule_style = style.layered(options.rule_style.as_ref());
    let frame = Frame::new(table.border().copied(), table.separator().copied(), options.ascii);

    let grid = grid::place(table)?;
    let naturals = measure::column_naturals(&grid)?;

    let overhead = frame.horizontal_overhead(grid.columns);
    let required = overhead + grid.columns;
    if width < required {
        return Err(Error::InsufficientWidth {
            required,
            available: width,
        });
    }
    let widths = table
        .column_layout()
        .compute(width - overhead, grid.columns, Some(&naturals))?;

    let gap = usize::from(frame.column_rule().is_some());
    let (prepared, natural_heights) =
        measure::prepare(&grid, table, &widths, gap, style, options)?;

    let headers: Vec<bool> = table.rows().iter().map(|r| r.is_header()).collect();
    let heights = match height {
        None => natural_heights,
        Some(height) => {
            let overhead = frame.vertical_overhead(&headers);
            let required = overhead + grid.rows;
            if height < required {
                return Err(Error::InsufficientHeight {
                    required,
                    available: height,
                });
            }
            table
                .row_layout()
                .compute(height - overhead, grid.rows, Some(&natural_heights))?
        }
    };

    debug!(
        columns = grid.columns,
        rows = grid.rows,
        ?widths,
        ?heights,
        "table layout resolved"
    );

    let last = headers.len() - 1;
    let row_rules = headers
        .iter()
        .enumerate()
        .map(|(r, &header)| r < last && frame.row_rule(header).is_some())
        .collect();

    let geometry = Geometry {
        widths: &widths,
        heights: &heights,
        frame,
        row_rules,
    };
    Ok(draw::paint(table, &grid, &prepared, &geometry, style, rule_style))
}
