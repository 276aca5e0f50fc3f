//! Draw phase
//!
//! Paints rules first, borders over them, then every cell box. A box is
//! cleared before its content goes in, which erases any rule segment a span
//! crosses; resolving the canvas afterwards fixes up the junctions.

use super::grid::Grid;
use super::measure::{Content, Prepared};
use crate::border::Frame;
use crate::canvas::{Canvas, Rect};
use crate::model::Table;
use crate::style::Style;

/// Concrete geometry of one table render
pub(crate) struct Geometry<'a> {
    pub widths: &'a [usize],
    pub heights: &'a [usize],
    pub frame: Frame,
    /// Whether a rule follows each row
    pub row_rules: Vec<bool>,
}

impl Geometry<'_> {
    fn gap(&self) -> usize {
        usize::from(self.frame.column_rule().is_some())
    }

    fn column_x(&self) -> Vec<usize> {
        let mut xs = Vec::with_capacity(self.widths.len());
        let mut x = self.frame.left();
        for w in self.widths {
            xs.push(x);
            x += w + self.gap();
        }
        xs
    }

    fn row_y(&self) -> Vec<usize> {
        let mut ys = Vec::with_capacity(self.heights.len());
        let mut y = self.frame.top();
        for (h, rule) in self.heights.iter().zip(&self.row_rules) {
            ys.push(y);
            y += h + usize::from(*rule);
        }
        ys
    }

    pub fn canvas_width(&self) -> usize {
        self.frame.horizontal_overhead(self.widths.len()) + self.widths.iter().sum::<usize>()
    }

    pub fn canvas_height(&self) -> usize {
        let rules = self.row_rules.iter().filter(|&&r| r).count();
        self.frame.top() + self.frame.bottom() + rules + self.heights.iter().sum::<usize>()
    }

    fn box_height(&self, row: usize, span: usize) -> usize {
        let rows: usize = self.heights[row..row + span].iter().sum();
        let rules = self.row_rules[row..row + span - 1].iter().filter(|&&r| r).count();
        rows + rules
    }
}

/// Paint a laid-out table and resolve its rules
pub(crate) fn paint(
    table: &Table,
    grid: &Grid<'_>,
    prepared: &[Prepared],
    geometry: &Geometry<'_>,
    style: Style,
    rule_style: Style,
) -> Canvas {
    let width = geometry.canvas_width();
    let height = geometry.canvas_height();
    let mut canvas = Canvas::new(width, height);
    if width == 0 || height == 0 {
        return canvas;
    }
    canvas.fill(Rect::new(0, 0, width, height), style);

    let xs = geometry.column_x();
    let ys = geometry.row_y();
    let frame = &geometry.frame;

    if let Some(line) = frame.column_rule() {
        for (c, x) in xs.iter().enumerate().take(xs.len().saturating_sub(1)) {
            canvas.vline(x + geometry.widths[c], 0, height - 1, line, rule_style);
        }
    }

    let last_row = table.rows().len().saturating_sub(1);
    for (r, row) in table.rows().iter().enumerate().take(last_row) {
        if let Some(line) = frame.row_rule(row.is_header()) {
            canvas.hline(0, width - 1, ys[r] + geometry.heights[r], line, rule_style);
        }
    }

    if let Some(border) = frame.border() {
        let line = border.line;
        if border.edges.top {
            canvas.hline(0, width - 1, 0, line, rule_style);
        }
        if border.edges.bottom {
            canvas.hline(0, width - 1, height - 1, line, rule_style);
        }
        if border.edges.left {
            canvas.vline(0, 0, height - 1, line, rule_style);
        }
        if border.edges.right {
            canvas.vline(width - 1, 0, height - 1, line, rule_style);
        }
    }

    let gap = geometry.gap();
    for (placement, prepared) in grid.placements.iter().zip(prepared) {
        let rect = Rect::new(
            xs[placement.column],
            ys[placement.row],
            super::measure::box_width(geometry.widths, gap, placement.column, placement.col_span),
            geometry.box_height(placement.row, placement.row_span),
        );
        if rect.is_empty() {
            continue;
        }
        canvas.fill(rect, prepared.style);

        match &prepared.content {
            Content::Blank => {}
            Content::Lines(lines) => {
                for (dy, line) in lines.iter().take(rect.height).enumerate() {
                    canvas.print(rect.x, rect.y + dy, rect.width, line, prepared.style);
                }
            }
            Content::Nested(nested) => canvas.blit(nested, rect),
        }
    }

    canvas.resolve();
    canvas
}
