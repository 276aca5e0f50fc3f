//! Measurement and content preparation
//!
//! Natural widths are measured with unlimited space. Heights can only be
//! known once column widths are fixed, since wrapped text and nested tables
//! both depend on the width they get.

use tracing::trace;

use super::grid::Grid;
use super::{draw_table, RenderOptions};
use crate::border::Frame;
use crate::canvas::Canvas;
use crate::error::Result;
use crate::model::{Element, Overflow, Table};
use crate::style::Style;
use crate::text::{self, StyledText, TextLine};

/// Cell content ready to be painted into its box
#[derive(Debug)]
pub(crate) enum Content {
    Blank,
    Lines(Vec<TextLine>),
    Nested(Canvas),
}

impl Content {
    fn height(&self) -> usize {
        match self {
            Content::Blank => 0,
            Content::Lines(lines) => lines.len(),
            Content::Nested(canvas) => canvas.height(),
        }
    }
}

/// Content plus the style its box is filled with
#[derive(Debug)]
pub(crate) struct Prepared {
    pub content: Content,
    pub style: Style,
}

fn element_lines(element: &Element) -> Option<Vec<TextLine>> {
    match element {
        Element::Text(s) => Some(text::logical_lines(&StyledText::from(s.as_str()))),
        Element::Styled(styled) => Some(text::logical_lines(styled)),
        Element::Table(_) => None,
    }
}

/// Width an element would take given unlimited space
pub(crate) fn natural_width(element: &Element) -> Result<usize> {
    match element {
        Element::Table(table) => table_width(table),
        _ => Ok(element_lines(element)
            .map(|lines| text::natural_width(&lines))
            .unwrap_or(0)),
    }
}

/// Natural width of a whole table: column naturals plus its own overhead
pub(crate) fn table_width(table: &Table) -> Result<usize> {
    if table.rows().is_empty() {
        return Ok(0);
    }
    let grid = super::grid::place(table)?;
    let naturals = column_naturals(&grid)?;
    let frame = Frame::new(table.border().copied(), table.separator().copied(), false);
    Ok(frame.horizontal_overhead(grid.columns) + naturals.iter().sum::<usize>())
}

/// Widest natural width per column
///
/// A spanning cell contributes its width divided (rounding up) across the
/// columns it covers.
pub(crate) fn column_naturals(grid: &Grid<'_>) -> Result<Vec<usize>> {
    let mut naturals = vec![0; grid.columns];
    for placement in &grid.placements {
        let Some(cell) = placement.cell else {
            continue;
        };
        let share = natural_width(cell.element())?.div_ceil(placement.col_span);
        for n in &mut naturals[placement.column..placement.column + placement.col_span] {
            *n = (*n).max(share);
        }
    }
    Ok(naturals)
}

/// Width of a box covering `span` columns starting at `column`, rules included
pub(crate) fn box_width(widths: &[usize], gap: usize, column: usize, span: usize) -> usize {
    let columns: usize = widths[column..column + span].iter().sum();
    columns + gap * (span - 1)
}

/// Lay out every placement's content at its box width
///
/// Returns the prepared content (in placement order) and each row's natural
/// height. Row-spanning cells contribute their height divided (rounding up)
/// across the rows they cover.
pub(crate) fn prepare(
    grid: &Grid<'_>,
    table: &Table,
    widths: &[usize],
    gap: usize,
    base: Style,
    options: &RenderOptions,
) -> Result<(Vec<Prepared>, Vec<usize>)> {
    let mut prepared = Vec::with_capacity(grid.placements.len());
    let mut heights = vec![0; grid.rows];

    for placement in &grid.placements {
        let row = &table.rows()[placement.row];
        let row_style = base.layered(row.style());

        let Some(cell) = placement.cell else {
            prepared.push(Prepared {
                content: Content::Blank,
                style: row_style,
            });
            continue;
        };

        let style = row_style.layered(cell.style());
        let width = box_width(widths, gap, placement.column, placement.col_span);

        let content = match cell.element() {
            Element::Table(nested) => {
                trace!(
                    width,
                    row = placement.row,
                    column = placement.column,
                    "rendering nested table"
                );
                Content::Nested(draw_table(nested, width, None, style, options)?)
            }
            element => {
                let lines = element_lines(element).unwrap_or_default();
                match cell.overflow() {
                    Overflow::Clip => Content::Lines(lines),
                    Overflow::Wrap => Content::Lines(
                        lines.iter().flat_map(|line| text::wrap(line, width)).collect(),
                    ),
                }
            }
        };

        let share = content.height().div_ceil(placement.row_span);
        for h in &mut heights[placement.row..placement.row + placement.row_span] {
            *h = (*h).max(share);
        }
        prepared.push(Prepared { content, style });
    }

    Ok((prepared, heights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::BorderStyle;
    use crate::model::{Cell, Row};
    use crate::render::grid::place;

    #[test]
    fn test_natural_width_of_text() {
        assert_eq!(natural_width(&Element::from("abc\nlonger")).unwrap(), 6);
        assert_eq!(natural_width(&Element::from("")).unwrap(), 0);
    }

    #[test]
    fn test_nested_table_width_includes_overhead() {
        let inner = Table::new()
            .with_border(BorderStyle::ascii())
            .with_row(["ab", "cde"].into_iter().collect());
        // 2 + 3 content, 2 border columns, no separator
        assert_eq!(table_width(&inner).unwrap(), 7);
        assert_eq!(table_width(&Table::new()).unwrap(), 0);
    }

    #[test]
    fn test_spanning_cell_splits_width() {
        let table = Table::new()
            .with_row(Row::new().with_cell(Cell::new("abcde").with_span(2, 1).unwrap()))
            .with_row(["a", "b"].into_iter().collect());
        let grid = place(&table).unwrap();
        assert_eq!(column_naturals(&grid).unwrap(), vec![3, 3]);
    }

    #[test]
    fn test_box_width_counts_rules() {
        assert_eq!(box_width(&[3, 4, 5], 1, 0, 3), 14);
        assert_eq!(box_width(&[3, 4, 5], 0, 1, 2), 9);
        assert_eq!(box_width(&[3, 4, 5], 1, 2, 1), 5);
    }

    #[test]
    fn test_wrap_grows_row_height() {
        let table = Table::new().with_row(
            Row::new()
                .with_cell(Cell::new("abcdefgh").with_overflow(crate::model::Overflow::Wrap))
                .with_cell("x"),
        );
        let grid = place(&table).unwrap();
        let options = RenderOptions::default();
        let (prepared, heights) =
            prepare(&grid, &table, &[3, 3], 0, Style::default(), &options).unwrap();
        assert_eq!(heights, vec![3]);
        assert_eq!(prepared.len(), 2);
    }

    #[test]
    fn test_clip_keeps_one_line() {
        let table = Table::new().with_row(["abcdefgh"].into_iter().collect());
        let grid = place(&table).unwrap();
        let (_, heights) =
            prepare(&grid, &table, &[3], 0, Style::default(), &RenderOptions::default()).unwrap();
        assert_eq!(heights, vec![1]);
    }
}
