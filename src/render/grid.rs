//! Span resolution
//!
//! Places every cell on a slot grid, left to right, skipping slots already
//! claimed by row spans from earlier rows. Slots nobody claims get a blank
//! filler so every grid position is covered exactly once.

use crate::error::{Axis, Error, Result};
use crate::model::{Cell, Table};

/// A cell (or filler) anchored at a grid position
#[derive(Debug, Clone, Copy)]
pub(crate) struct Placement<'a> {
    pub row: usize,
    pub column: usize,
    pub col_span: usize,
    pub row_span: usize,
    /// `None` for filler slots
    pub cell: Option<&'a Cell>,
}

#[derive(Debug)]
pub(crate) struct Grid<'a> {
    pub columns: usize,
    pub rows: usize,
    pub placements: Vec<Placement<'a>>,
}

/// Occupancy of grid slots, growing to the right as cells are placed
struct Occupancy {
    taken: Vec<Vec<bool>>,
}

impl Occupancy {
    fn new(rows: usize) -> Self {
        Self {
            taken: vec![Vec::new(); rows],
        }
    }

    fn is_taken(&self, row: usize, column: usize) -> bool {
        self.taken[row].get(column).copied().unwrap_or(false)
    }

    fn claim(&mut self, row: usize, column: usize) {
        let slots = &mut self.taken[row];
        if slots.len() <= column {
            slots.resize(column + 1, false);
        }
        slots[column] = true;
    }

    fn extent(&self) -> usize {
        self.taken.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Resolve the table's cells into a grid
///
/// The column count is fixed by a weighted column layout, otherwise it is the
/// widest row extent. Spans that run past the last column (when the count is
/// fixed) or past the last row fail with `InvalidSpan`.
pub(crate) fn place(table: &Table) -> Result<Grid<'_>> {
    let rows = table.rows().len();
    let limit = table.column_layout().declared_slots();
    let mut occupancy = Occupancy::new(rows);
    let mut placements = Vec::new();

    for (r, row) in table.rows().iter().enumerate() {
        let mut column = 0;
        for cell in row.cells() {
            while occupancy.is_taken(r, column) {
                column += 1;
            }

            let col_span = cell.col_span();
            let row_span = cell.row_span();

            if let Some(limit) = limit {
                let remaining = limit.saturating_sub(column);
                if col_span > remaining {
                    return Err(Error::span(
                        Axis::Column,
                        col_span,
                        format!("only {remaining} columns remain at row {r}, column {column}"),
                    ));
                }
            }
            let remaining_rows = rows - r;
            if row_span > remaining_rows {
                return Err(Error::span(
                    Axis::Row,
                    row_span,
                    format!("only {remaining_rows} rows remain at row {r}, column {column}"),
                ));
            }

            for dr in 0..row_span {
                for dc in 0..col_span {
                    occupancy.claim(r + dr, column + dc);
                }
            }
            placements.push(Placement {
                row: r,
                column,
                col_span,
                row_span,
                cell: Some(cell),
            });
            column += col_span;
        }
    }

    let columns = limit.unwrap_or_else(|| occupancy.extent());

    for r in 0..rows {
        for c in 0..columns {
            if !occupancy.is_taken(r, c) {
                placements.push(Placement {
                    row: r,
                    column: c,
                    col_span: 1,
                    row_span: 1,
                    cell: None,
                });
            }
        }
    }
    placements.sort_by_key(|p| (p.row, p.column));

    Ok(Grid {
        columns,
        rows,
        placements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn anchors(grid: &Grid<'_>) -> Vec<(usize, usize, bool)> {
        grid.placements
            .iter()
            .map(|p| (p.row, p.column, p.cell.is_some()))
            .collect()
    }

    #[test]
    fn test_ragged_rows_get_fillers() {
        let table = Table::new()
            .with_row(["a", "b", "c"].into_iter().collect())
            .with_row(["d"].into_iter().collect());
        let grid = place(&table).unwrap();

        assert_eq!(grid.columns, 3);
        assert_eq!(grid.rows, 2);
        assert_eq!(
            anchors(&grid),
            vec![
                (0, 0, true),
                (0, 1, true),
                (0, 2, true),
                (1, 0, true),
                (1, 1, false),
                (1, 2, false),
            ]
        );
    }

    #[test]
    fn test_row_span_pushes_next_row_right() {
        let table = Table::new()
            .with_row(
                Row::new()
                    .with_cell(Cell::new("tall").with_span(1, 2).unwrap())
                    .with_cell("b"),
            )
            .with_row(["c"].into_iter().collect());
        let grid = place(&table).unwrap();

        assert_eq!(grid.columns, 2);
        // "c" lands in column 1 because column 0 is still held by "tall"
        assert_eq!(anchors(&grid), vec![(0, 0, true), (0, 1, true), (1, 1, true)]);
    }

    #[test]
    fn test_column_span_past_declared_columns() {
        let table = Table::with_column_weights(&[1, 1])
            .unwrap()
            .with_row(
                Row::new()
                    .with_cell("a")
                    .with_cell(Cell::new("wide").with_span(2, 1).unwrap()),
            );
        let err = place(&table).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSpan {
                axis: Axis::Column,
                span: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_row_span_past_last_row() {
        let table = Table::new().with_row(
            Row::new().with_cell(Cell::new("tall").with_span(1, 3).unwrap()),
        );
        assert!(matches!(
            place(&table),
            Err(Error::InvalidSpan { axis: Axis::Row, .. })
        ));
    }

    #[test]
    fn test_too_many_cells_for_weights() {
        let table = Table::with_column_weights(&[1])
            .unwrap()
            .with_row(["a", "b"].into_iter().collect());
        assert!(matches!(place(&table), Err(Error::InvalidSpan { .. })));
    }

    #[test]
    fn test_rows_without_cells() {
        let table = Table::new().with_row(Row::new());
        let grid = place(&table).unwrap();
        assert_eq!(grid.columns, 0);
        assert!(grid.placements.is_empty());
    }
}
