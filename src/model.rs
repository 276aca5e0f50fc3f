//! Declarative table description
//!
//! A [`Table`] owns an ordered list of [`Row`]s, each row an ordered list of
//! [`Cell`]s, and each cell one [`Element`]: plain text, styled text, or
//! another table. Callers build the tree up front; rendering only reads it.
//!
//! ```
//! use termgrid::{BorderStyle, Cell, Row, Table};
//!
//! let table = Table::with_column_weights(&[1, 2])
//!     .unwrap()
//!     .with_border(BorderStyle::ascii())
//!     .with_row(Row::header().with_cell("name").with_cell("value"))
//!     .with_row(Row::new().with_cell("width").with_cell("80"));
//!
//! let lines: Vec<String> = table.render(20).unwrap().lines().map(|l| l.plain()).collect();
//! assert_eq!(lines.len(), 5);
//! assert_eq!(lines[0], "+------------------+");
//! assert_eq!(lines[1], "|name  value       |");
//! assert_eq!(lines[2], "+------------------+");
//! ```

use crate::border::{BorderStyle, SeparatorStyle};
use crate::error::{Axis, Error, Result};
use crate::layout::Layout;
use crate::style::Style;
use crate::text::StyledText;

/// Content of a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Styled(StyledText),
    Table(Box<Table>),
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::Text(text.to_string())
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::Text(text)
    }
}

impl From<StyledText> for Element {
    fn from(text: StyledText) -> Self {
        Element::Styled(text)
    }
}

impl From<Table> for Element {
    fn from(table: Table) -> Self {
        Element::Table(Box::new(table))
    }
}

/// What happens to text wider than its cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    /// Cut at the cell edge
    #[default]
    Clip,
    /// Continue on the next line, growing the row
    Wrap,
}

/// One element placed in the grid, possibly spanning several slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    element: Element,
    col_span: usize,
    row_span: usize,
    style: Option<Style>,
    overflow: Overflow,
}

impl Cell {
    pub fn new(element: impl Into<Element>) -> Self {
        Self {
            element: element.into(),
            col_span: 1,
            row_span: 1,
            style: None,
            overflow: Overflow::Clip,
        }
    }

    /// Set both spans; each must be at least 1
    pub fn with_span(mut self, columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 {
            return Err(Error::span(Axis::Column, 0, "spans must be at least 1"));
        }
        if rows == 0 {
            return Err(Error::span(Axis::Row, 0, "spans must be at least 1"));
        }
        self.col_span = columns;
        self.row_span = rows;
        Ok(self)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn row_span(&self) -> usize {
        self.row_span
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }
}

impl From<Element> for Cell {
    fn from(element: Element) -> Self {
        Cell::new(element)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

impl From<StyledText> for Cell {
    fn from(text: StyledText) -> Self {
        Cell::new(text)
    }
}

impl From<Table> for Cell {
    fn from(table: Table) -> Self {
        Cell::new(table)
    }
}

/// An ordered sequence of cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    style: Option<Style>,
    header: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// A row followed by a rule even when the table is collapsed
    pub fn header() -> Self {
        Self {
            header: true,
            ..Self::default()
        }
    }

    pub fn with_cell(mut self, cell: impl Into<Cell>) -> Self {
        self.cells.push(cell.into());
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn add_cell(&mut self, cell: impl Into<Cell>) {
        self.cells.push(cell.into());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn is_header(&self) -> bool {
        self.header
    }
}

impl<T: Into<Cell>> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// A table: rows plus sizing policies, border, separator and default style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    column_layout: Layout,
    row_layout: Layout,
    border: Option<BorderStyle>,
    separator: Option<SeparatorStyle>,
    style: Option<Style>,
}

impl Table {
    /// Empty table with proportional column and row layouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty table with weighted columns
    pub fn with_column_weights(columns: &[u32]) -> Result<Self> {
        Ok(Self {
            column_layout: Layout::weighted(columns)?,
            ..Self::default()
        })
    }

    /// Empty table with weighted rows and columns
    pub fn with_weights(rows: &[u32], columns: &[u32]) -> Result<Self> {
        Ok(Self {
            row_layout: Layout::weighted(rows)?,
            column_layout: Layout::weighted(columns)?,
            ..Self::default()
        })
    }

    pub fn with_row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_column_layout(mut self, layout: Layout) -> Self {
        self.column_layout = layout;
        self
    }

    pub fn with_row_layout(mut self, layout: Layout) -> Self {
        self.row_layout = layout;
        self
    }

    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_separator(mut self, separator: SeparatorStyle) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Drop internal separators; outer borders are untouched
    pub fn collapse(mut self) -> Self {
        self.separator = None;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn set_column_layout(&mut self, layout: Layout) {
        self.column_layout = layout;
    }

    pub fn set_row_layout(&mut self, layout: Layout) {
        self.row_layout = layout;
    }

    pub fn set_border(&mut self, border: Option<BorderStyle>) {
        self.border = border;
    }

    /// `None` collapses the table
    pub fn set_separator(&mut self, separator: Option<SeparatorStyle>) {
        self.separator = separator;
    }

    pub fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_layout(&self) -> &Layout {
        &self.column_layout
    }

    pub fn row_layout(&self) -> &Layout {
        &self.row_layout
    }

    pub fn border(&self) -> Option<&BorderStyle> {
        self.border.as_ref()
    }

    pub fn separator(&self) -> Option<&SeparatorStyle> {
        self.separator.as_ref()
    }

    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub fn is_collapsed(&self) -> bool {
        self.separator.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::LineStyle;

    #[test]
    fn test_new_table_defaults() {
        let table = Table::new();
        assert!(table.rows().is_empty());
        assert_eq!(table.column_layout(), &Layout::Proportional);
        assert_eq!(table.row_layout(), &Layout::Proportional);
        assert!(table.border().is_none());
        assert!(table.is_collapsed());
    }

    #[test]
    fn test_weighted_constructors() {
        let table = Table::with_column_weights(&[1, 2]).unwrap();
        assert_eq!(table.column_layout().declared_slots(), Some(2));
        assert_eq!(table.row_layout(), &Layout::Proportional);

        let table = Table::with_weights(&[1, 1, 1], &[2, 1]).unwrap();
        assert_eq!(table.row_layout().declared_slots(), Some(3));
        assert_eq!(table.column_layout().declared_slots(), Some(2));
    }

    #[test]
    fn test_zero_weight_fails_at_construction() {
        assert!(matches!(
            Table::with_column_weights(&[1, 0]),
            Err(Error::InvalidLayout(_))
        ));
        assert!(matches!(
            Table::with_weights(&[0], &[1]),
            Err(Error::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_zero_span_fails_at_construction() {
        assert!(matches!(
            Cell::new("x").with_span(0, 1),
            Err(Error::InvalidSpan {
                axis: Axis::Column,
                ..
            })
        ));
        assert!(matches!(
            Cell::new("x").with_span(1, 0),
            Err(Error::InvalidSpan { axis: Axis::Row, .. })
        ));
        let cell = Cell::new("x").with_span(2, 3).unwrap();
        assert_eq!((cell.col_span(), cell.row_span()), (2, 3));
    }

    #[test]
    fn test_collapse_is_idempotent() {
        let table = Table::new().with_separator(SeparatorStyle::new(LineStyle::Light));
        assert!(!table.is_collapsed());

        let once = table.clone().collapse();
        let twice = table.collapse().collapse();
        assert_eq!(once, twice);
        assert!(once.separator().is_none());
    }

    #[test]
    fn test_setters_mutate_in_place() {
        let mut table = Table::new();
        table.add_row(["a", "b"].into_iter().collect());
        table.set_border(Some(BorderStyle::light()));
        table.set_column_layout(Layout::Content);
        table.set_separator(None);
        table.set_style(Some(Style::new().bold()));

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].cells().len(), 2);
        assert_eq!(table.column_layout(), &Layout::Content);
        assert!(table.style().is_some_and(|s| s.bold));
    }

    #[test]
    fn test_row_builders() {
        let row = Row::header()
            .with_cell("a")
            .with_cell(Cell::new("b").with_overflow(Overflow::Wrap))
            .with_style(Style::new().dim());
        assert!(row.is_header());
        assert_eq!(row.cells()[1].overflow(), Overflow::Wrap);
        assert!(row.style().is_some());

        let nested = Cell::new(Table::new());
        assert!(matches!(nested.element(), Element::Table(_)));
    }
}
