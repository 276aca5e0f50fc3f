//! Errors raised while building or rendering a table
//!
//! Every error is detected synchronously, before any line is produced, so a
//! failed render never leaves a half-drawn table behind.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Which kind of slot a span or layout refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Column,
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Column => f.write_str("column"),
            Axis::Row => f.write_str("row"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A layout policy cannot allocate sizes for the requested slots
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// A cell span is zero or runs past the table's dimensions
    #[error("invalid {axis} span of {span}: {reason}")]
    InvalidSpan {
        axis: Axis,
        span: usize,
        reason: String,
    },

    /// The target width cannot hold the border overhead plus one cell per column
    #[error("width {available} is too narrow, need at least {required}")]
    InsufficientWidth { required: usize, available: usize },

    /// The target height cannot hold the rule overhead plus one line per row
    #[error("height {available} is too short, need at least {required}")]
    InsufficientHeight { required: usize, available: usize },
}

impl Error {
    pub(crate) fn layout(reason: impl Into<String>) -> Self {
        Error::InvalidLayout(reason.into())
    }

    pub(crate) fn span(axis: Axis, span: usize, reason: impl Into<String>) -> Self {
        Error::InvalidSpan {
            axis,
            span,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::span(Axis::Column, 3, "only 2 columns remain at row 0, column 1");
        assert_eq!(
            err.to_string(),
            "invalid column span of 3: only 2 columns remain at row 0, column 1"
        );

        let err = Error::InsufficientWidth {
            required: 7,
            available: 4,
        };
        assert_eq!(err.to_string(), "width 4 is too narrow, need at least 7");
    }
}
