//! termgrid - table layout and rendering for fixed-width terminals
//!
//! Build a [`Table`] of rows and cells, pick column and row [`Layout`]s, a
//! border and a separator, then render it to a target width. The result is
//! a sequence of styled [`Line`]s, each exactly that wide, which a
//! [`LineSink`] writes out. The demo binary is in `main.rs`.

pub mod border;
mod canvas;
pub mod config;
pub mod error;
pub mod layout;
pub mod line;
pub mod model;
pub mod render;
pub mod sink;
pub mod style;
pub mod text;

pub use border::{BorderStyle, Edges, LineStyle, SeparatorStyle};
pub use config::RenderConfig;
pub use error::{Axis, Error, Result};
pub use layout::{Layout, Weights};
pub use line::{Line, Run};
pub use model::{Cell, Element, Overflow, Row, Table};
pub use render::{Lines, RenderOptions, Rendered};
pub use sink::{AnsiSink, Collect, LineEnding, LineSink, PlainSink};
pub use style::Style;
pub use text::{Span, StyledText};

pub use crossterm::style::Color;
