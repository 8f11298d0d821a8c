// ABOUTME: Tabular parameter module for the weft template renderer
// ABOUTME: Exports the parameter table model and the table-to-context converter

pub mod convert;
pub mod error;
pub mod model;

pub use convert::{convert, convert_rows};
pub use error::{Result, TableError};
pub use model::{Cell, Column, ColumnKind, Table};
