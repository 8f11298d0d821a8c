// ABOUTME: Error types for parameter table conversion
// ABOUTME: Defines schema violations detected while converting tables to contexts

use thiserror::Error;

use super::model::ColumnKind;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("parameter table must contain exactly 2 columns (found {found})")]
    ColumnCount { found: usize },

    #[error("parameter table first column must be declared as text (found {found})")]
    KeyColumnKind { found: ColumnKind },

    #[error("row {row} has {found} cells but the table declares {expected} columns")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} key cell is not a text value")]
    KeyNotText { row: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;
