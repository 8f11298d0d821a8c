// ABOUTME: Parameter table data model
// ABOUTME: Defines the 2-column key/value table shape accepted from the host

use serde::{Deserialize, Serialize};
use std::fmt;

/// A flat key/value parameter table as supplied by the host.
///
/// The top-level table carries exactly two columns (a text key and a value);
/// a value cell may itself hold a nested table of arbitrary width, which the
/// converter turns into a list of row objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(default)]
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Bool,
    Table,
}

/// A single table cell. Untagged so parameter files can write plain JSON
/// scalars; an object with a `columns` key deserializes as a nested table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Table(Table),
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, cells: Vec<Cell>) {
        self.rows.push(cells);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Number)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Bool)
    }

    pub fn table(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Table)
    }
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Text => "text",
            ColumnKind::Number => "number",
            ColumnKind::Bool => "bool",
            ColumnKind::Table => "table",
        };
        write!(f, "{}", name)
    }
}
