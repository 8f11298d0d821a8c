// ABOUTME: Tabular-to-hierarchical conversion for parameter tables
// ABOUTME: Turns 2-column key/value tables into the JSON context handlebars consumes

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use super::error::{Result, TableError};
use super::model::{Cell, ColumnKind, Table};

/// Convert a top-level parameter table into a template data context.
///
/// The table must have exactly two columns with the first declared as text.
/// Each row becomes one entry: the first cell is the key, the second cell the
/// value. A table-valued cell converts to a list of row objects via
/// [`convert_rows`]. Duplicate keys overwrite in row order (last write wins).
pub fn convert(table: &Table) -> Result<JsonValue> {
    if table.column_count() != 2 {
        return Err(TableError::ColumnCount {
            found: table.column_count(),
        });
    }

    if table.columns[0].kind != ColumnKind::Text {
        return Err(TableError::KeyColumnKind {
            found: table.columns[0].kind,
        });
    }

    let mut context = Map::new();

    for (index, cells) in table.rows.iter().enumerate() {
        check_row_width(index, table.column_count(), cells)?;

        let key = cells[0]
            .as_text()
            .ok_or(TableError::KeyNotText { row: index })?;

        context.insert(key.to_string(), cell_to_value(&cells[1])?);
    }

    debug!("converted parameter table with {} entries", context.len());
    Ok(JsonValue::Object(context))
}

/// Convert a nested table into an ordered sequence of row objects.
///
/// Every column of every row becomes a key/value pair keyed by the column
/// name; table-valued cells recurse. Column names are unique by construction,
/// so no duplicate handling is needed here.
pub fn convert_rows(table: &Table) -> Result<Vec<JsonValue>> {
    let mut rows = Vec::with_capacity(table.rows.len());

    for (index, cells) in table.rows.iter().enumerate() {
        check_row_width(index, table.column_count(), cells)?;

        let mut row = Map::new();
        for (column, cell) in table.columns.iter().zip(cells) {
            row.insert(column.name.clone(), cell_to_value(cell)?);
        }
        rows.push(JsonValue::Object(row));
    }

    Ok(rows)
}

fn cell_to_value(cell: &Cell) -> Result<JsonValue> {
    let value = match cell {
        Cell::Table(nested) => JsonValue::Array(convert_rows(nested)?),
        Cell::Text(s) => JsonValue::String(s.clone()),
        Cell::Number(n) => JsonValue::Number(n.clone()),
        Cell::Bool(b) => JsonValue::Bool(*b),
        Cell::Null => JsonValue::Null,
    };
    Ok(value)
}

fn check_row_width(row: usize, expected: usize, cells: &[Cell]) -> Result<()> {
    if cells.len() != expected {
        return Err(TableError::RowWidth {
            row,
            expected,
            found: cells.len(),
        });
    }
    Ok(())
}
