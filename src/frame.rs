//! Column-oriented result frames.
//!
//! Converts ordered result rows into the frame shape the host's
//! visualization layer consumes: one named column per variable, every
//! column the same length as the row count.

use serde::{Deserialize, Serialize};

use crate::sparql::ResultRow;

/// A single named column of string values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (the variable it was bound from).
    pub name: String,

    /// Values in row order.
    pub values: Vec<String>,
}

impl Column {
    /// Creates an empty column with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }
}

/// A column-oriented result table for one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Columns in schema order.
    pub columns: Vec<Column>,
}

impl Frame {
    /// Creates an empty frame (zero columns, zero rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Infers the schema from `rows` and materializes them in one step.
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let columns = infer_columns(rows);
        materialize(rows, &columns)
    }

    /// Returns the column with the given name, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the number of rows. All columns share this length.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Returns true when the frame holds no data.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }
}

/// Derives the column set from the first row's variable bindings.
///
/// An empty result set yields an empty column set; that is a defined edge
/// case, not an error. Only the first row determines the schema: variables
/// appearing for the first time in later rows are dropped during
/// materialization.
pub fn infer_columns(rows: &[ResultRow]) -> Vec<String> {
    match rows.first() {
        Some(first) => first.names().map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Builds one column per inferred name and appends each row's value into
/// the matching column.
///
/// A row missing a binding for a column contributes an empty string, so
/// every column ends up with exactly `rows.len()` values.
pub fn materialize(rows: &[ResultRow], column_names: &[String]) -> Frame {
    let mut columns: Vec<Column> = column_names
        .iter()
        .map(|name| Column {
            name: name.clone(),
            values: Vec::with_capacity(rows.len()),
        })
        .collect();

    for row in rows {
        for column in &mut columns {
            let value = row.get(&column.name).unwrap_or_default();
            column.values.push(value.to_string());
        }
    }

    Frame { columns }
}
