//! Materialized tables.

use crate::values::CellValue;
use std::collections::HashMap;

/// A single generated row: column name to cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, CellValue>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell by column name.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    /// Set a cell value, replacing any previous value for the column.
    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.values.insert(column.into(), value);
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no cell has been populated yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of rows sharing one column list.
///
/// Column order is significant: it is the declared schema order and the
/// order headers and fields are written on export. Rows are kept in
/// generation order.
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name, used in error and log messages.
    pub name: String,
    /// Column names in declared order.
    pub columns: Vec<String>,
    /// For dimension tables, the column holding the table-unique key.
    pub key_column: Option<String>,
    /// Rows in generation order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given column list.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            key_column: None,
            rows: Vec::new(),
        }
    }

    /// Designate the key column. Set by dimension generation.
    pub fn with_key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Append a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
