//! Immutable, column-oriented track table

use serde_json::{Map, Value};

use super::cell::Cell;

/// One named column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// In-memory track table
///
/// Columns keep source header order and rows keep source file order. There is
/// no mutating API: once built the table is only read.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackTable {
    columns: Vec<Column>,
    row_count: usize,
}

impl TrackTable {
    /// Build a table from columns of equal length
    ///
    /// Shorter columns are padded with `Cell::Null` so every row is complete.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let row_count = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        let columns = columns
            .into_iter()
            .map(|mut column| {
                column.cells.resize(row_count, Cell::Null);
                column
            })
            .collect();

        Self { columns, row_count }
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Row `index` as a JSON object keyed by column name
    ///
    /// `transform` sees every (column, cell) pair and returns the JSON value to
    /// emit, so callers can re-clean or re-type cells on the way out.
    pub fn row_json<F>(&self, index: usize, mut transform: F) -> Map<String, Value>
    where
        F: FnMut(&str, &Cell) -> Value,
    {
        let mut row = Map::new();
        for column in &self.columns {
            let value = column
                .cells
                .get(index)
                .map(|cell| transform(&column.name, cell))
                .unwrap_or(Value::Null);
            row.insert(column.name.clone(), value);
        }
        row
    }
}
