//! Row data supplied to the grid.

use std::collections::HashMap;

use crate::value::CellValue;

static NULL: CellValue = CellValue::Null;

/// One data record, keyed by a stable id.
///
/// Rows are supplied wholesale by the caller on every render pass; the grid
/// never mutates them. Cells are looked up by column key, and a missing cell
/// behaves exactly like a null one.
#[derive(Debug, Clone, Default)]
pub struct Row {
    id: String,
    cells: HashMap<String, CellValue>,
}

impl Row {
    /// Create a row with the given id and no cells.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: HashMap::new(),
        }
    }

    /// Add a cell value for a column key.
    pub fn cell(mut self, key: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// The row's unique id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the value for a column key. Missing cells read as null.
    pub fn get(&self, key: &str) -> &CellValue {
        self.cells.get(key).unwrap_or(&NULL)
    }
}
