//! Column definitions for the grid.

use serde::{Deserialize, Serialize};

/// Declared data type of a column.
///
/// Drives both the sort comparator and the display formatter so the two
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text. The default.
    #[default]
    Text,
    /// Whole numbers.
    Int,
    /// Fixed-point decimal numbers.
    Decimal,
    /// Booleans, displayed as yes/no tokens.
    Bool,
    /// Instants, displayed with the column's date format.
    DateTime,
    /// Text rendered as an activatable link. Compared and exported raw.
    Link,
}

/// Column configuration.
///
/// Columns define the structure of the grid: a stable key into row cells,
/// the header label, the declared data type, and optional display hints.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("salary", "Salary").data_type(DataType::Int).width(120),
///     Column::new("hired", "Hire Date")
///         .data_type(DataType::DateTime)
///         .date_format("%Y-%m-%d"),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique, stable identifier. Keys row cells and layout state.
    pub key: String,
    /// Header text displayed at the top.
    pub header: String,
    /// Declared data type.
    pub data_type: DataType,
    /// Datetime display pattern (chrono strftime syntax).
    pub date_format: Option<String>,
    /// Default width in pixels. `None` means intrinsic/auto width.
    pub width: Option<u16>,
}

impl Column {
    /// Create a new text column.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            data_type: DataType::default(),
            date_format: None,
            width: None,
        }
    }

    /// Set the declared data type.
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Set the datetime display pattern.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Set a default pixel width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}
