//! Per-type display formatting.
//!
//! The same formatted text feeds on-screen cells, the substring filter, and
//! the CSV exporter, so what matches and what exports is always what the
//! user sees.

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::column::{Column, DataType};
use crate::value::CellValue;

/// Display pattern used when a datetime column declares no format of its own.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Display tokens for boolean cells.
#[derive(Debug, Clone)]
pub struct BoolTokens {
    pub yes: String,
    pub no: String,
}

impl Default for BoolTokens {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
        }
    }
}

impl BoolTokens {
    /// Create custom yes/no tokens.
    pub fn new(yes: impl Into<String>, no: impl Into<String>) -> Self {
        Self {
            yes: yes.into(),
            no: no.into(),
        }
    }

    fn token(&self, value: bool) -> &str {
        if value { &self.yes } else { &self.no }
    }
}

/// Format a cell value for display under the given column.
///
/// Dispatches on the column's declared data type, one arm per type with the
/// raw stringification as the fallback. Null always renders empty; values
/// that cannot be coerced to the declared type fall back to their raw form
/// rather than erroring.
pub fn format_cell(column: &Column, value: &CellValue, tokens: &BoolTokens) -> String {
    if value.is_null() {
        return String::new();
    }
    match column.data_type {
        DataType::Bool => match value.as_bool() {
            Some(b) => tokens.token(b).to_string(),
            None => value.raw_string(),
        },
        DataType::DateTime => {
            let pattern = column.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
            match value.as_instant().and_then(|i| format_instant(i, pattern)) {
                Some(text) => text,
                // Unparsable values and broken patterns pass through unchanged.
                None => value.raw_string(),
            }
        }
        DataType::Int | DataType::Decimal => match value.as_number() {
            Some(n) => n.to_string(),
            None => value.raw_string(),
        },
        DataType::Text | DataType::Link => value.raw_string(),
    }
}

/// Format an instant with a strftime pattern, or `None` if the pattern is
/// invalid. chrono's `Display` panics on bad specifiers, so the items are
/// validated up front.
fn format_instant(instant: NaiveDateTime, pattern: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }
    Some(instant.format_with_items(items.iter()).to_string())
}
