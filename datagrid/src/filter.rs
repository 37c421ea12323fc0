//! Substring row filtering across visible columns.

use crate::column::Column;
use crate::format::{BoolTokens, format_cell};
use crate::row::Row;

/// Check whether a row matches a search term.
///
/// A row matches when at least one column's formatted value contains the
/// trimmed term as a case-insensitive substring. An empty or whitespace-only
/// term matches every row. Null cells never match, but never fail either.
pub fn row_matches(row: &Row, columns: &[Column], query: &str, tokens: &BoolTokens) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    columns.iter().any(|column| {
        let value = row.get(&column.key);
        if value.is_null() {
            return false;
        }
        format_cell(column, value, tokens)
            .to_lowercase()
            .contains(&needle)
    })
}
