//! CSV export of the current grid view.

use chrono::NaiveDate;
use thiserror::Error;

use crate::column::{Column, DataType};
use crate::format::{BoolTokens, format_cell};
use crate::row::Row;

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("export produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize rows to CSV text, in the given column order.
///
/// The header row carries the column display labels; data rows carry the
/// same formatted values as on-screen display, except link cells which
/// export their raw value. Every field is double-quoted with embedded
/// quotes doubled, rows are newline-joined, and null cells render empty.
pub fn export_csv(
    columns: &[&Column],
    rows: &[&Row],
    tokens: &BoolTokens,
) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(columns.iter().map(|column| column.header.as_str()))?;
    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .map(|column| {
                let value = row.get(&column.key);
                match column.data_type {
                    DataType::Link => value.raw_string(),
                    _ => format_cell(column, value, tokens),
                }
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    // Rows are newline-joined; drop the trailing record terminator.
    while text.ends_with('\n') || text.ends_with('\r') {
        text.pop();
    }
    Ok(text)
}

/// The download file name for an export performed on the given date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("export-{}.csv", date.format("%Y-%m-%d"))
}
