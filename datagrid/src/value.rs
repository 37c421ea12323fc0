//! Cell values carried by grid rows.
//!
//! Values are loosely typed: the owning column's [`DataType`](crate::column::DataType)
//! decides how a value is compared and displayed. `Text` cells under a typed
//! column are parsed at the point of use, so the same coercion feeds both the
//! sort comparator and the display formatter.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent value. Renders empty, sorts before everything ascending.
    Null,
    Text(String),
    Int(i64),
    Decimal(Decimal),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check whether this cell carries no value.
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Unformatted stringification of the value.
    ///
    /// This is the raw form used for link cells and as the fallback when
    /// typed formatting cannot be applied. `Null` renders as the empty string.
    pub fn raw_string(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Decimal(d) => d.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    /// Coerce to a number for numeric comparison.
    ///
    /// `Text` cells are parsed as decimals; anything unparsable ranks with
    /// nulls rather than poisoning the comparator.
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            CellValue::Int(i) => Some(Decimal::from(*i)),
            CellValue::Decimal(d) => Some(*d),
            CellValue::Text(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        }
    }

    /// Coerce to a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Coerce to an instant for datetime comparison and formatting.
    ///
    /// `Text` cells go through [`parse_datetime`]; `None` means the caller
    /// should fall back to string comparison or raw display.
    pub fn as_instant(&self) -> Option<NaiveDateTime> {
        match self {
            CellValue::DateTime(dt) => Some(*dt),
            CellValue::Text(s) => parse_datetime(s),
            _ => None,
        }
    }
}

/// Parse a datetime string.
///
/// Tries RFC 3339 / ISO-8601 first, then the `"YYYY-MM-DD HH:mm:ss"` form,
/// then a bare date (interpreted as midnight). Returns `None` when every
/// stage fails.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<i32> for CellValue {
    fn from(i: i32) -> Self {
        CellValue::Int(i64::from(i))
    }
}

impl From<Decimal> for CellValue {
    fn from(d: Decimal) -> Self {
        CellValue::Decimal(d)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}
