//! Sort state and type-aware cell comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::column::DataType;
use crate::value::CellValue;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
    /// No sort applied; the filtered set keeps its insertion order.
    #[default]
    Unsorted,
}

impl SortDirection {
    /// Advance one step in the ascending → descending → unsorted cycle.
    pub fn cycle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Unsorted,
            SortDirection::Unsorted => SortDirection::Ascending,
        }
    }
}

/// The active sort column and direction.
///
/// An empty key or `Unsorted` direction both mean "no sort".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// The unsorted spec.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Create a spec for a column and direction.
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    /// Whether a sort is in effect.
    pub fn is_active(&self) -> bool {
        !self.key.is_empty() && self.direction != SortDirection::Unsorted
    }

    /// The spec after activating a column header.
    ///
    /// Repeated activation of the active column cycles its direction;
    /// activating any other column starts over at ascending. Cycling out to
    /// unsorted clears the key as well.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            match self.direction.cycle() {
                SortDirection::Unsorted => Self::unsorted(),
                direction => Self::new(key, direction),
            }
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

/// Compare two cells under a column's declared data type.
///
/// The ordering is always ascending; the caller reverses it for descending.
/// Nulls compare equal to each other and before every real value, which
/// puts them first ascending and last descending. Cells that cannot be
/// coerced to a numeric or boolean column's type rank with the nulls;
/// datetime cells where either side fails to parse fall back to plain
/// string comparison for that pair.
pub fn compare_cells(data_type: DataType, a: &CellValue, b: &CellValue) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        (false, false) => {}
    }
    match data_type {
        DataType::Int | DataType::Decimal => rank_option(a.as_number(), b.as_number()),
        DataType::Bool => rank_option(a.as_bool(), b.as_bool()),
        DataType::DateTime => match (a.as_instant(), b.as_instant()) {
            (Some(left), Some(right)) => left.cmp(&right),
            _ => a.raw_string().cmp(&b.raw_string()),
        },
        DataType::Text | DataType::Link => compare_text(&a.raw_string(), &b.raw_string()),
    }
}

/// Compare coerced values, ranking failed coercions with the nulls.
fn rank_option<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(left), Some(right)) => left.cmp(&right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// Case-insensitive comparison with a case-sensitive tiebreak.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
