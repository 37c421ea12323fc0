//! Column order and width state.

use std::collections::HashMap;

use crate::column::Column;

/// Narrowest a column can be resized to, in pixels.
pub const MIN_COLUMN_WIDTH: u16 = 10;

/// Mutable layout state: column order and per-column pixel widths.
///
/// The order is always a permutation of the current column key set; it is
/// rebuilt whenever the incoming column set changes shape. Widths are a
/// partial map seeded from column defaults, with resize overrides winning
/// per key.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    order: Vec<String>,
    widths: HashMap<String, u16>,
}

impl ColumnLayout {
    /// Build the default layout for a column set: declaration order, with
    /// widths seeded from each column's declared default.
    pub fn from_columns(columns: &[Column]) -> Self {
        Self {
            order: columns.iter().map(|c| c.key.clone()).collect(),
            widths: columns
                .iter()
                .filter_map(|c| c.width.map(|w| (c.key.clone(), w)))
                .collect(),
        }
    }

    /// Column keys in display order.
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Replace the order wholesale. The caller has validated it.
    pub(crate) fn set_order(&mut self, order: Vec<String>) {
        self.order = order;
    }

    /// Effective width of a column, if one is set.
    pub fn width_of(&self, key: &str) -> Option<u16> {
        self.widths.get(key).copied()
    }

    /// The full width map.
    pub fn widths(&self) -> &HashMap<String, u16> {
        &self.widths
    }

    /// Merge persisted width overrides over the current defaults.
    /// Entries for columns that no longer exist are ignored.
    pub(crate) fn apply_width_overrides(&mut self, overrides: &HashMap<String, u16>) {
        for (key, width) in overrides {
            if self.order.contains(key) {
                self.widths.insert(key.clone(), *width);
            }
        }
    }

    /// Reconcile with a freshly supplied column set.
    ///
    /// When the key set is unchanged the order survives; when it changes
    /// shape the order is rebuilt from declaration order. Width entries for
    /// vanished columns are dropped, and new columns pick up their declared
    /// defaults without clobbering existing overrides.
    pub fn reconcile(&mut self, columns: &[Column]) {
        if !is_permutation(&self.order, columns) {
            self.order = columns.iter().map(|c| c.key.clone()).collect();
        }
        self.widths.retain(|key, _| columns.iter().any(|c| &c.key == key));
        for column in columns {
            if let Some(width) = column.width {
                self.widths.entry(column.key.clone()).or_insert(width);
            }
        }
    }

    /// Move a column: remove it from its position and reinsert it at the
    /// target column's position (splice, not swap).
    ///
    /// Unknown keys and self-drops are no-ops.
    pub fn move_column(&mut self, from: &str, to: &str) {
        if from == to {
            return;
        }
        let (Some(from_pos), Some(to_pos)) = (
            self.order.iter().position(|key| key == from),
            self.order.iter().position(|key| key == to),
        ) else {
            return;
        };
        let key = self.order.remove(from_pos);
        self.order.insert(to_pos, key);
    }

    /// Set a column's width, clamped to the minimum. Unknown keys are ignored.
    pub fn set_width(&mut self, key: &str, width: u16) {
        if self.order.iter().any(|k| k == key) {
            self.widths
                .insert(key.to_string(), width.max(MIN_COLUMN_WIDTH));
        }
    }
}

/// Check that `order` is exactly a permutation of the column key set.
///
/// Equal length plus every (unique) column key present rules out duplicate
/// entries by pigeonhole.
pub fn is_permutation(order: &[String], columns: &[Column]) -> bool {
    order.len() == columns.len() && columns.iter().all(|c| order.contains(&c.key))
}
