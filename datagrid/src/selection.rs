//! Selection state for the grid.
//!
//! Selection tracks row ids, not positions, so it stays stable while rows
//! are filtered, sorted, added or removed. The set is insertion-ordered:
//! callbacks receive ids in the order the user selected them.

use indexmap::IndexSet;

/// Row selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one row selected; re-selecting it keeps it selected.
    #[default]
    Single,
    /// Any number of rows; clicks toggle, shift-clicks extend ranges.
    Multi,
}

/// ID-based, insertion-ordered selection state.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: IndexSet<String>,
    /// Anchor for range selection (the last activated id).
    anchor: Option<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from an externally supplied id set, keeping the given anchor.
    pub fn from_parts(ids: IndexSet<String>, anchor: Option<String>) -> Self {
        Self {
            selected: ids,
            anchor,
        }
    }

    /// All selected ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Check if an id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The range-selection anchor, if any.
    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub(crate) fn set_anchor(&mut self, anchor: Option<String>) {
        self.anchor = anchor;
    }

    /// Clear the selection and the anchor.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.anchor = None;
    }

    /// Replace the selection with exactly one id (single-mode activation).
    ///
    /// Selecting the already-selected row again is a no-op that keeps it
    /// selected; there is no toggle-off in single mode.
    pub fn replace(&mut self, id: &str) {
        if !(self.selected.len() == 1 && self.selected.contains(id)) {
            self.selected.clear();
            self.selected.insert(id.to_string());
        }
        self.anchor = Some(id.to_string());
    }

    /// Toggle membership of one id (multi-mode plain activation).
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.shift_remove(id) {
            self.selected.insert(id.to_string());
        }
        self.anchor = Some(id.to_string());
    }

    /// Explicitly set membership of one id.
    pub fn set(&mut self, id: &str, selected: bool) {
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.shift_remove(id);
        }
        self.anchor = Some(id.to_string());
    }

    /// Extend the selection from the anchor to a target id (shift-click).
    ///
    /// Selects the union of the current selection with every id between
    /// anchor and target inclusive, by position in `view_ids` (the current
    /// filtered/sorted view). When the anchor or the target cannot be found
    /// in the view, falls back to toggling the target alone.
    pub fn range_extend(&mut self, target: &str, view_ids: &[String]) {
        let anchor_pos = self
            .anchor
            .as_ref()
            .and_then(|anchor| view_ids.iter().position(|id| id == anchor));
        let target_pos = view_ids.iter().position(|id| id == target);

        let (Some(anchor_pos), Some(target_pos)) = (anchor_pos, target_pos) else {
            self.toggle(target);
            return;
        };

        let (start, end) = if anchor_pos <= target_pos {
            (anchor_pos, target_pos)
        } else {
            (target_pos, anchor_pos)
        };
        for id in &view_ids[start..=end] {
            self.selected.insert(id.clone());
        }
        self.anchor = Some(target.to_string());
    }

    /// Select every id in the current view (select-all on).
    pub fn select_all(&mut self, view_ids: &[String]) {
        for id in view_ids {
            self.selected.insert(id.clone());
        }
    }

    /// Drop everything past the first selected id (multi → single switch).
    pub fn truncate_to_first(&mut self) {
        while self.selected.len() > 1 {
            self.selected.pop();
        }
    }
}
