//! Interaction handling for the grid.
//!
//! The host translates raw UI input (clicks, keystrokes, drag gestures)
//! into these calls. Each call completes synchronously: by the time it
//! returns, derived views reflect the new state and any change callbacks
//! have fired. Gesture state lives on the grid instance and only for the
//! duration of one gesture, so concurrently rendered grids cannot leak
//! drag state into each other.

use crate::column::DataType;
use crate::events::{EventResult, Modifiers};
use crate::grid::Grid;
use crate::grid::layout::MIN_COLUMN_WIDTH;
use crate::selection::SelectionMode;

/// Transient state for an in-flight header drag or resize gesture.
#[derive(Debug, Default)]
pub(super) struct DragState {
    /// Column key picked up by the current reorder drag.
    reorder_source: Option<String>,
    /// The current resize gesture.
    resize: Option<ResizeGesture>,
    /// Swallow the click the host synthesizes right after a resize ends.
    suppress_header_click: bool,
}

#[derive(Debug)]
struct ResizeGesture {
    key: String,
    origin_x: i32,
    start_width: u16,
}

impl DragState {
    fn take_suppress_click(&mut self) -> bool {
        std::mem::take(&mut self.suppress_header_click)
    }
}

impl Grid {
    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Set the search term. The view narrows immediately.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.clamp_cursor();
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Handle a click on a column header.
    ///
    /// Cycles the sort for that column (ascending → descending → unsorted)
    /// and persists the new spec. The click synthesized at the end of a
    /// resize gesture is suppressed here.
    pub fn header_click(&mut self, key: &str) -> EventResult {
        if self.drag.take_suppress_click() {
            return EventResult::Ignored;
        }
        if !self.columns.iter().any(|c| c.key == key) {
            return EventResult::Ignored;
        }
        self.sort = self.sort.toggled(key);
        self.persist_sort();
        EventResult::Consumed
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Handle a click on a data row.
    ///
    /// Single mode replaces the selection with the clicked row. Multi mode
    /// toggles it, or extends the range from the anchor when shift is held.
    /// The cursor follows the clicked row.
    pub fn row_click(&mut self, id: &str, modifiers: Modifiers) -> EventResult {
        if !self.rows.iter().any(|row| row.id() == id) {
            return EventResult::Ignored;
        }
        let view_ids = self.view_ids();
        if let Some(position) = view_ids.iter().position(|view_id| view_id == id) {
            self.cursor = Some(position);
        }
        match self.selection_mode {
            SelectionMode::Single => self.mutate_selection(|s| s.replace(id)),
            SelectionMode::Multi if modifiers.shift => {
                self.mutate_selection(move |s| s.range_extend(id, &view_ids));
            }
            SelectionMode::Multi => self.mutate_selection(|s| s.toggle(id)),
        }
        EventResult::Consumed
    }

    /// Explicitly set one row's selected state.
    ///
    /// In single mode, selecting replaces the whole selection and
    /// deselecting clears the row if it was the selected one.
    pub fn set_row_selected(&mut self, id: &str, selected: bool) {
        match self.selection_mode {
            SelectionMode::Single if selected => self.mutate_selection(|s| s.replace(id)),
            _ => self.mutate_selection(|s| s.set(id, selected)),
        }
    }

    /// Handle the select-all toggle.
    ///
    /// On sets the selection to exactly the ids of the current view (multi
    /// mode only); off clears to empty in either mode.
    pub fn set_select_all(&mut self, on: bool) {
        if on {
            if self.selection_mode == SelectionMode::Multi {
                let view_ids = self.view_ids();
                self.mutate_selection(move |s| {
                    s.clear();
                    s.select_all(&view_ids);
                });
            }
        } else {
            self.mutate_selection(|s| s.clear());
        }
    }

    /// Clear the selection (explicit caller action).
    pub fn clear_selection(&mut self) {
        self.mutate_selection(|s| s.clear());
    }

    /// Switch the selection mode at runtime.
    ///
    /// Switching multi → single truncates the selection to at most its
    /// first member and fires the change notification.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if mode == self.selection_mode {
            return;
        }
        self.selection_mode = mode;
        if mode == SelectionMode::Single {
            self.mutate_selection(|s| s.truncate_to_first());
        }
    }

    // -------------------------------------------------------------------------
    // Activation
    // -------------------------------------------------------------------------

    /// Activate a row (Enter or double-click semantics).
    pub fn activate_row(&mut self, id: &str) -> EventResult {
        if !self.rows.iter().any(|row| row.id() == id) {
            return EventResult::Ignored;
        }
        if let Some(handler) = &self.on_activate {
            handler(id);
        }
        EventResult::Consumed
    }

    /// Activate a link cell. The grid does not navigate; it notifies the
    /// registered sink with (row id, column key, cell value).
    pub fn link_click(&self, id: &str, column_key: &str) -> EventResult {
        let Some(row) = self.rows.iter().find(|row| row.id() == id) else {
            return EventResult::Ignored;
        };
        let is_link = self
            .columns
            .iter()
            .any(|c| c.key == column_key && c.data_type == DataType::Link);
        if !is_link {
            return EventResult::Ignored;
        }
        match &self.on_link_activate {
            Some(handler) => {
                handler(id, column_key, row.get(column_key));
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Cursor navigation
    // -------------------------------------------------------------------------

    /// Move the cursor up one view row.
    pub fn cursor_up(&mut self) -> EventResult {
        let len = self.view_len();
        if len == 0 {
            return EventResult::Ignored;
        }
        self.cursor = Some(match self.cursor {
            Some(position) => position.saturating_sub(1),
            None => 0,
        });
        EventResult::Consumed
    }

    /// Move the cursor down one view row.
    pub fn cursor_down(&mut self) -> EventResult {
        let len = self.view_len();
        if len == 0 {
            return EventResult::Ignored;
        }
        self.cursor = Some(match self.cursor {
            Some(position) => (position + 1).min(len - 1),
            None => 0,
        });
        EventResult::Consumed
    }

    /// Move the cursor to the first view row.
    pub fn cursor_first(&mut self) -> EventResult {
        if self.view_len() == 0 {
            return EventResult::Ignored;
        }
        self.cursor = Some(0);
        EventResult::Consumed
    }

    /// Move the cursor to the last view row.
    pub fn cursor_last(&mut self) -> EventResult {
        let len = self.view_len();
        if len == 0 {
            return EventResult::Ignored;
        }
        self.cursor = Some(len - 1);
        EventResult::Consumed
    }

    /// Toggle selection at the cursor (Space).
    pub fn toggle_at_cursor(&mut self) -> EventResult {
        let Some(id) = self.cursor_row().map(|row| row.id().to_string()) else {
            return EventResult::Ignored;
        };
        match self.selection_mode {
            SelectionMode::Single => self.mutate_selection(|s| s.replace(&id)),
            SelectionMode::Multi => self.mutate_selection(|s| s.toggle(&id)),
        }
        EventResult::Consumed
    }

    /// Activate the row at the cursor (Enter).
    pub fn activate_at_cursor(&mut self) -> EventResult {
        let Some(id) = self.cursor_row().map(|row| row.id().to_string()) else {
            return EventResult::Ignored;
        };
        self.activate_row(&id)
    }

    // -------------------------------------------------------------------------
    // Header reorder gesture
    // -------------------------------------------------------------------------

    /// Begin dragging a column header.
    pub fn begin_header_drag(&mut self, key: &str) {
        if self.columns.iter().any(|c| c.key == key) {
            self.drag.reorder_source = Some(key.to_string());
        }
    }

    /// Drop the dragged header onto a target column.
    ///
    /// The source is removed from its position and reinserted at the
    /// target's position. Ends the gesture either way.
    pub fn drop_on_header(&mut self, target: &str) -> EventResult {
        let Some(source) = self.drag.reorder_source.take() else {
            return EventResult::Ignored;
        };
        if source == target || !self.columns.iter().any(|c| c.key == target) {
            return EventResult::Ignored;
        }
        self.layout.move_column(&source, target);
        self.persist_order();
        EventResult::Consumed
    }

    /// Abort an in-flight header drag.
    pub fn cancel_header_drag(&mut self) {
        self.drag.reorder_source = None;
    }

    // -------------------------------------------------------------------------
    // Resize gesture
    // -------------------------------------------------------------------------

    /// Begin resizing a column from its handle.
    ///
    /// `origin_x` is the pointer position at mouse-down and `start_width`
    /// the column's rendered width at that moment.
    pub fn begin_resize(&mut self, key: &str, origin_x: i32, start_width: u16) {
        if self.columns.iter().any(|c| c.key == key) {
            self.drag.resize = Some(ResizeGesture {
                key: key.to_string(),
                origin_x,
                start_width,
            });
        }
    }

    /// Update the in-flight resize with the current pointer position.
    ///
    /// The dragged column's width becomes its start width plus the pointer
    /// delta, clamped to the minimum. Only the dragged column is affected.
    pub fn update_resize(&mut self, x: i32) {
        let Some((key, width)) = self.drag.resize.as_ref().map(|gesture| {
            let width = (i32::from(gesture.start_width) + (x - gesture.origin_x))
                .clamp(i32::from(MIN_COLUMN_WIDTH), i32::from(u16::MAX)) as u16;
            (gesture.key.clone(), width)
        }) else {
            return;
        };
        self.layout.set_width(&key, width);
    }

    /// Finish the resize gesture.
    ///
    /// Persists the widths and arms the click suppression so the click the
    /// host synthesizes after mouse-up does not also toggle sort.
    pub fn end_resize(&mut self) {
        if self.drag.resize.take().is_some() {
            self.persist_widths();
            self.drag.suppress_header_click = true;
        }
    }
}
