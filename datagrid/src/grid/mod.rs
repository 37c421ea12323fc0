//! The grid state manager.
//!
//! [`Grid`] owns the tabular state of one data grid: search term, sort spec,
//! column layout, selection and the callbacks wired to it. Rows and columns
//! are caller-owned inputs supplied fresh on every render pass; the grid
//! derives one shared view from them (filter, then sort). Selection ranges,
//! cursor movement and CSV export all operate over that derived view.

mod events;
mod layout;
mod persist;

pub use layout::{ColumnLayout, MIN_COLUMN_WIDTH};

use std::sync::Arc;

use indexmap::IndexSet;

use crate::column::Column;
use crate::export::{self, ExportError};
use crate::filter::row_matches;
use crate::format::BoolTokens;
use crate::row::Row;
use crate::selection::{Selection, SelectionMode};
use crate::sort::{SortDirection, SortSpec, compare_cells};
use crate::storage::LayoutStore;
use crate::value::CellValue;

use events::DragState;

/// Callback receiving the full ordered set of selected row ids.
pub type SelectionHandler = Arc<dyn Fn(&[String]) + Send + Sync>;

/// Callback receiving the id of an activated row.
pub type ActivateHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback receiving (row id, column key, cell value) for an activated link.
pub type LinkHandler = Arc<dyn Fn(&str, &str, &CellValue) + Send + Sync>;

struct Storage {
    store: Box<dyn LayoutStore>,
    key: String,
}

/// State manager for one data grid instance.
pub struct Grid {
    columns: Vec<Column>,
    rows: Vec<Row>,
    search: String,
    sort: SortSpec,
    layout: ColumnLayout,
    /// Internal selection store; authoritative only when uncontrolled.
    selection: Selection,
    selection_mode: SelectionMode,
    /// Externally supplied selection. When present it is the source of
    /// truth and interactions only emit notifications.
    controlled: Option<IndexSet<String>>,
    /// Focused row, as a position in the current view.
    cursor: Option<usize>,
    tokens: BoolTokens,
    storage: Option<Storage>,
    on_selection_change: Option<SelectionHandler>,
    on_activate: Option<ActivateHandler>,
    on_link_activate: Option<LinkHandler>,
    /// Gesture state for the current header drag or resize, if any.
    drag: DragState,
}

impl Grid {
    /// Create a grid for the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        let layout = ColumnLayout::from_columns(&columns);
        Self {
            columns,
            rows: Vec::new(),
            search: String::new(),
            sort: SortSpec::unsorted(),
            layout,
            selection: Selection::new(),
            selection_mode: SelectionMode::default(),
            controlled: None,
            cursor: None,
            tokens: BoolTokens::default(),
            storage: None,
            on_selection_change: None,
            on_activate: None,
            on_link_activate: None,
            drag: DragState::default(),
        }
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the default sort applied when no persisted sort overrides it.
    pub fn with_default_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Set the boolean display tokens.
    pub fn with_bool_tokens(mut self, tokens: BoolTokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Attach a durable store under the given storage key.
    ///
    /// Persisted sort, column order and widths are loaded and validated
    /// against the current columns immediately; anything invalid is
    /// discarded in favor of the defaults already in place. Without a store
    /// the grid keeps layout state in memory only.
    pub fn with_storage(
        mut self,
        store: Box<dyn LayoutStore>,
        storage_key: impl Into<String>,
    ) -> Self {
        let key = storage_key.into();
        let loaded = persist::load(store.as_ref(), &key, &self.columns);
        if let Some(sort) = loaded.sort {
            self.sort = sort;
        }
        if let Some(order) = loaded.order {
            self.layout.set_order(order);
        }
        self.layout.apply_width_overrides(&loaded.widths);
        self.storage = Some(Storage { store, key });
        self
    }

    /// Register the selection-changed callback.
    pub fn on_selection_change(mut self, handler: impl Fn(&[String]) + Send + Sync + 'static) -> Self {
        self.on_selection_change = Some(Arc::new(handler));
        self
    }

    /// Register the row-activated callback.
    pub fn on_activate(mut self, handler: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(handler));
        self
    }

    /// Register the link-activated callback.
    pub fn on_link_activate(
        mut self,
        handler: impl Fn(&str, &str, &CellValue) + Send + Sync + 'static,
    ) -> Self {
        self.on_link_activate = Some(Arc::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Render-pass inputs
    // -------------------------------------------------------------------------

    /// Supply a fresh column set.
    ///
    /// The column order is reconciled: it survives when the key set is
    /// unchanged and is rebuilt when the set changes shape. A sort on a
    /// vanished column is dropped.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        self.layout.reconcile(&self.columns);
        if self.sort.is_active() && !self.columns.iter().any(|c| c.key == self.sort.key) {
            self.sort = SortSpec::unsorted();
        }
    }

    /// Supply a fresh row set. Selection is id-based and survives this.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.clamp_cursor();
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The current column definitions, in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The raw row set, unfiltered and unsorted.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The active search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The active sort spec.
    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// The sort direction shown on a column's header indicator.
    pub fn sort_direction_of(&self, key: &str) -> SortDirection {
        if self.sort.is_active() && self.sort.key == key {
            self.sort.direction
        } else {
            SortDirection::Unsorted
        }
    }

    /// The column order and width state.
    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The boolean display tokens.
    pub fn bool_tokens(&self) -> &BoolTokens {
        &self.tokens
    }

    /// The effective selected ids, in selection order.
    pub fn selected_ids(&self) -> Vec<String> {
        match &self.controlled {
            Some(ids) => ids.iter().cloned().collect(),
            None => self.selection.ids(),
        }
    }

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        match &self.controlled {
            Some(ids) => ids.contains(id),
            None => self.selection.is_selected(id),
        }
    }

    /// The focused row position in the current view.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The row under the cursor.
    pub fn cursor_row(&self) -> Option<&Row> {
        let indices = self.view_indices();
        self.cursor
            .and_then(|pos| indices.get(pos))
            .map(|&index| &self.rows[index])
    }

    // -------------------------------------------------------------------------
    // Derived view
    // -------------------------------------------------------------------------

    /// The filtered-then-sorted view of the rows.
    pub fn view(&self) -> Vec<&Row> {
        self.view_indices()
            .into_iter()
            .map(|index| &self.rows[index])
            .collect()
    }

    /// The ids of the current view, in view order.
    pub fn view_ids(&self) -> Vec<String> {
        self.view_indices()
            .into_iter()
            .map(|index| self.rows[index].id().to_string())
            .collect()
    }

    /// Number of rows in the current view.
    pub fn view_len(&self) -> usize {
        self.view_indices().len()
    }

    /// The columns in display order.
    pub fn ordered_columns(&self) -> Vec<&Column> {
        self.layout
            .order()
            .iter()
            .filter_map(|key| self.columns.iter().find(|c| &c.key == key))
            .collect()
    }

    fn view_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row_matches(row, &self.columns, &self.search, &self.tokens))
            .map(|(index, _)| index)
            .collect();

        if self.sort.is_active()
            && let Some(column) = self.columns.iter().find(|c| c.key == self.sort.key)
        {
            let descending = self.sort.direction == SortDirection::Descending;
            // std's sort_by is documented stable, so equal keys keep the
            // filtered set's relative order.
            indices.sort_by(|&a, &b| {
                let ordering = compare_cells(
                    column.data_type,
                    self.rows[a].get(&column.key),
                    self.rows[b].get(&column.key),
                );
                if descending { ordering.reverse() } else { ordering }
            });
        }
        indices
    }

    // -------------------------------------------------------------------------
    // Controlled selection
    // -------------------------------------------------------------------------

    /// Hand selection ownership to the caller, or take it back with `None`.
    ///
    /// While a value is supplied, interactions emit change notifications but
    /// never mutate internal membership; the caller feeds the new value back
    /// in through this method.
    pub fn set_controlled_selection(&mut self, selection: Option<Vec<String>>) {
        self.controlled = selection.map(|ids| ids.into_iter().collect());
    }

    /// Apply a selection mutation through the single notification path.
    ///
    /// The mutation runs against whichever store is authoritative; the
    /// resulting full id set is emitted either way, and only the anchor is
    /// retained internally when the caller owns the selection.
    fn mutate_selection(&mut self, mutate: impl FnOnce(&mut Selection)) {
        let mut working = match &self.controlled {
            Some(ids) => {
                Selection::from_parts(ids.clone(), self.selection.anchor().map(str::to_string))
            }
            None => self.selection.clone(),
        };
        mutate(&mut working);
        let ids = working.ids();
        if self.controlled.is_some() {
            let anchor = working.anchor().map(str::to_string);
            self.selection.set_anchor(anchor);
        } else {
            self.selection = working;
        }
        if let Some(handler) = &self.on_selection_change {
            handler(&ids);
        }
    }

    // -------------------------------------------------------------------------
    // Layout persistence
    // -------------------------------------------------------------------------

    /// Clear persisted layout and restore defaults from the current columns.
    pub fn reset_layout(&mut self) {
        if let Some(storage) = &mut self.storage {
            persist::clear(storage.store.as_mut(), &storage.key);
        }
        self.layout = ColumnLayout::from_columns(&self.columns);
        self.sort = SortSpec::unsorted();
    }

    fn persist_sort(&mut self) {
        if let Some(storage) = &mut self.storage {
            persist::save_sort(storage.store.as_mut(), &storage.key, &self.sort);
        }
    }

    fn persist_order(&mut self) {
        if let Some(storage) = &mut self.storage {
            persist::save_order(storage.store.as_mut(), &storage.key, self.layout.order());
        }
    }

    fn persist_widths(&mut self) {
        if let Some(storage) = &mut self.storage {
            persist::save_widths(storage.store.as_mut(), &storage.key, self.layout.widths());
        }
    }

    // -------------------------------------------------------------------------
    // Export
    // -------------------------------------------------------------------------

    /// Serialize the current view to CSV text, in display column order.
    pub fn export_csv(&self) -> Result<String, ExportError> {
        export::export_csv(&self.ordered_columns(), &self.view(), &self.tokens)
    }

    /// The suggested download file name for an export performed today.
    pub fn export_file_name(&self) -> String {
        export::export_file_name(chrono::Local::now().date_naive())
    }

    fn clamp_cursor(&mut self) {
        let len = self.view_len();
        self.cursor = match self.cursor {
            Some(_) if len == 0 => None,
            Some(position) => Some(position.min(len - 1)),
            None => None,
        };
    }
}
