//! Load and save of persisted grid layout.
//!
//! Three independent pieces of layout state live under deterministic keys
//! derived from the grid's storage key: `<key>-sort`, `<key>-order` and
//! `<key>-widths`, each JSON-encoded. Anything malformed or structurally
//! invalid against the current columns is discarded with a warning and
//! replaced by computed defaults; persistence failures are never surfaced
//! to the caller.

use std::collections::HashMap;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::column::Column;
use crate::grid::layout::is_permutation;
use crate::sort::SortSpec;
use crate::storage::LayoutStore;

const SORT_SUFFIX: &str = "-sort";
const ORDER_SUFFIX: &str = "-order";
const WIDTHS_SUFFIX: &str = "-widths";

/// Layout state recovered from the store, already validated.
#[derive(Debug, Default)]
pub(crate) struct LoadedLayout {
    pub sort: Option<SortSpec>,
    pub order: Option<Vec<String>>,
    pub widths: HashMap<String, u16>,
}

/// Load and validate all three layout pieces for the given columns.
pub(crate) fn load(
    store: &dyn LayoutStore,
    storage_key: &str,
    columns: &[Column],
) -> LoadedLayout {
    let mut loaded = LoadedLayout::default();

    if let Some(sort) = load_value::<SortSpec>(store, storage_key, SORT_SUFFIX) {
        if !sort.is_active() || columns.iter().any(|c| c.key == sort.key) {
            loaded.sort = Some(sort);
        } else {
            warn!(
                "discarding persisted sort for {storage_key:?}: column {:?} no longer exists",
                sort.key
            );
        }
    }

    if let Some(order) = load_value::<Vec<String>>(store, storage_key, ORDER_SUFFIX) {
        if is_permutation(&order, columns) {
            loaded.order = Some(order);
        } else {
            warn!("discarding persisted column order for {storage_key:?}: not a permutation of the current columns");
        }
    }

    if let Some(widths) = load_value::<HashMap<String, u16>>(store, storage_key, WIDTHS_SUFFIX) {
        loaded.widths = widths;
    }

    loaded
}

pub(crate) fn save_sort(store: &mut dyn LayoutStore, storage_key: &str, sort: &SortSpec) {
    save_value(store, storage_key, SORT_SUFFIX, sort);
}

pub(crate) fn save_order(store: &mut dyn LayoutStore, storage_key: &str, order: &[String]) {
    save_value(store, storage_key, ORDER_SUFFIX, &order);
}

pub(crate) fn save_widths(
    store: &mut dyn LayoutStore,
    storage_key: &str,
    widths: &HashMap<String, u16>,
) {
    save_value(store, storage_key, WIDTHS_SUFFIX, widths);
}

/// Delete all three layout keys.
pub(crate) fn clear(store: &mut dyn LayoutStore, storage_key: &str) {
    for suffix in [SORT_SUFFIX, ORDER_SUFFIX, WIDTHS_SUFFIX] {
        if let Err(err) = store.remove(&format!("{storage_key}{suffix}")) {
            warn!("failed to clear persisted layout {storage_key}{suffix}: {err}");
        }
    }
}

fn load_value<T: DeserializeOwned>(
    store: &dyn LayoutStore,
    storage_key: &str,
    suffix: &str,
) -> Option<T> {
    let key = format!("{storage_key}{suffix}");
    let raw = match store.get(&key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!("failed to read persisted layout {key}: {err}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("discarding malformed persisted layout {key}: {err}");
            None
        }
    }
}

fn save_value<T: Serialize>(store: &mut dyn LayoutStore, storage_key: &str, suffix: &str, value: &T) {
    let key = format!("{storage_key}{suffix}");
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!("failed to encode layout {key}: {err}");
            return;
        }
    };
    if let Err(err) = store.set(&key, &json) {
        warn!("failed to write persisted layout {key}: {err}");
    }
}
