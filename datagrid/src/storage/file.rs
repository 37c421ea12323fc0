//! JSON-file layout store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{LayoutStore, StorageError};

/// On-disk representation: one JSON object of key → value.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedEntries {
    entries: HashMap<String, String>,
}

/// A layout store backed by a single JSON file.
///
/// The whole map is rewritten on every mutation; layout payloads are a few
/// hundred bytes, so this stays cheap.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open a store at the given path. A missing file reads as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str::<PersistedEntries>(&data)?.entries
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Open a store in the user's config directory for the given app name.
    pub fn in_config_dir(app_name: &str) -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("", "", app_name)
            .ok_or(StorageError::NoConfigDir)?;
        Self::open(dirs.config_dir().join("layout.json"))
    }

    /// The file this store writes to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let state = PersistedEntries {
            entries: self.entries.clone(),
        };
        let data = serde_json::to_string_pretty(&state)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl LayoutStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        self.flush()
    }
}
