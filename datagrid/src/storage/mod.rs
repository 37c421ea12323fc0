//! Durable key-value storage for grid layout state.
//!
//! The grid persists its layout (sort spec, column order, column widths)
//! through the [`LayoutStore`] trait. Two backends ship with the crate:
//! [`MemoryStore`] for tests and ephemeral sessions, and [`FileStore`] for a
//! JSON file on disk. Hosts with their own settings system implement the
//! trait over it.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::{MemoryStore, SharedMemoryStore};

use thiserror::Error;

/// Storage error type.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("config directory unavailable")]
    NoConfigDir,
}

/// Backend trait for layout storage.
///
/// Implementations store opaque strings under string keys, synchronously.
/// The grid treats every failure as "no persisted state": errors are logged
/// and swallowed, never surfaced to the user.
pub trait LayoutStore {
    /// Get the value for a key.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Set the value for a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
