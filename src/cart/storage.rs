//! Cart storage
//!
//! Durable session storage for the cart snapshot. The store writes the full
//! item sequence after every mutation and reads it back once at session
//! start. Reads fail soft: a missing or malformed snapshot rehydrates as an
//! empty cart and is never surfaced to the user.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mockall::automock;
use thiserror::Error;

use crate::items::LineItem;

/// Fixed key the cart snapshot is stored under.
pub const CART_KEY: &str = "carrito";

/// Errors related to reading or writing the cart snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The snapshot could not be read or written.
    #[error("snapshot io error")]
    Io(#[from] io::Error),

    /// The snapshot exists but does not hold a valid line-item array.
    #[error("snapshot is not a valid line-item array")]
    Malformed(#[from] serde_json::Error),
}

/// Durable storage for the cart's line-item sequence.
#[automock]
pub trait CartStorage {
    /// Reads the stored snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot has been written yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when a snapshot exists but cannot be read
    /// or parsed. Callers are expected to fall back to an empty cart.
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError>;

    /// Writes the full item sequence, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the snapshot cannot be written.
    /// Callers keep the in-memory mutation regardless.
    fn save(&mut self, items: &[LineItem]) -> Result<(), StorageError>;
}

/// In-memory storage, the default for a session without durable state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    snapshot: Option<Vec<LineItem>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an in-memory storage pre-seeded with a snapshot.
    #[must_use]
    pub fn with_snapshot(items: Vec<LineItem>) -> Self {
        Self {
            snapshot: Some(items),
        }
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, items: &[LineItem]) -> Result<(), StorageError> {
        self.snapshot = Some(items.to_vec());

        Ok(())
    }
}

/// File-backed storage holding the snapshot as a JSON array under the
/// fixed [`CART_KEY`].
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage whose snapshot lives in the given directory as
    /// `carrito.json`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{CART_KEY}.json")),
        }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StorageError::Io(err)),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&mut self, items: &[LineItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;

        fs::write(&self.path, raw)?;

        Ok(())
    }
}
