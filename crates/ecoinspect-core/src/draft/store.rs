//! Local persistence of in-progress form drafts.
//!
//! One entry per inspection id, holding the full form snapshot and a
//! `last_saved` timestamp. Entries are removed on successful submit,
//! successful draft save, or explicit discard.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::FormDraft;

/// A locally persisted draft entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDraft {
    /// The full form snapshot.
    pub form: FormDraft,

    /// When the snapshot was last persisted.
    pub last_saved: DateTime<Utc>,
}

/// Errors from a draft store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// The inspection id cannot be used as a storage key.
    #[error("invalid draft key: {key}")]
    InvalidKey {
        /// The offending key.
        key: String,
    },

    /// Underlying I/O failure.
    #[error("draft store I/O failure: {0}")]
    Io(String),

    /// Entry serialization failure.
    #[error("draft serialization failure: {0}")]
    Serialization(String),

    /// Internal lock poisoned.
    #[error("draft store lock poisoned")]
    LockPoisoned,
}

/// Key/value contract for the local draft cache.
///
/// The storage technology behind it is not specified; this crate ships an
/// in-memory implementation and a JSON-file one.
pub trait DraftStore {
    /// Returns the stored entry for an inspection id, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the entry exists but cannot be read.
    fn get(&self, inspection_id: &str) -> Result<Option<StoredDraft>, StoreError>;

    /// Stores or replaces the entry for an inspection id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the entry cannot be written.
    fn put(&self, inspection_id: &str, draft: StoredDraft) -> Result<(), StoreError>;

    /// Removes the entry for an inspection id. Removing a missing entry is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the removal fails.
    fn remove(&self, inspection_id: &str) -> Result<(), StoreError>;
}

/// In-memory draft store.
#[derive(Debug, Default)]
pub struct MemoryDraftStore {
    entries: RwLock<HashMap<String, StoredDraft>>,
}

impl MemoryDraftStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn get(&self, inspection_id: &str) -> Result<Option<StoredDraft>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(inspection_id).cloned())
    }

    fn put(&self, inspection_id: &str, draft: StoredDraft) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(inspection_id.to_string(), draft);
        Ok(())
    }

    fn remove(&self, inspection_id: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(inspection_id);
        Ok(())
    }
}

/// JSON-file draft store: one `<id>.json` file per inspection under a
/// directory.
#[derive(Debug)]
pub struct FileDraftStore {
    dir: PathBuf,
}

impl FileDraftStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Io(e.to_string()))?;
        Ok(Self { dir })
    }

    fn entry_path(&self, inspection_id: &str) -> Result<PathBuf, StoreError> {
        // Inspection ids are opaque; refuse anything that would escape the
        // store directory.
        let safe = !inspection_id.is_empty()
            && inspection_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !safe {
            return Err(StoreError::InvalidKey {
                key: inspection_id.to_string(),
            });
        }
        Ok(self.dir.join(format!("{inspection_id}.json")))
    }
}

impl DraftStore for FileDraftStore {
    fn get(&self, inspection_id: &str) -> Result<Option<StoredDraft>, StoreError> {
        let path = self.entry_path(inspection_id)?;
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e.to_string())),
        };
        let draft = serde_json::from_str(&content)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Some(draft))
    }

    fn put(&self, inspection_id: &str, draft: StoredDraft) -> Result<(), StoreError> {
        let path = self.entry_path(inspection_id)?;
        let content = serde_json::to_string(&draft)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| StoreError::Io(e.to_string()))
    }

    fn remove(&self, inspection_id: &str) -> Result<(), StoreError> {
        let path = self.entry_path(inspection_id)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e.to_string())),
        }
    }
}
