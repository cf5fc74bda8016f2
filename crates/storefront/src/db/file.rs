//! File-backed storage backend.
//!
//! All slots live in one JSON object file. The file is read once when opened
//! and rewritten in full on every mutation, through a sibling temp file that
//! is renamed over the original.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Storage persisted to a JSON file on disk.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    slots: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be read, and
    /// `StorageError::Malformed` if it is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let slots = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), slots = slots.len(), "Opened file storage");

        Ok(Self {
            path,
            slots: RefCell::new(slots),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, slots: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let text = serde_json::to_string_pretty(slots)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Write `slots` to disk, then make them the in-memory state.
    ///
    /// Memory is left untouched when the write fails.
    fn commit(&self, slots: BTreeMap<String, String>) -> Result<(), StorageError> {
        self.flush(&slots)?;
        *self.slots.borrow_mut() = slots;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut next = self.slots.borrow().clone();
        next.insert(key.to_owned(), value.to_owned());
        self.commit(next)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut next = self.slots.borrow().clone();
        if next.remove(key).is_none() {
            return Ok(());
        }
        self.commit(next)
    }
}
