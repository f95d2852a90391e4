//! Key-value persistence
//!
//! The store and the session only need "get/set a string by key". Keeping that
//! behind a trait lets the CLI persist to disk while tests use memory.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BoardsError;

use super::file_io::{read_optional, remove_if_exists, write_atomic};

/// Minimal string key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BoardsError>;
    fn remove(&self, key: &str) -> Result<(), BoardsError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, BoardsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BoardsError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), BoardsError> {
        (**self).remove(key)
    }
}

/// One file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BoardsError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(BoardsError::Storage(format!("Invalid cache key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardsError> {
        read_optional(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BoardsError> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> Result<(), BoardsError> {
        remove_if_exists(self.path_for(key)?)
    }
}

/// In-process store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BoardsError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BoardsError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BoardsError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BoardsError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BoardsError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BoardsError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}
