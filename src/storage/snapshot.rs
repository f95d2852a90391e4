//! Board snapshot cache
//!
//! A serialized copy of the whole board collection kept under one fixed key.
//! It exists only so the next start can render before the remote load
//! finishes; the server stays the source of truth.

use tracing::{debug, warn};

use crate::error::{BoardsError, BoardsResult};
use crate::models::Board;

use super::kv::KeyValueStore;

/// Key the snapshot lives under
pub const SNAPSHOT_KEY: &str = "budgetBoards";

/// Reads and writes the board snapshot through a key-value store
#[derive(Debug)]
pub struct BoardCache<K> {
    store: K,
}

impl<K: KeyValueStore> BoardCache<K> {
    pub fn new(store: K) -> Self {
        Self { store }
    }

    /// The underlying key-value store
    pub fn store(&self) -> &K {
        &self.store
    }

    /// Read the snapshot, distinguishing "absent" from "unreadable"
    pub fn try_load(&self) -> BoardsResult<Option<Vec<Board>>> {
        let Some(raw) = self.store.get(SNAPSHOT_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| BoardsError::Storage(format!("Corrupt board snapshot: {}", e)))
    }

    /// Read the snapshot for a cold start; anything unusable yields no boards
    pub fn load(&self) -> Vec<Board> {
        match self.try_load() {
            Ok(Some(boards)) => {
                debug!(count = boards.len(), "loaded boards from snapshot");
                boards
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("ignoring board snapshot: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the snapshot
    pub fn save(&self, boards: &[Board]) -> BoardsResult<()> {
        let json = serde_json::to_string(boards)?;
        self.store.set(SNAPSHOT_KEY, &json)?;
        debug!(count = boards.len(), "saved board snapshot");
        Ok(())
    }

    pub fn clear(&self) -> BoardsResult<()> {
        self.store.remove(SNAPSHOT_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BoardId, CategoryId};
    use crate::storage::MemoryStore;

    #[test]
    fn test_empty_cache_loads_nothing() {
        let cache = BoardCache::new(MemoryStore::new());
        assert!(cache.load().is_empty());
        assert!(cache.try_load().unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let cache = BoardCache::new(MemoryStore::new());
        let boards = vec![
            Board::new(BoardId::server(2), "B", None),
            Board::new(BoardId::server(1), "A", Some(CategoryId::server(3))),
        ];

        cache.save(&boards).unwrap();
        let loaded = cache.load();

        assert_eq!(loaded, boards);
        assert!(cache.store().get(SNAPSHOT_KEY).unwrap().is_some());
    }

    #[test]
    fn test_corrupt_snapshot_is_ignored() {
        let store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "{not json").unwrap();
        let cache = BoardCache::new(store);

        assert!(cache.try_load().is_err());
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = BoardCache::new(MemoryStore::new());
        cache.save(&[Board::new(BoardId::server(1), "A", None)]).unwrap();
        cache.clear().unwrap();
        assert!(cache.load().is_empty());
    }
}
