//! Storage layer for Budget Boards
//!
//! Local persistence is deliberately small: a key-value capability with file
//! and in-memory implementations, atomic file writes, and the board snapshot
//! cache built on top of them.

pub mod file_io;
pub mod kv;
pub mod snapshot;

pub use file_io::{read_optional, write_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use snapshot::{BoardCache, SNAPSHOT_KEY};
