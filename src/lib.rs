//! Budget Boards - board-based budgeting against a remote budget service
//!
//! Entries (credits and debits) are organized into ordered boards tied to
//! categories. Changes are applied locally first, mirrored to a snapshot
//! cache, and then synchronized with the remote service; a full reload is the
//! final word on what the server holds.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: Boards, entries, categories, goals and insight payloads
//! - `storage`: Key-value persistence and the board snapshot cache
//! - `session`: The bearer credential passed to every remote call
//! - `api`: HTTP client for the remote service
//! - `sync`: The board synchronization store
//! - `journal`: Append-only record of settled mutations
//! - `services`: Categories, goals and insights
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `boards` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_boards::api::ApiClient;
//! use budget_boards::session::Session;
//! use budget_boards::storage::MemoryStore;
//! use budget_boards::sync::BoardStore;
//!
//! let client = ApiClient::new("http://localhost:8000", Duration::from_secs(30))?;
//! let mut store = BoardStore::open(&client, MemoryStore::new(), Session::with_token(token));
//! store.load()?;
//! let mutation = store.reorder_boards(2, 0)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod journal;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;
pub mod sync;

pub use error::{BoardsError, BoardsResult};
