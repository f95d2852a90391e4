//! Remote service access
//!
//! `BoardRemote` is the slice of the HTTP API the board store depends on. The
//! store is generic over it so tests can drive every sync path without a
//! server; `ApiClient` is the real implementation and also carries the
//! category, goal and insight endpoints the services use.

pub mod client;
pub mod payloads;

pub use client::ApiClient;
pub use payloads::{
    BoardOrder, CreateBoard, CreateEntry, EntryOrder, EntryPosition, RenameBoard, UpdateEntry,
    UserProfile,
};

use crate::error::BoardsResult;
use crate::models::{Board, BoardId, Entry, EntryId};

/// Board and entry persistence on the server
///
/// Every call takes the bearer token explicitly; callers obtain it from a
/// [`Session`](crate::session::Session) before touching local state.
pub trait BoardRemote {
    /// `GET /boards`, boards with nested entries in display order
    fn fetch_boards(&self, token: &str) -> BoardsResult<Vec<Board>>;

    fn create_board(&self, token: &str, body: &CreateBoard) -> BoardsResult<Board>;

    fn rename_board(&self, token: &str, id: BoardId, body: &RenameBoard) -> BoardsResult<()>;

    fn delete_board(&self, token: &str, id: BoardId) -> BoardsResult<()>;

    fn reorder_boards(&self, token: &str, body: &BoardOrder) -> BoardsResult<()>;

    fn create_entry(&self, token: &str, body: &CreateEntry) -> BoardsResult<Entry>;

    fn update_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<Entry>;

    /// `PUT /entries/{id}` for a move; the response body is not read
    fn assign_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<()>;

    fn delete_entry(&self, token: &str, id: EntryId) -> BoardsResult<()>;

    fn reorder_entries(&self, token: &str, body: &EntryOrder) -> BoardsResult<()>;
}

impl<T: BoardRemote + ?Sized> BoardRemote for &T {
    fn fetch_boards(&self, token: &str) -> BoardsResult<Vec<Board>> {
        (**self).fetch_boards(token)
    }

    fn create_board(&self, token: &str, body: &CreateBoard) -> BoardsResult<Board> {
        (**self).create_board(token, body)
    }

    fn rename_board(&self, token: &str, id: BoardId, body: &RenameBoard) -> BoardsResult<()> {
        (**self).rename_board(token, id, body)
    }

    fn delete_board(&self, token: &str, id: BoardId) -> BoardsResult<()> {
        (**self).delete_board(token, id)
    }

    fn reorder_boards(&self, token: &str, body: &BoardOrder) -> BoardsResult<()> {
        (**self).reorder_boards(token, body)
    }

    fn create_entry(&self, token: &str, body: &CreateEntry) -> BoardsResult<Entry> {
        (**self).create_entry(token, body)
    }

    fn update_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<Entry> {
        (**self).update_entry(token, id, body)
    }

    fn assign_entry(&self, token: &str, id: EntryId, body: &UpdateEntry) -> BoardsResult<()> {
        (**self).assign_entry(token, id, body)
    }

    fn delete_entry(&self, token: &str, id: EntryId) -> BoardsResult<()> {
        (**self).delete_entry(token, id)
    }

    fn reorder_entries(&self, token: &str, body: &EntryOrder) -> BoardsResult<()> {
        (**self).reorder_entries(token, body)
    }
}
