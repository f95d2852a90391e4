//! Request and response bodies that are not plain models

use serde::{Deserialize, Serialize};

use crate::models::{Board, BoardId, CategoryId, Entry, EntryId, EntryType, Money};

/// `POST /boards`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBoard {
    pub title: String,
    pub category_id: CategoryId,
}

/// `PUT /boards/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameBoard {
    pub title: String,
}

/// `PUT /boards/reorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardOrder {
    pub board_order: Vec<BoardId>,
}

impl BoardOrder {
    pub fn of(boards: &[Board]) -> Self {
        Self {
            board_order: boards.iter().map(|b| b.id).collect(),
        }
    }
}

/// `POST /entries`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEntry {
    pub board_id: BoardId,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub name: String,
    pub amount: Money,
    pub category_id: Option<CategoryId>,
}

/// `PUT /entries/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntry {
    pub name: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub board_id: BoardId,
}

impl UpdateEntry {
    /// Body describing `entry` as living on `board_id`
    pub fn from_entry(entry: &Entry, board_id: BoardId) -> Self {
        Self {
            name: entry.name.clone(),
            amount: entry.amount,
            entry_type: entry.entry_type,
            board_id,
        }
    }
}

/// One slot in an entry ordering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPosition {
    pub id: EntryId,
    pub position: usize,
}

/// `PUT /entries/reorder`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryOrder {
    pub entry_id: EntryId,
    pub source_board_id: BoardId,
    pub destination_board_id: BoardId,
    pub entries: Vec<EntryPosition>,
}

impl EntryOrder {
    /// Positions of the server-known entries in `destination`, in order
    ///
    /// Entries still waiting on their create call have no server ID and are
    /// left out.
    pub fn new(entry_id: EntryId, source_board_id: BoardId, destination: &Board) -> Self {
        Self {
            entry_id,
            source_board_id,
            destination_board_id: destination.id,
            entries: destination
                .entries
                .iter()
                .filter(|e| !e.id.is_temporary())
                .enumerate()
                .map(|(position, e)| EntryPosition { id: e.id, position })
                .collect(),
        }
    }
}

/// `GET /users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// "First Last" when both are present
    pub fn full_name(&self) -> Option<String> {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        }
    }
}
