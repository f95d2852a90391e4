//! Board model
//!
//! A board groups entries under a title and (usually) a category. Boards are
//! shown side by side in the order of the collection they live in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::Entry;
use super::ids::{BoardId, CategoryId, EntryId};
use super::money::Money;

/// A titled, ordered list of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,

    pub title: String,

    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Display name of the category, filled by the server or annotated locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,

    /// Entries in display order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Board {
    /// Create an empty board
    pub fn new(id: BoardId, title: impl Into<String>, category_id: Option<CategoryId>) -> Self {
        Self {
            id,
            title: title.into(),
            category_id,
            category_name: None,
            entries: Vec::new(),
        }
    }

    /// Stamp this board's ID onto every entry it holds
    pub fn claim_entries(&mut self) {
        for entry in &mut self.entries {
            entry.board_id = Some(self.id);
        }
    }

    /// Position of an entry in this board
    pub fn position_of(&self, entry_id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == entry_id)
    }

    /// Sum of all credits
    pub fn total_credits(&self) -> Money {
        self.entries
            .iter()
            .filter(|e| e.entry_type == super::EntryType::Credit)
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of all debits
    pub fn total_debits(&self) -> Money {
        self.entries
            .iter()
            .filter(|e| e.entry_type == super::EntryType::Debit)
            .map(|e| e.amount)
            .sum()
    }

    /// Credits minus debits
    pub fn balance(&self) -> Money {
        self.entries.iter().map(Entry::signed_amount).sum()
    }

    /// Validate the board
    pub fn validate(&self) -> Result<(), BoardValidationError> {
        validate_title(&self.title)
    }
}

/// Check a board title before it is sent anywhere
pub fn validate_title(title: &str) -> Result<(), BoardValidationError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(BoardValidationError::EmptyTitle);
    }

    if title.len() > 50 {
        return Err(BoardValidationError::TitleTooLong(title.len()));
    }

    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Validation errors for boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    MissingCategory,
}

impl fmt::Display for BoardValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Board title cannot be empty"),
            Self::TitleTooLong(len) => write!(f, "Board title too long ({} chars, max 50)", len),
            Self::MissingCategory => write!(f, "A board needs a category"),
        }
    }
}

impl std::error::Error for BoardValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryType;

    fn entry(id: i64, entry_type: EntryType, cents: i64) -> Entry {
        Entry {
            id: EntryId::server(id),
            entry_type,
            name: format!("entry {}", id),
            amount: Money::from_cents(cents),
            board_id: None,
        }
    }

    #[test]
    fn test_deserialize_nested_board() {
        let json = r#"{
            "id": 1,
            "title": "A",
            "category_id": 3,
            "entries": [{"id": 10, "type": "-", "name": "Coffee", "amount": 5}]
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();

        assert_eq!(board.id, BoardId::server(1));
        assert_eq!(board.category_id, Some(CategoryId::server(3)));
        assert_eq!(board.entries.len(), 1);
        assert!(board.category_name.is_none());
    }

    #[test]
    fn test_missing_entries_defaults_empty() {
        let board: Board = serde_json::from_str(r#"{"id": 2, "title": "B"}"#).unwrap();
        assert!(board.entries.is_empty());
        assert!(board.category_id.is_none());
    }

    #[test]
    fn test_claim_entries() {
        let mut board = Board::new(BoardId::server(5), "Food", None);
        board.entries.push(entry(1, EntryType::Debit, 100));
        board.entries.push(entry(2, EntryType::Debit, 200));

        board.claim_entries();
        assert!(board
            .entries
            .iter()
            .all(|e| e.board_id == Some(BoardId::server(5))));
    }

    #[test]
    fn test_totals() {
        let mut board = Board::new(BoardId::server(1), "Month", None);
        board.entries.push(entry(1, EntryType::Credit, 10_000));
        board.entries.push(entry(2, EntryType::Debit, 2_500));
        board.entries.push(entry(3, EntryType::Debit, 500));

        assert_eq!(board.total_credits().cents(), 10_000);
        assert_eq!(board.total_debits().cents(), 3_000);
        assert_eq!(board.balance().cents(), 7_000);
        assert_eq!(board.position_of(EntryId::server(3)), Some(2));
        assert_eq!(board.position_of(EntryId::server(9)), None);
    }

    #[test]
    fn test_title_validation() {
        assert!(validate_title("Groceries").is_ok());
        assert_eq!(validate_title("  "), Err(BoardValidationError::EmptyTitle));
        assert!(matches!(
            validate_title(&"x".repeat(51)),
            Err(BoardValidationError::TitleTooLong(51))
        ));
    }
}
