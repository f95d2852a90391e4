//! Entry model
//!
//! An entry is a single credit or debit line on a board. Its position inside
//! the board's entry list is its display order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{BoardId, EntryId};
use super::money::Money;

/// Direction of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryType {
    /// Money coming in
    #[serde(rename = "+")]
    Credit,
    /// Money going out
    #[serde(rename = "-")]
    Debit,
}

impl EntryType {
    /// The one-character tag used on the wire
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Credit => "+",
            Self::Debit => "-",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for EntryType {
    type Err = EntryValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "+" | "credit" | "income" | "in" => Ok(Self::Credit),
            "-" | "debit" | "expense" | "out" => Ok(Self::Debit),
            other => Err(EntryValidationError::UnknownType(other.to_string())),
        }
    }
}

/// A credit or debit line on a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Server-assigned, or temporary while a create is in flight
    pub id: EntryId,

    #[serde(rename = "type")]
    pub entry_type: EntryType,

    pub name: String,

    /// Always non-negative; the sign lives in `entry_type`
    pub amount: Money,

    /// Owning board. The server may omit it inside nested board payloads;
    /// the store fills it in from the containing board.
    #[serde(default)]
    pub board_id: Option<BoardId>,
}

impl Entry {
    /// Create a new entry with a temporary ID
    pub fn draft(
        board_id: BoardId,
        entry_type: EntryType,
        name: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: EntryId::temporary(),
            entry_type,
            name: name.into(),
            amount,
            board_id: Some(board_id),
        }
    }

    /// Amount with its sign applied (credits positive, debits negative)
    pub fn signed_amount(&self) -> Money {
        match self.entry_type {
            EntryType::Credit => self.amount,
            EntryType::Debit => Money::zero() - self.amount,
        }
    }

    /// Whether the server has confirmed this entry yet
    pub fn is_confirmed(&self) -> bool {
        !self.id.is_temporary()
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_fields(&self.name, self.amount)
    }
}

/// Shared checks for entry name and amount
pub fn validate_fields(name: &str, amount: Money) -> Result<(), EntryValidationError> {
    if name.trim().is_empty() {
        return Err(EntryValidationError::EmptyName);
    }

    if name.len() > 100 {
        return Err(EntryValidationError::NameTooLong(name.len()));
    }

    if amount.is_negative() {
        return Err(EntryValidationError::NegativeAmount);
    }

    Ok(())
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.entry_type, self.name, self.amount)
    }
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount,
    UnknownType(String),
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Entry name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Entry name too long ({} chars, max 100)", len),
            Self::NegativeAmount => {
                write!(f, "Entry amount cannot be negative; use the '-' type instead")
            }
            Self::UnknownType(t) => write!(f, "Unknown entry type '{}' (expected + or -)", t),
        }
    }
}

impl std::error::Error for EntryValidationError {}
