//! Custom error types for Budget Boards
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Budget Boards operations
#[derive(Error, Debug)]
pub enum BoardsError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// No bearer credential in the session
    #[error("Not authenticated: run 'boards login' first")]
    NotAuthenticated,

    /// The request never produced a response (connection, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Server { status: u16, body: String },

    /// The server answered but the body could not be decoded
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BoardsError {
    /// Create a "not found" error for boards
    pub fn board_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Board",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from talking to the remote service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Server { .. } | Self::MalformedResponse(_)
        )
    }

    /// Whether local state can no longer be trusted and a full reload is due
    pub fn requires_reload(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BoardsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BoardsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for BoardsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Result type alias for Budget Boards operations
pub type BoardsResult<T> = Result<T, BoardsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardsError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BoardsError::board_not_found("Groceries");
        assert_eq!(err.to_string(), "Board not found: Groceries");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_server_error_display() {
        let err = BoardsError::Server {
            status: 422,
            body: "category_id missing".into(),
        };
        assert_eq!(err.to_string(), "Server returned 422: category_id missing");
        assert!(err.is_remote());
        assert!(!err.requires_reload());
    }

    #[test]
    fn test_malformed_requires_reload() {
        let err = BoardsError::MalformedResponse("expected value".into());
        assert!(err.requires_reload());
        assert!(err.is_remote());
        assert!(!BoardsError::NotAuthenticated.is_remote());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardsError = io_err.into();
        assert!(matches!(err, BoardsError::Io(_)));
    }
}
