//! Two-phase mutation tracking
//!
//! Each mutating store operation produces a [`Mutation`]. The local change is
//! applied first (`AppliedLocally`), the remote call then moves it to
//! `SyncPending`, and the outcome settles it as `SyncConfirmed` or
//! `SyncFailed`. A failed sync is never rolled back; the next successful load
//! reconciles it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::BoardsError;

/// The operation a mutation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    AddBoard,
    RenameBoard,
    DeleteBoard,
    ReorderBoards,
    MoveEntry,
    AddEntry,
    EditEntry,
    DeleteEntry,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AddBoard => "add board",
            Self::RenameBoard => "rename board",
            Self::DeleteBoard => "delete board",
            Self::ReorderBoards => "reorder boards",
            Self::MoveEntry => "move entry",
            Self::AddEntry => "add entry",
            Self::EditEntry => "edit entry",
            Self::DeleteEntry => "delete entry",
        };
        write!(f, "{}", label)
    }
}

/// Where a mutation is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    AppliedLocally,
    SyncPending,
    SyncConfirmed,
    SyncFailed,
}

impl SyncState {
    /// Whether `next` is a legal successor of this state
    pub fn can_advance_to(self, next: SyncState) -> bool {
        matches!(
            (self, next),
            (Self::AppliedLocally, Self::SyncPending)
                | (Self::SyncPending, Self::SyncConfirmed)
                | (Self::SyncPending, Self::SyncFailed)
        )
    }

    /// Confirmed and failed are terminal
    pub fn is_settled(self) -> bool {
        matches!(self, Self::SyncConfirmed | Self::SyncFailed)
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::AppliedLocally => "applied locally",
            Self::SyncPending => "sync pending",
            Self::SyncConfirmed => "synced",
            Self::SyncFailed => "sync failed",
        };
        write!(f, "{}", label)
    }
}

/// Record of one local change and its remote outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub kind: MutationKind,

    /// Display form of the affected board or entry ID
    pub entity: String,

    state: SyncState,

    /// Remote error text when the sync failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl Mutation {
    /// A change that has been applied to local state only
    pub fn applied(kind: MutationKind, entity: impl fmt::Display) -> Self {
        Self {
            kind,
            entity: entity.to_string(),
            state: SyncState::AppliedLocally,
            error: None,
        }
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == SyncState::SyncConfirmed
    }

    pub fn is_failed(&self) -> bool {
        self.state == SyncState::SyncFailed
    }

    /// Point the record at a different entity, e.g. once a temporary ID
    /// has been replaced by the server's
    pub fn retarget(&mut self, entity: impl fmt::Display) {
        self.entity = entity.to_string();
    }

    /// The remote call is about to be issued
    pub fn begin_sync(&mut self) -> bool {
        self.advance(SyncState::SyncPending)
    }

    /// The remote service accepted the change
    pub fn confirm(&mut self) -> bool {
        self.advance(SyncState::SyncConfirmed)
    }

    /// The remote service rejected the change or could not be reached
    pub fn fail(&mut self, err: &BoardsError) -> bool {
        let moved = self.advance(SyncState::SyncFailed);
        if moved {
            self.error = Some(err.to_string());
        }
        moved
    }

    fn advance(&mut self, next: SyncState) -> bool {
        if !self.state.can_advance_to(next) {
            warn!(
                kind = %self.kind,
                from = %self.state,
                to = %next,
                "ignoring illegal sync transition"
            );
            return false;
        }
        self.state = next;
        true
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind, self.entity, self.state)?;
        if let Some(error) = &self.error {
            write!(f, " ({})", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut m = Mutation::applied(MutationKind::RenameBoard, 4);
        assert_eq!(m.state(), SyncState::AppliedLocally);

        assert!(m.begin_sync());
        assert_eq!(m.state(), SyncState::SyncPending);

        assert!(m.confirm());
        assert!(m.is_confirmed());
        assert!(m.state().is_settled());
        assert_eq!(m.to_string(), "rename board 4: synced");
    }

    #[test]
    fn test_failure_records_error() {
        let mut m = Mutation::applied(MutationKind::DeleteEntry, 10);
        m.begin_sync();
        assert!(m.fail(&BoardsError::Transport("timed out".into())));

        assert!(m.is_failed());
        assert_eq!(m.error(), Some("Transport error: timed out"));
    }

    #[test]
    fn test_illegal_transitions_are_ignored() {
        let mut m = Mutation::applied(MutationKind::AddEntry, "x");

        // Cannot settle before the remote call starts
        assert!(!m.confirm());
        assert!(!m.fail(&BoardsError::NotAuthenticated));
        assert_eq!(m.state(), SyncState::AppliedLocally);

        m.begin_sync();
        m.confirm();
        // Settled states are terminal
        assert!(!m.fail(&BoardsError::NotAuthenticated));
        assert!(!m.begin_sync());
        assert!(m.is_confirmed());
        assert!(m.error().is_none());
    }

    #[test]
    fn test_transition_table() {
        use SyncState::*;
        assert!(AppliedLocally.can_advance_to(SyncPending));
        assert!(!AppliedLocally.can_advance_to(SyncConfirmed));
        assert!(SyncPending.can_advance_to(SyncFailed));
        assert!(!SyncFailed.can_advance_to(SyncPending));
        assert!(!SyncConfirmed.can_advance_to(SyncFailed));
    }
}
