//! Journal line format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sync::{Mutation, MutationKind, SyncState};

/// One settled mutation as written to the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the mutation settled (UTC)
    pub timestamp: DateTime<Utc>,

    pub kind: MutationKind,

    /// Board or entry the mutation touched
    pub entity: String,

    pub state: SyncState,

    /// Remote error text, if the sync failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JournalEntry {
    pub fn new(kind: MutationKind, entity: impl Into<String>, state: SyncState) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            entity: entity.into(),
            state,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl From<&Mutation> for JournalEntry {
    fn from(mutation: &Mutation) -> Self {
        let entry = Self::new(mutation.kind, mutation.entity.clone(), mutation.state());
        match mutation.error() {
            Some(error) => entry.with_detail(error),
            None => entry,
        }
    }
}

impl fmt::Display for JournalEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.entity,
            self.state
        )?;
        if let Some(detail) = &self.detail {
            write!(f, " {}", detail)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardsError;

    #[test]
    fn test_from_failed_mutation() {
        let mut mutation = Mutation::applied(MutationKind::DeleteBoard, 3);
        mutation.begin_sync();
        mutation.fail(&BoardsError::Server {
            status: 500,
            body: "boom".into(),
        });

        let entry = JournalEntry::from(&mutation);
        assert_eq!(entry.kind, MutationKind::DeleteBoard);
        assert_eq!(entry.entity, "3");
        assert_eq!(entry.state, SyncState::SyncFailed);
        assert_eq!(entry.detail.as_deref(), Some("Server returned 500: boom"));
    }

    #[test]
    fn test_serialized_shape() {
        let entry = JournalEntry::new(MutationKind::ReorderBoards, "2", SyncState::SyncConfirmed);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "reorder_boards");
        assert_eq!(json["state"], "sync_confirmed");
        assert!(json.get("detail").is_none());
    }
}
