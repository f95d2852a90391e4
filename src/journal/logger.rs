//! Append-only JSONL writer for the sync journal

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{BoardsError, BoardsResult};

use super::entry::JournalEntry;

/// Writes one JSON object per line to the journal file
#[derive(Debug, Clone)]
pub struct SyncJournal {
    path: PathBuf,
}

impl SyncJournal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append an entry and flush it
    pub fn record(&self, entry: &JournalEntry) -> BoardsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| BoardsError::Io(format!("Failed to create journal directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| BoardsError::Io(format!("Failed to open journal: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| BoardsError::Json(format!("Failed to serialize journal entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| BoardsError::Io(format!("Failed to write journal entry: {}", e)))?;

        file.flush()
            .map_err(|e| BoardsError::Io(format!("Failed to flush journal: {}", e)))
    }

    /// All entries, oldest first
    pub fn read_all(&self) -> BoardsResult<Vec<JournalEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .map_err(|e| BoardsError::Io(format!("Failed to open journal: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                BoardsError::Io(format!("Failed to read journal line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                BoardsError::Json(format!(
                    "Failed to parse journal entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> BoardsResult<Vec<JournalEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::{MutationKind, SyncState};
    use tempfile::TempDir;

    fn journal() -> (TempDir, SyncJournal) {
        let temp_dir = TempDir::new().unwrap();
        let journal = SyncJournal::new(temp_dir.path().join("journal.log"));
        (temp_dir, journal)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (_dir, journal) = journal();
        assert!(!journal.exists());
        assert!(journal.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_record_and_read_back() {
        let (_dir, journal) = journal();
        journal
            .record(&JournalEntry::new(MutationKind::AddBoard, "1", SyncState::SyncConfirmed))
            .unwrap();
        journal
            .record(
                &JournalEntry::new(MutationKind::DeleteEntry, "10", SyncState::SyncFailed)
                    .with_detail("timed out"),
            )
            .unwrap();

        let entries = journal.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, MutationKind::AddBoard);
        assert_eq!(entries[1].detail.as_deref(), Some("timed out"));

        let content = std::fs::read_to_string(journal.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_read_recent() {
        let (_dir, journal) = journal();
        for i in 0..5 {
            journal
                .record(&JournalEntry::new(
                    MutationKind::RenameBoard,
                    i.to_string(),
                    SyncState::SyncConfirmed,
                ))
                .unwrap();
        }

        let recent = journal.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].entity, "3");
        assert_eq!(recent[1].entity, "4");
        assert_eq!(journal.read_recent(50).unwrap().len(), 5);
    }
}
