//! Sync journal
//!
//! Every store mutation, once settled, is appended to `journal.log` as one
//! JSON line. The journal is a diagnostic record of what was applied locally
//! and whether the server accepted it; nothing replays it.

mod entry;
mod logger;

pub use entry::JournalEntry;
pub use logger::SyncJournal;
