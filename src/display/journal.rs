//! Journal display formatting

use crate::journal::JournalEntry;

pub fn format_journal(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "Journal is empty.".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_string());
        output.push('\n');
    }
    output
}
