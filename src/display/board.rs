//! Board display formatting
//!
//! Boards render as a tree: one header line per board with its balance,
//! entries listed underneath in display order.

use crate::models::{Board, Entry};
use crate::sync::Mutation;

/// Format boards and their entries as a tree
pub fn format_board_tree(boards: &[Board], symbol: &str) -> String {
    if boards.is_empty() {
        return "No boards found.\n\nRun 'boards board create <title> --category <category>' to add one."
            .to_string();
    }

    let mut output = String::new();

    for (i, board) in boards.iter().enumerate() {
        output.push_str(&format_board_header(i, board, symbol));

        if board.entries.is_empty() {
            output.push_str("  (no entries)\n");
        } else {
            for (j, entry) in board.entries.iter().enumerate() {
                let prefix = if j == board.entries.len() - 1 {
                    "└── "
                } else {
                    "├── "
                };
                output.push_str(&format!("  {}{}\n", prefix, format_entry_line(entry, symbol)));
            }
        }

        if i < boards.len() - 1 {
            output.push('\n');
        }
    }

    output
}

fn format_board_header(position: usize, board: &Board, symbol: &str) -> String {
    let category = board
        .category_name
        .as_deref()
        .map(|name| format!(" [{}]", name))
        .unwrap_or_default();

    format!(
        "{}. {} (#{}){}  balance {}\n",
        position,
        board.title,
        board.id,
        category,
        board.balance().format_with_symbol(symbol)
    )
}

/// One entry as "- Coffee  $5.00  #10"
pub fn format_entry_line(entry: &Entry, symbol: &str) -> String {
    let pending = if entry.is_confirmed() { "" } else { " (pending)" };
    format!(
        "{} {}  {}  #{}{}",
        entry.entry_type.symbol(),
        entry.name,
        entry.amount.format_with_symbol(symbol),
        entry.id,
        pending
    )
}

/// Compact board list without entries
pub fn format_board_list(boards: &[Board], symbol: &str) -> String {
    if boards.is_empty() {
        return "No boards found.".to_string();
    }

    let title_width = boards
        .iter()
        .map(|b| b.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<width$}  {:>7}  {:>12}  {}\n",
        "Pos",
        "Board",
        "Entries",
        "Balance",
        "ID",
        width = title_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<width$}  {:->7}  {:->12}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        width = title_width
    ));

    for (i, board) in boards.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<width$}  {:>7}  {:>12}  {}\n",
            i,
            board.title,
            board.entries.len(),
            board.balance().format_with_symbol(symbol),
            board.id,
            width = title_width
        ));
    }

    output
}

/// Describe how a mutation ended
pub fn format_mutation(mutation: &Mutation) -> String {
    if mutation.is_confirmed() {
        format!("Done: {} {}", mutation.kind, mutation.entity)
    } else {
        format!(
            "Saved locally, but the server did not accept it: {}\nRun 'boards sync' to reload from the server.",
            mutation.error().unwrap_or("unknown error")
        )
    }
}
