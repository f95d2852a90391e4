//! Entry CLI commands

use clap::Subcommand;

use crate::display::format_mutation;
use crate::error::{BoardsError, BoardsResult};
use crate::models::{EntryId, EntryType, Money};
use crate::sync::{EntryChanges, EntryMove};

use super::context::{resolve_board, AppContext};

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add an entry to the end of a board
    Add {
        /// Board title or ID
        board: String,
        /// Entry name
        name: String,
        /// Amount (e.g., "12.50")
        amount: String,
        /// "+" / "credit" or "-" / "debit"
        #[arg(short = 't', long = "type", default_value = "-")]
        entry_type: String,
    },

    /// Edit an entry
    Edit {
        /// Entry ID
        entry: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        entry_type: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        entry: String,
    },

    /// Move an entry within its board or to another board
    Move {
        /// Entry ID
        entry: String,
        /// Destination board title or ID (defaults to the current board)
        #[arg(short, long)]
        board: Option<String>,
        /// Destination position (defaults to the end)
        #[arg(short, long)]
        position: Option<usize>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(ctx: &AppContext, cmd: EntryCommands) -> BoardsResult<()> {
    let client = ctx.client()?;
    let mut store = ctx.board_store(&client);
    store.load()?;

    let mutation = match cmd {
        EntryCommands::Add {
            board,
            name,
            amount,
            entry_type,
        } => {
            let board_id = resolve_board(store.boards(), &board)?;
            store.add_entry(board_id, parse_type(&entry_type)?, &name, parse_amount(&amount)?)?
        }

        EntryCommands::Edit {
            entry,
            name,
            amount,
            entry_type,
        } => {
            let changes = EntryChanges {
                name,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                entry_type: entry_type.as_deref().map(parse_type).transpose()?,
            };
            if changes.is_empty() {
                return Err(BoardsError::Validation(
                    "Nothing to change: pass --name, --amount or --type".into(),
                ));
            }
            store.edit_entry(parse_entry_id(&entry)?, &changes)?
        }

        EntryCommands::Delete { entry } => store.delete_entry(parse_entry_id(&entry)?)?,

        EntryCommands::Move {
            entry,
            board,
            position,
        } => {
            let id = parse_entry_id(&entry)?;
            let (source, index) = store
                .entry(id)
                .and_then(|(b, _)| b.position_of(id).map(|i| (b.id, i)))
                .ok_or_else(|| BoardsError::entry_not_found(entry.clone()))?;
            let destination = match board {
                Some(board) => resolve_board(store.boards(), &board)?,
                None => source,
            };

            store.move_entry(EntryMove {
                source_board: source,
                source_index: index,
                destination_board: destination,
                destination_index: position.unwrap_or(usize::MAX),
            })?
        }
    };

    println!("{}", format_mutation(&mutation));
    Ok(())
}

fn parse_entry_id(s: &str) -> BoardsResult<EntryId> {
    s.parse()
        .map_err(|e| BoardsError::Validation(format!("Invalid entry ID '{}': {}", s, e)))
}

fn parse_amount(s: &str) -> BoardsResult<Money> {
    Money::parse(s).map_err(|e| BoardsError::Validation(format!("Invalid amount: {}", e)))
}

fn parse_type(s: &str) -> BoardsResult<EntryType> {
    s.parse()
        .map_err(|e| BoardsError::Validation(format!("{}", e)))
}
