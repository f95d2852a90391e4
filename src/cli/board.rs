//! Board CLI commands

use clap::Subcommand;
use tracing::warn;

use crate::display::{format_board_list, format_board_tree, format_mutation};
use crate::error::{BoardsError, BoardsResult};
use crate::services::CategoryService;

use super::context::{resolve_board, AppContext};

/// Board subcommands
#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show boards with their entries
    List {
        /// Show the cached boards without contacting the server
        #[arg(long)]
        offline: bool,
        /// One line per board, no entries
        #[arg(short, long)]
        compact: bool,
    },

    /// Create a new board
    Create {
        /// Board title
        title: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
    },

    /// Rename a board
    Rename {
        /// Board title or ID
        board: String,
        /// New title
        title: String,
    },

    /// Delete a board and its entries
    Delete {
        /// Board title or ID
        board: String,
    },

    /// Move a board to another position
    Move {
        /// Board title or ID
        board: String,
        /// Target position (0 is first)
        #[arg(short, long)]
        to: usize,
    },
}

/// Handle a board command
pub fn handle_board_command(ctx: &AppContext, cmd: BoardCommands) -> BoardsResult<()> {
    if let BoardCommands::List {
        offline: true,
        compact,
    } = cmd
    {
        let boards = ctx.cache().load();
        print_boards(ctx, &boards, compact);
        return Ok(());
    }

    let client = ctx.client()?;
    let mut store = ctx.board_store(&client);

    match cmd {
        BoardCommands::List { compact, .. } => {
            if let Err(e) = store.load() {
                if matches!(e, BoardsError::NotAuthenticated) {
                    return Err(e);
                }
                warn!("showing cached boards: {}", e);
                eprintln!("Could not reach the server, showing cached boards.");
            }
            print_boards(ctx, store.boards(), compact);
        }

        BoardCommands::Create { title, category } => {
            let category = CategoryService::new(&client, &ctx.session).find(&category)?;
            store.load()?;
            let board = store.add_board(&title, Some(category.id))?;
            println!("Created board: {} (#{}) in {}", board.title, board.id, category.name);
        }

        BoardCommands::Rename { board, title } => {
            store.load()?;
            let id = resolve_board(store.boards(), &board)?;
            let mutation = store.rename_board(id, &title)?;
            println!("{}", format_mutation(&mutation));
        }

        BoardCommands::Delete { board } => {
            store.load()?;
            let id = resolve_board(store.boards(), &board)?;
            let mutation = store.delete_board(id)?;
            println!("{}", format_mutation(&mutation));
        }

        BoardCommands::Move { board, to } => {
            store.load()?;
            let id = resolve_board(store.boards(), &board)?;
            let from = store
                .boards()
                .iter()
                .position(|b| b.id == id)
                .ok_or_else(|| BoardsError::board_not_found(board.clone()))?;
            let mutation = store.reorder_boards(from, to)?;
            println!("{}", format_mutation(&mutation));
        }
    }

    Ok(())
}

fn print_boards(ctx: &AppContext, boards: &[crate::models::Board], compact: bool) {
    if compact {
        print!("{}", format_board_list(boards, ctx.symbol()));
    } else {
        print!("{}", format_board_tree(boards, ctx.symbol()));
    }
}
