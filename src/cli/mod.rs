//! CLI command handlers
//!
//! This module bridges clap argument parsing with the board store and the
//! services.

pub mod board;
pub mod context;
pub mod entry;
pub mod goal;
pub mod insights;
pub mod journal;
pub mod session;

pub use board::{handle_board_command, BoardCommands};
pub use context::AppContext;
pub use entry::{handle_entry_command, EntryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use insights::{handle_insight_command, InsightCommands};
pub use journal::{handle_categories, handle_journal};
pub use session::{handle_login, handle_logout, handle_status, handle_sync};
