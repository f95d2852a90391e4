//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; the CLI decides where it goes.

pub mod board;
pub mod category;
pub mod goal;
pub mod insight;
pub mod journal;

pub use board::{format_board_list, format_board_tree, format_mutation};
pub use category::format_category_list;
pub use goal::format_goal_list;
pub use insight::{format_analytics, format_health, format_recommendations};
pub use journal::format_journal;
