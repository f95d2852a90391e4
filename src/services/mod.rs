//! Service layer for Budget Boards
//!
//! Services wrap the API client for the parts of the application that are
//! plain request/response: categories, goals and insights. Board state goes
//! through [`crate::sync::BoardStore`] instead.

pub mod category;
pub mod goal;
pub mod insight;

pub use category::CategoryService;
pub use goal::{GoalChanges, GoalService};
pub use insight::InsightService;
