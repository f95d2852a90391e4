//! Core data models for Budget Boards
//!
//! Boards, entries, categories and goals as exchanged with the remote
//! service, plus the money and ID types they are built from.

pub mod board;
pub mod category;
pub mod entry;
pub mod goal;
pub mod ids;
pub mod insight;
pub mod money;

pub use board::{Board, BoardValidationError};
pub use category::Category;
pub use entry::{Entry, EntryType, EntryValidationError};
pub use goal::{Goal, GoalKind, GoalProgress, GoalSpec, GoalStatus, ReferencePeriod};
pub use ids::{BoardId, CategoryId, EntryId, GoalId, RawId};
pub use insight::{
    HealthAnalysis, HealthBand, MonthlyAnalytics, Recommendation, RecommendationReport,
};
pub use money::Money;
