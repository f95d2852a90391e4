//! Board synchronization
//!
//! [`BoardStore`] holds the ordered boards and keeps them in step with the
//! remote service using local-first updates. Ordering transforms live in
//! [`reorder`] as pure functions; [`Mutation`] records how far each change
//! got.

pub mod reorder;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use reorder::{EntryMove, MovedEntry};
pub use state::{Mutation, MutationKind, SyncState};
pub use store::{BoardStore, EntryChanges};
