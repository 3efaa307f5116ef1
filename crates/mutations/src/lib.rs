//! Undo/redo history for in-memory edits.
//!
//! A [`Mutation`] pairs an undo action with a redo action. A [`MutationStore`]
//! keeps applied mutations on an undo stack and reverted ones on a redo stack.

pub mod config;
pub mod in_memory;
pub mod mutation;
pub mod no_op;
pub mod store;

pub use config::MutationTracking;
pub use in_memory::InMemoryMutationStore;
pub use mutation::Mutation;
pub use no_op::NoOpMutationStore;
pub use store::MutationStore;
