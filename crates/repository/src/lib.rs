//! Aggregate repositories with built-in change tracking.
//!
//! Every successful `add`/`update`/`remove` registers a [`Mutation`] with the
//! injected [`MutationStore`], so the edit can later be undone and redone.
//!
//! [`Mutation`]: undoable_mutations::Mutation
//! [`MutationStore`]: undoable_mutations::MutationStore

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemoryAggregateRepository;
pub use repository::AggregateRepository;
