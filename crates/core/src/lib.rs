//! `undoable-core`: domain foundation building blocks.
//!
//! Entity and key capabilities plus the shared error model. No history or
//! storage concerns live here.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityKey;

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use uuid::Uuid;
}
