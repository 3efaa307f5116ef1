//! Aggregate marker for entities that root a consistency boundary.

use crate::entity::Entity;

/// Aggregate root marker.
///
/// Only aggregates are managed through repositories; child entities are edited
/// by replacing the aggregate that owns them.
pub trait Aggregate: Entity {}
