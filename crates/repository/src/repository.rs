use undoable_core::{Aggregate, DomainResult};

/// Repository for aggregate roots: queries plus tracked commands.
///
/// Queries never fail except `get_by_id`, which reports a missing key.
/// Commands fail without side effects when their precondition does not hold;
/// on success they register exactly one mutation with the repository's store.
///
/// Query results are owned snapshots; later edits do not affect a returned `Vec`.
pub trait AggregateRepository<E: Aggregate> {
    /// Entity stored under `id`, or a not-found failure coded with the entity type name.
    fn get_by_id(&self, id: &E::Id) -> DomainResult<E>;

    /// First entity (in iteration order) matching `predicate`.
    fn first_or_none(&self, predicate: &dyn Fn(&E) -> bool) -> Option<E>;

    fn get_all(&self) -> Vec<E>;

    /// Entities matching `predicate`; empty when nothing matches.
    fn filter(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E>;

    /// Insert a new entity. Fails if its key is already present.
    fn add(&self, entity: E, description: Option<&str>) -> DomainResult<()>;

    /// Replace the entity carrying the same key. Fails if the key is absent.
    fn update(&self, updated: E, description: Option<&str>) -> DomainResult<()>;

    /// Delete the entity stored under `id`. Fails if the key is absent.
    fn remove(&self, id: &E::Id, description: Option<&str>) -> DomainResult<()>;
}
