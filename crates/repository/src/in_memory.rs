use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;
use undoable_core::{Aggregate, DomainError, DomainResult, Entity};
use undoable_mutations::{Mutation, MutationStore};

use crate::repository::AggregateRepository;

/// Live collection shared between a repository and the mutations it records.
///
/// Each method is one raw edit that either applies fully or fails without
/// touching the map. None of them register history.
struct Entities<E: Entity> {
    inner: Rc<RefCell<BTreeMap<E::Id, E>>>,
}

impl<E: Entity> Clone for Entities<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: Entity> Entities<E> {
    fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    fn insert(&self, entity: E) -> DomainResult<()> {
        let id = *entity.id();
        let mut map = self.inner.borrow_mut();
        if map.contains_key(&id) {
            return Err(DomainError::already_exists(E::type_name(), id));
        }
        map.insert(id, entity);
        debug!(entity = E::type_name(), %id, "entity inserted");
        Ok(())
    }

    /// Swap in `entity`, returning the value it replaced.
    fn replace(&self, entity: E) -> DomainResult<E> {
        let id = *entity.id();
        let mut map = self.inner.borrow_mut();
        let slot = map
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(E::type_name(), id))?;
        debug!(entity = E::type_name(), %id, "entity replaced");
        Ok(std::mem::replace(slot, entity))
    }

    fn delete(&self, id: E::Id) -> DomainResult<E> {
        let removed = self
            .inner
            .borrow_mut()
            .remove(&id)
            .ok_or_else(|| DomainError::not_found(E::type_name(), id))?;
        debug!(entity = E::type_name(), %id, "entity deleted");
        Ok(removed)
    }
}

/// In-memory aggregate repository.
///
/// Entities are kept in a `BTreeMap`, so iteration follows key order (creation
/// order for UUIDv7 keys). Every command runs its raw edit first and records a
/// mutation only if the edit succeeded, so the undo history never contains a
/// change that did not happen.
pub struct InMemoryAggregateRepository<E: Aggregate> {
    entities: Entities<E>,
    mutations: Rc<dyn MutationStore>,
}

impl<E: Aggregate> InMemoryAggregateRepository<E> {
    pub fn new(mutations: Rc<dyn MutationStore>) -> Self {
        Self {
            entities: Entities::new(),
            mutations,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.inner.borrow().is_empty()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.entities.inner.borrow().contains_key(id)
    }

    /// Store handle this repository records into.
    pub fn mutation_store(&self) -> &Rc<dyn MutationStore> {
        &self.mutations
    }

    fn record<U, R>(&self, undo: U, redo: R, description: Option<&str>)
    where
        U: Fn() -> DomainResult<()> + 'static,
        R: Fn() -> DomainResult<()> + 'static,
    {
        debug!(entity = E::type_name(), ?description, "recording mutation");
        self.mutations
            .register_mutation(Mutation::new(undo, redo, description.map(str::to_owned)));
    }
}

impl<E: Aggregate> core::fmt::Debug for InMemoryAggregateRepository<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InMemoryAggregateRepository")
            .field("entity", &E::type_name())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<E: Aggregate> AggregateRepository<E> for InMemoryAggregateRepository<E> {
    fn get_by_id(&self, id: &E::Id) -> DomainResult<E> {
        self.entities
            .inner
            .borrow()
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(E::type_name(), id))
    }

    fn first_or_none(&self, predicate: &dyn Fn(&E) -> bool) -> Option<E> {
        self.entities
            .inner
            .borrow()
            .values()
            .find(|entity| predicate(entity))
            .cloned()
    }

    fn get_all(&self) -> Vec<E> {
        self.entities.inner.borrow().values().cloned().collect()
    }

    fn filter(&self, predicate: &dyn Fn(&E) -> bool) -> Vec<E> {
        self.entities
            .inner
            .borrow()
            .values()
            .filter(|entity| predicate(entity))
            .cloned()
            .collect()
    }

    fn add(&self, entity: E, description: Option<&str>) -> DomainResult<()> {
        let id = *entity.id();
        self.entities.insert(entity.clone())?;

        let (undo_target, redo_target) = (self.entities.clone(), self.entities.clone());
        self.record(
            move || undo_target.delete(id).map(drop),
            move || redo_target.insert(entity.clone()),
            description,
        );
        Ok(())
    }

    fn update(&self, updated: E, description: Option<&str>) -> DomainResult<()> {
        let original = self.entities.replace(updated.clone())?;

        let (undo_target, redo_target) = (self.entities.clone(), self.entities.clone());
        self.record(
            move || undo_target.replace(original.clone()).map(drop),
            move || redo_target.replace(updated.clone()).map(drop),
            description,
        );
        Ok(())
    }

    fn remove(&self, id: &E::Id, description: Option<&str>) -> DomainResult<()> {
        let id = *id;
        let removed = self.entities.delete(id)?;

        let (undo_target, redo_target) = (self.entities.clone(), self.entities.clone());
        self.record(
            move || undo_target.insert(removed.clone()),
            move || redo_target.delete(id).map(drop),
            description,
        );
        Ok(())
    }
}
