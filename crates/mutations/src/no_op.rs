use undoable_core::{DomainError, DomainResult};

use crate::mutation::Mutation;
use crate::store::MutationStore;

/// Mutation store used when history tracking is disabled.
///
/// Registrations are discarded; undo/redo always fail with
/// [`DomainError::TrackingDisabled`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpMutationStore;

impl NoOpMutationStore {
    pub fn new() -> Self {
        Self
    }
}

impl MutationStore for NoOpMutationStore {
    #[inline]
    fn register_mutation(&self, _mutation: Mutation) {}

    fn can_undo(&self) -> bool {
        false
    }

    fn can_redo(&self) -> bool {
        false
    }

    fn undo(&self) -> DomainResult<()> {
        Err(DomainError::TrackingDisabled)
    }

    fn redo(&self) -> DomainResult<()> {
        Err(DomainError::TrackingDisabled)
    }
}
