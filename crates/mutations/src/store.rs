//! Mutation store abstraction.

use std::rc::Rc;

use undoable_core::DomainResult;

use crate::mutation::Mutation;

/// Storage and control for applied mutations (undo/redo history).
///
/// Methods take `&self` so one store can be shared between every repository
/// that records into it and the caller-owned undo/redo command that drives it.
/// Stores are single-threaded; callers serialize access.
pub trait MutationStore {
    /// Register a newly applied mutation.
    ///
    /// Clears the redo history: redo is only valid until a new change is made.
    fn register_mutation(&self, mutation: Mutation);

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    /// Undo the most recently applied mutation.
    fn undo(&self) -> DomainResult<()>;

    /// Redo the most recently undone mutation.
    fn redo(&self) -> DomainResult<()>;

    /// Description of the mutation the next `undo()` would revert.
    fn undo_description(&self) -> Option<String> {
        None
    }

    /// Description of the mutation the next `redo()` would re-apply.
    fn redo_description(&self) -> Option<String> {
        None
    }
}

impl<S> MutationStore for Rc<S>
where
    S: MutationStore + ?Sized,
{
    fn register_mutation(&self, mutation: Mutation) {
        (**self).register_mutation(mutation)
    }

    fn can_undo(&self) -> bool {
        (**self).can_undo()
    }

    fn can_redo(&self) -> bool {
        (**self).can_redo()
    }

    fn undo(&self) -> DomainResult<()> {
        (**self).undo()
    }

    fn redo(&self) -> DomainResult<()> {
        (**self).redo()
    }

    fn undo_description(&self) -> Option<String> {
        (**self).undo_description()
    }

    fn redo_description(&self) -> Option<String> {
        (**self).redo_description()
    }
}
