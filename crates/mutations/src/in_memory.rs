use std::cell::RefCell;

use tracing::{debug, warn};
use undoable_core::{DomainError, DomainResult};

use crate::mutation::Mutation;
use crate::store::MutationStore;

/// In-memory mutation store backed by two LIFO stacks.
///
/// - `register_mutation` pushes onto the undo stack and clears the redo stack.
/// - `undo` moves the top mutation to the redo stack once its undo action succeeds.
/// - `redo` moves the top mutation back to the undo stack once its redo action succeeds.
///
/// A mutation whose action fails is dropped from both stacks and the failure is
/// returned to the caller unchanged.
#[derive(Debug, Default)]
pub struct InMemoryMutationStore {
    undo_stack: RefCell<Vec<Mutation>>,
    redo_stack: RefCell<Vec<Mutation>>,
}

impl InMemoryMutationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.borrow().len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.borrow().len()
    }

    fn describe(stack: &RefCell<Vec<Mutation>>) -> Option<String> {
        stack
            .borrow()
            .last()
            .and_then(|m| m.change_description().map(str::to_owned))
    }
}

impl MutationStore for InMemoryMutationStore {
    fn register_mutation(&self, mutation: Mutation) {
        debug!(description = ?mutation.change_description(), "mutation registered");
        self.undo_stack.borrow_mut().push(mutation);
        self.redo_stack.borrow_mut().clear();
    }

    fn can_undo(&self) -> bool {
        !self.undo_stack.borrow().is_empty()
    }

    fn can_redo(&self) -> bool {
        !self.redo_stack.borrow().is_empty()
    }

    fn undo(&self) -> DomainResult<()> {
        // The stack borrow ends here, before the action runs.
        let mutation = self
            .undo_stack
            .borrow_mut()
            .pop()
            .ok_or(DomainError::UndoNotPossible)?;

        if let Err(err) = mutation.undo() {
            warn!(
                description = ?mutation.change_description(),
                code = err.code(),
                "undo failed; mutation dropped from history"
            );
            return Err(err);
        }

        debug!(description = ?mutation.change_description(), "mutation undone");
        self.redo_stack.borrow_mut().push(mutation);
        Ok(())
    }

    fn redo(&self) -> DomainResult<()> {
        let mutation = self
            .redo_stack
            .borrow_mut()
            .pop()
            .ok_or(DomainError::RedoNotPossible)?;

        if let Err(err) = mutation.redo() {
            warn!(
                description = ?mutation.change_description(),
                code = err.code(),
                "redo failed; mutation dropped from history"
            );
            return Err(err);
        }

        debug!(description = ?mutation.change_description(), "mutation redone");
        self.undo_stack.borrow_mut().push(mutation);
        Ok(())
    }

    fn undo_description(&self) -> Option<String> {
        Self::describe(&self.undo_stack)
    }

    fn redo_description(&self) -> Option<String> {
        Self::describe(&self.redo_stack)
    }
}
