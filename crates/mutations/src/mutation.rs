use undoable_core::DomainResult;

type Action = Box<dyn Fn() -> DomainResult<()>>;

/// A reversible record of one applied change.
///
/// The mutation does not know which domain operation it reverses; it only
/// holds the two captured actions. Actions may run any number of times (undo,
/// redo, undo again, ...), so they are `Fn` rather than `FnOnce`.
pub struct Mutation {
    undo: Action,
    redo: Action,
    description: Option<String>,
}

impl Mutation {
    pub fn new<U, R>(undo: U, redo: R, description: Option<String>) -> Self
    where
        U: Fn() -> DomainResult<()> + 'static,
        R: Fn() -> DomainResult<()> + 'static,
    {
        Self {
            undo: Box::new(undo),
            redo: Box::new(redo),
            description,
        }
    }

    /// Optional description of the change, for display purposes.
    pub fn change_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Revert the change.
    pub fn undo(&self) -> DomainResult<()> {
        (self.undo)()
    }

    /// Re-apply the change after it was undone.
    pub fn redo(&self) -> DomainResult<()> {
        (self.redo)()
    }
}

impl core::fmt::Debug for Mutation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mutation")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
