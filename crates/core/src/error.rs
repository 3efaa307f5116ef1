//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant maps to a stable error code (see [`DomainError::code`]) and a
/// human-readable message (its `Display` output). Expected conditions such as a
/// missing entity or an empty history are reported through this type, never
/// through panics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity with the same key is already present.
    #[error("Entity with id {id} already exists.")]
    AlreadyExists { entity: &'static str, id: String },

    /// No entity is stored under the requested key.
    #[error("Entity with id {id} not found.")]
    NotFound { entity: &'static str, id: String },

    /// The undo history is empty.
    #[error("No undo information available.")]
    UndoNotPossible,

    /// The redo history is empty.
    #[error("No redo information available.")]
    RedoNotPossible,

    /// Undo/redo was requested while history tracking is switched off.
    #[error("Mutation tracking is disabled.")]
    TrackingDisabled,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Free-form failure with a caller-defined code.
    #[error("{message}")]
    Failure { code: String, message: String },
}

impl DomainError {
    pub fn already_exists(entity: &'static str, id: impl ToString) -> Self {
        Self::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Stable error code.
    ///
    /// Repository failures use the entity type name as their code, so callers
    /// can tell which aggregate a failure came from.
    pub fn code(&self) -> &str {
        match self {
            DomainError::AlreadyExists { entity, .. } | DomainError::NotFound { entity, .. } => {
                *entity
            }
            DomainError::UndoNotPossible => "Undo.NotPossible",
            DomainError::RedoNotPossible => "Redo.NotPossible",
            DomainError::TrackingDisabled => "MutationTracking.Disabled",
            DomainError::InvalidId(_) => "EntityKey.Invalid",
            DomainError::Failure { code, .. } => code.as_str(),
        }
    }

    /// Rendered human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
