//! Entity trait: identity + continuity across state changes.

use uuid::Uuid;

use crate::id::EntityKey;

/// Entity marker + minimal interface.
///
/// Entities are immutable values. An edit produces a new value carrying the
/// same key, which then replaces the old one wholesale.
pub trait Entity: Clone + core::fmt::Debug + 'static {
    /// Strongly-typed entity identifier.
    type Id: EntityKey;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Unqualified type name, used as the code of repository failures.
    fn type_name() -> &'static str {
        let full = core::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    fn raw_id(&self) -> Uuid {
        self.id().value()
    }
}
