//! Strongly-typed entity keys.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use uuid::Uuid;

/// Capability of a strongly-typed entity key.
///
/// Keys are opaque, totally ordered and cheap to copy. New keys are produced on
/// demand by [`EntityKey::generate`]; [`EntityKey::empty`] is a sentinel that is
/// never assigned to a real entity.
pub trait EntityKey: Copy + Eq + Ord + Hash + Debug + Display + 'static {
    /// Create a fresh, globally unique key.
    fn generate() -> Self;

    /// The "empty" sentinel key.
    fn empty() -> Self;

    /// Raw underlying value, for generic access when the key type is unknown.
    fn value(&self) -> Uuid;

    fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

/// Declare a UUID-backed entity key newtype.
///
/// ```ignore
/// undoable_core::entity_key! {
///     /// Identifier of a person.
///     pub struct PersonId;
/// }
///
/// let id = PersonId::new();
/// assert!(!id.is_empty());
/// ```
///
/// Generated keys use UUIDv7 (time-ordered), so their `Ord` follows creation
/// order. Prefer passing IDs explicitly in tests for determinism.
#[macro_export]
macro_rules! entity_key {
    ($(#[$meta:meta])* $vis:vis struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($crate::__private::Uuid);

        impl $name {
            /// The empty (nil) key.
            pub const EMPTY: Self = Self($crate::__private::Uuid::nil());

            /// Create a new identifier.
            pub fn new() -> Self {
                Self($crate::__private::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: $crate::__private::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &$crate::__private::Uuid {
                &self.0
            }
        }

        impl $crate::EntityKey for $name {
            fn generate() -> Self {
                Self::new()
            }

            fn empty() -> Self {
                Self::EMPTY
            }

            fn value(&self) -> $crate::__private::Uuid {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$crate::__private::Uuid> for $name {
            fn from(value: $crate::__private::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $crate::__private::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = <$crate::__private::Uuid as core::str::FromStr>::from_str(s).map_err(
                    |e| $crate::DomainError::invalid_id(format!("{}: {}", stringify!($name), e)),
                )?;
                Ok(Self(uuid))
            }
        }

        // Serialized transparently as the underlying UUID.
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::__private::Uuid as $crate::__private::serde::Deserialize<'de>>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}
