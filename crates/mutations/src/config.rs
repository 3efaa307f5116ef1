//! Mutation tracking configuration.
//!
//! The owning application decides whether edits are recorded; repositories
//! only ever receive the resulting store handle.

use core::str::FromStr;
use std::rc::Rc;

use tracing::warn;
use undoable_core::DomainError;

use crate::in_memory::InMemoryMutationStore;
use crate::no_op::NoOpMutationStore;
use crate::store::MutationStore;

/// Whether undo/redo history is recorded.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum MutationTracking {
    #[default]
    Enabled,
    Disabled,
}

impl MutationTracking {
    /// Environment variable read by [`MutationTracking::from_env`].
    pub const ENV_VAR: &'static str = "UNDOABLE_MUTATION_TRACKING";

    /// Read the setting from `UNDOABLE_MUTATION_TRACKING`.
    ///
    /// Unset means enabled. Unrecognized values are logged and fall back to
    /// enabled.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|err: DomainError| {
                warn!(value = %raw, error = %err, "invalid {}; tracking stays enabled", Self::ENV_VAR);
                Self::Enabled
            }),
            Err(_) => Self::Enabled,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::Enabled
    }

    /// Build the store matching this setting.
    pub fn into_store(self) -> Rc<dyn MutationStore> {
        match self {
            Self::Enabled => Rc::new(InMemoryMutationStore::new()),
            Self::Disabled => Rc::new(NoOpMutationStore::new()),
        }
    }
}

impl FromStr for MutationTracking {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "on" | "true" | "1" => Ok(Self::Enabled),
            "disabled" | "off" | "false" | "0" => Ok(Self::Disabled),
            other => Err(DomainError::failure(
                "MutationTracking.Invalid",
                format!("unrecognized mutation tracking setting '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::Mutation;

    #[test]
    fn parses_common_spellings() {
        assert_eq!("enabled".parse::<MutationTracking>(), Ok(MutationTracking::Enabled));
        assert_eq!(" ON ".parse::<MutationTracking>(), Ok(MutationTracking::Enabled));
        assert_eq!("1".parse::<MutationTracking>(), Ok(MutationTracking::Enabled));
        assert_eq!("Disabled".parse::<MutationTracking>(), Ok(MutationTracking::Disabled));
        assert_eq!("false".parse::<MutationTracking>(), Ok(MutationTracking::Disabled));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "sometimes".parse::<MutationTracking>().unwrap_err();
        assert_eq!(err.code(), "MutationTracking.Invalid");
    }

    #[test]
    fn default_is_enabled() {
        assert!(MutationTracking::default().is_enabled());
    }

    #[test]
    fn enabled_builds_recording_store() {
        let store = MutationTracking::Enabled.into_store();
        store.register_mutation(Mutation::new(|| Ok(()), || Ok(()), None));
        assert!(store.can_undo());
    }

    #[test]
    fn disabled_builds_no_op_store() {
        let store = MutationTracking::Disabled.into_store();
        store.register_mutation(Mutation::new(|| Ok(()), || Ok(()), None));
        assert!(!store.can_undo());
        assert_eq!(store.undo().unwrap_err(), DomainError::TrackingDisabled);
    }
}
