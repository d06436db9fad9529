// ── Mutation policy gate ──
//
// The core never authenticates. It consumes one fact from the role
// collaborator — whether the session may mutate — and enforces it at every
// write entry point. A denied write is a quiet no-op, not a fault: the UI
// is responsible for not offering the action, the core refuses it anyway.

use serde::{Deserialize, Serialize};

/// Session-level write permission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessPolicy {
    #[default]
    ReadWrite,
    ReadOnly,
}

impl AccessPolicy {
    pub fn can_mutate(self) -> bool {
        matches!(self, Self::ReadWrite)
    }
}

/// Result of a mutation attempt. There is no error variant on purpose:
/// every failure mode of a draft edit is benign and resolved in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "callers should surface Denied / UnknownTarget to the user"]
pub enum MutationOutcome {
    /// The update was applied in full.
    Applied,
    /// Read-only session; nothing was touched.
    Denied,
    /// The switch or port id does not exist; nothing was touched.
    UnknownTarget,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_only_cannot_mutate() {
        assert!(AccessPolicy::ReadWrite.can_mutate());
        assert!(!AccessPolicy::ReadOnly.can_mutate());
    }

    #[test]
    fn default_policy_is_read_write() {
        assert_eq!(AccessPolicy::default(), AccessPolicy::ReadWrite);
    }
}
