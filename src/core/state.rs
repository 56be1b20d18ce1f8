//! State tags and settlement outcomes for control nodes.
//!
//! These are plain values with no behavior beyond inspection. A node's tag
//! is fixed when the node is built and never changes afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settled state of a node.
///
/// Void nodes report [`NodeState::Failed`]; use [`NodeKind`] to tell them
/// apart from ordinary failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeState {
    Succeeded,
    Failed,
}

impl NodeState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a node in the chain state machine.
///
/// `Void` is absorbing: every chain call on a void node returns it unchanged.
///
/// # Example
///
/// ```rust
/// use control_node::core::{NodeKind, NodeState};
///
/// assert_eq!(NodeKind::Void.state(), NodeState::Failed);
/// assert!(NodeKind::Void.is_terminal());
/// assert!(!NodeKind::Failed.is_terminal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Succeeded,
    Failed,
    Void,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::Void => "Void",
        }
    }

    /// Collapse the kind to the two-valued state tag.
    pub fn state(&self) -> NodeState {
        match self {
            Self::Succeeded => NodeState::Succeeded,
            Self::Failed | Self::Void => NodeState::Failed,
        }
    }

    /// Check if no further computation can happen from this kind.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The single settlement an initializer hands back when building a node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T> {
    /// Settle as succeeded with this payload
    Success(T),
    /// Settle as failed with this payload
    Failure(T),
}

impl<T> Outcome<T> {
    /// State the outcome settles a node into.
    pub fn state(&self) -> NodeState {
        match self {
            Self::Success(_) => NodeState::Succeeded,
            Self::Failure(_) => NodeState::Failed,
        }
    }

    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }
}

impl<T> From<Result<T, T>> for Outcome<T> {
    fn from(result: Result<T, T>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(value) => Self::Failure(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_kind_reports_failed_state() {
        assert_eq!(NodeKind::Succeeded.state(), NodeState::Succeeded);
        assert_eq!(NodeKind::Failed.state(), NodeState::Failed);
        assert_eq!(NodeKind::Void.state(), NodeState::Failed);
    }

    #[test]
    fn only_void_is_terminal() {
        assert!(!NodeKind::Succeeded.is_terminal());
        assert!(!NodeKind::Failed.is_terminal());
        assert!(NodeKind::Void.is_terminal());
    }

    #[test]
    fn names_match_display() {
        assert_eq!(NodeState::Succeeded.to_string(), "Succeeded");
        assert_eq!(NodeKind::Void.to_string(), "Void");
    }

    #[test]
    fn outcome_exposes_state_and_value() {
        let success = Outcome::Success(5);
        let failure = Outcome::Failure("boom");

        assert_eq!(success.state(), NodeState::Succeeded);
        assert_eq!(*success.value(), 5);
        assert_eq!(failure.state(), NodeState::Failed);
        assert_eq!(failure.into_value(), "boom");
    }

    #[test]
    fn outcome_from_std_result() {
        assert_eq!(Outcome::from(Ok::<_, i32>(1)), Outcome::Success(1));
        assert_eq!(Outcome::from(Err::<i32, _>(2)), Outcome::Failure(2));
    }

    #[test]
    fn state_serializes_correctly() {
        let json = serde_json::to_string(&NodeKind::Void).unwrap();
        let deserialized: NodeKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, NodeKind::Void);
    }
}
