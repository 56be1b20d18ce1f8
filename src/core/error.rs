//! Misuse errors raised while building or chaining nodes.

use thiserror::Error;

/// Programming errors in how a node is built or chained.
///
/// Domain failures are never reported here; those are nodes in the
/// `Failed` state.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("Chain requires a success branch. Pass Some(on_success)")]
    MissingSuccessBranch,

    #[error("Node initializer returned without settling. Call resolve() or reject() exactly once")]
    Unsettled,

    #[error("Node already settled as {previous}; it cannot be settled twice")]
    AlreadySettled { previous: crate::core::NodeState },
}
