//! The control node and its chaining rules.

use super::chainable::IntoControlNode;
use super::error::ControlError;
use super::settle::Settler;
use super::state::{NodeKind, NodeState, Outcome};
use serde::{Deserialize, Serialize};

/// Immutable outcome of one stage of a chain.
///
/// A node is settled exactly once, when it is built, as either succeeded or
/// failed, and carries a single payload. Chaining consumes the node and
/// yields the next one; nothing ever changes a node in place.
///
/// A failed node whose failure path produced no further node becomes *void*.
/// Void nodes report [`NodeState::Failed`] and absorb every later chain call.
/// There is no public constructor for them; the one other way to obtain a
/// void node is deserializing a previously serialized one, which restores
/// the same value.
///
/// # Example
///
/// ```rust
/// use control_node::core::{ControlNode, NodeKind, Outcome};
///
/// let node = ControlNode::new(|| Outcome::Success(5))
///     .chain(|v: &i32| assert_eq!(*v, 5))
///     .chain(|v: &i32| ControlNode::failed(*v * 2))
///     .chain_with(|_: &i32| {}, |v: &i32| assert_eq!(*v, 10));
///
/// assert_eq!(node.kind(), NodeKind::Void);
/// assert_eq!(*node.result(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlNode<T> {
    repr: Repr<T>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Repr<T> {
    Succeeded(T),
    Failed(T),
    Void(T),
}

/// Branch type used when no failure branch is supplied.
type NoBranch<T> = fn(&T);

impl<T> ControlNode<T> {
    /// Build a node from an initializer that settles it.
    ///
    /// The initializer runs synchronously and must return exactly one
    /// outcome, so a node can never be left unsettled.
    pub fn new<F>(init: F) -> Self
    where
        F: FnOnce() -> Outcome<T>,
    {
        Self::from_outcome(init())
    }

    /// Build a node through resolve/reject callbacks.
    ///
    /// Fails with [`ControlError::Unsettled`] if the initializer returns
    /// without settling, and with [`ControlError::AlreadySettled`] if it
    /// tried to settle more than once, even when it discarded that error.
    /// Other errors returned by the initializer are passed through.
    ///
    /// ```rust
    /// use control_node::core::{ControlError, ControlNode};
    ///
    /// let node = ControlNode::settle(|s| s.reject("denied")).unwrap();
    /// assert!(node.is_failed());
    ///
    /// let never = ControlNode::<i32>::settle(|_| Ok(()));
    /// assert_eq!(never.unwrap_err(), ControlError::Unsettled);
    ///
    /// let twice = ControlNode::settle(|s| {
    ///     s.resolve(1)?;
    ///     let _ = s.reject(2);
    ///     Ok(())
    /// });
    /// assert!(matches!(twice, Err(ControlError::AlreadySettled { .. })));
    /// ```
    pub fn settle<F>(init: F) -> Result<Self, ControlError>
    where
        F: FnOnce(&mut Settler<T>) -> Result<(), ControlError>,
    {
        let mut settler = Settler::new();
        if let Err(err) = init(&mut settler) {
            tracing::debug!(error = %err, "node initializer failed");
            return Err(err);
        }
        match settler.finish() {
            Ok(outcome) => Ok(Self::from_outcome(outcome)),
            Err(err) => {
                tracing::debug!(error = %err, "node initializer settled incorrectly");
                Err(err)
            }
        }
    }

    /// Build a node settled with `outcome`.
    pub fn from_outcome(outcome: Outcome<T>) -> Self {
        let repr = match outcome {
            Outcome::Success(value) => Repr::Succeeded(value),
            Outcome::Failure(value) => Repr::Failed(value),
        };
        Self { repr }
    }

    /// Build a succeeded node carrying `value`.
    pub fn succeeded(value: T) -> Self {
        Self::from_outcome(Outcome::Success(value))
    }

    /// Build a failed node carrying `value`.
    pub fn failed(value: T) -> Self {
        Self::from_outcome(Outcome::Failure(value))
    }

    fn void(value: T) -> Self {
        Self {
            repr: Repr::Void(value),
        }
    }

    /// Payload the node was settled with.
    pub fn result(&self) -> &T {
        match &self.repr {
            Repr::Succeeded(value) | Repr::Failed(value) | Repr::Void(value) => value,
        }
    }

    /// Two-valued state tag; void nodes report `Failed`.
    pub fn state(&self) -> NodeState {
        self.kind().state()
    }

    /// Position in the chain state machine, distinguishing void nodes.
    pub fn kind(&self) -> NodeKind {
        match self.repr {
            Repr::Succeeded(_) => NodeKind::Succeeded,
            Repr::Failed(_) => NodeKind::Failed,
            Repr::Void(_) => NodeKind::Void,
        }
    }

    /// Check if the node settled as succeeded.
    pub fn is_succeeded(&self) -> bool {
        matches!(self.repr, Repr::Succeeded(_))
    }

    /// True for failed and void nodes alike.
    pub fn is_failed(&self) -> bool {
        !self.is_succeeded()
    }

    /// Check if the node is an absorbing void terminal.
    pub fn is_void(&self) -> bool {
        matches!(self.repr, Repr::Void(_))
    }

    /// Consume the node, returning its payload.
    pub fn into_result(self) -> T {
        match self.repr {
            Repr::Succeeded(value) | Repr::Failed(value) | Repr::Void(value) => value,
        }
    }

    /// Void nodes map to [`Outcome::Failure`].
    pub fn into_outcome(self) -> Outcome<T> {
        match self.repr {
            Repr::Succeeded(value) => Outcome::Success(value),
            Repr::Failed(value) | Repr::Void(value) => Outcome::Failure(value),
        }
    }

    /// Convert to a std `Result`: `Ok` for succeeded, `Err` otherwise.
    pub fn into_std(self) -> Result<T, T> {
        match self.into_outcome() {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(value) => Err(value),
        }
    }

    /// Identity adapter, so a node is accepted wherever a chainable is.
    pub fn into_node(self) -> Self {
        self
    }

    /// Sequence a success branch onto this node.
    ///
    /// Equivalent to [`chain_with`](Self::chain_with) with no failure branch:
    /// a failed node becomes void.
    pub fn chain<F, R>(self, on_success: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
    {
        self.step(on_success, None::<NoBranch<T>>)
    }

    /// Sequence a success branch and a failure branch onto this node.
    ///
    /// - Succeeded: runs `on_success`. A returned node replaces the chain;
    ///   a plain value is discarded and the new succeeded node carries the
    ///   original payload.
    /// - Failed: runs `on_failure`. A returned node replaces the chain;
    ///   otherwise the result is a void node carrying the original payload.
    /// - Void: returns `self` without running either branch.
    ///
    /// Panics raised by a branch propagate to the caller.
    pub fn chain_with<F, R, G, S>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
        G: FnOnce(&T) -> S,
        S: IntoControlNode<T>,
    {
        self.step(on_success, Some(on_failure))
    }

    /// Chain with branches that may be absent at runtime.
    ///
    /// A missing success branch is a programming error and is reported for
    /// succeeded and failed nodes alike. Void nodes ignore their arguments,
    /// so they return `Ok(self)` even then.
    ///
    /// ```rust
    /// use control_node::core::{ControlError, ControlNode};
    ///
    /// let missing: Option<fn(&i32)> = None;
    /// let err = ControlNode::succeeded(1)
    ///     .try_chain(missing, missing)
    ///     .unwrap_err();
    /// assert_eq!(err, ControlError::MissingSuccessBranch);
    /// ```
    pub fn try_chain<F, R, G, S>(
        self,
        on_success: Option<F>,
        on_failure: Option<G>,
    ) -> Result<Self, ControlError>
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
        G: FnOnce(&T) -> S,
        S: IntoControlNode<T>,
    {
        if self.is_void() {
            return Ok(self);
        }
        let Some(on_success) = on_success else {
            return Err(ControlError::MissingSuccessBranch);
        };
        Ok(self.step(on_success, on_failure))
    }

    fn step<F, R, G, S>(self, on_success: F, on_failure: Option<G>) -> Self
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
        G: FnOnce(&T) -> S,
        S: IntoControlNode<T>,
    {
        let from = self.kind();
        let (next, adapted) = match self.repr {
            Repr::Succeeded(result) => {
                let branched = on_success(&result).into_control_node();
                match branched {
                    Some(node) => (node, true),
                    None => (Self::succeeded(result), false),
                }
            }
            Repr::Failed(result) => {
                let branched = on_failure.and_then(|branch| branch(&result).into_control_node());
                match branched {
                    Some(node) => (node, true),
                    None => (Self::void(result), false),
                }
            }
            Repr::Void(result) => (Self::void(result), false),
        };
        tracing::trace!(from = %from, to = %next.kind(), adapted, "chain step");
        next
    }
}

impl<T> From<Outcome<T>> for ControlNode<T> {
    fn from(outcome: Outcome<T>) -> Self {
        Self::from_outcome(outcome)
    }
}

impl<T> From<Result<T, T>> for ControlNode<T> {
    fn from(result: Result<T, T>) -> Self {
        Self::from_outcome(result.into())
    }
}
