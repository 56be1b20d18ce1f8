//! Conversion capability recognized on branch return values.
//!
//! A branch passed to [`ControlNode::chain`] may return either a plain value,
//! which is only evaluated for its side effects, or something that converts
//! into the next node of the chain. [`IntoControlNode`] is how a return type
//! declares which of the two it is.

use super::node::ControlNode;
use super::state::Outcome;

/// Capability for a branch return value to stand in as the next node.
///
/// Returning `Some` hands the chain over to that node unchanged. Returning
/// `None` marks the value as plain: the chain keeps carrying the original
/// payload.
///
/// Only `()` and [`Chainable::Plain`] count as plain values out of the box.
/// A branch that computes some other value, such as a `bool` or an `i32`,
/// and wants it discarded must wrap it in [`Chainable::plain`]. Blanket
/// impls for arbitrary types would overlap with the node impls below.
///
/// # Example
///
/// ```rust
/// use control_node::core::{ControlNode, IntoControlNode};
///
/// struct Rejection(u32);
///
/// impl IntoControlNode<u32> for Rejection {
///     fn into_control_node(self) -> Option<ControlNode<u32>> {
///         Some(ControlNode::failed(self.0))
///     }
/// }
///
/// let node = ControlNode::succeeded(5).chain(|v: &u32| Rejection(v + 1));
/// assert!(node.is_failed());
/// assert_eq!(*node.result(), 6);
/// ```
pub trait IntoControlNode<T> {
    /// `Some` to continue from that node, `None` for a plain value.
    fn into_control_node(self) -> Option<ControlNode<T>>;
}

impl<T> IntoControlNode<T> for () {
    fn into_control_node(self) -> Option<ControlNode<T>> {
        None
    }
}

impl<T> IntoControlNode<T> for ControlNode<T> {
    fn into_control_node(self) -> Option<ControlNode<T>> {
        Some(self.into_node())
    }
}

impl<T> IntoControlNode<T> for Option<ControlNode<T>> {
    fn into_control_node(self) -> Option<ControlNode<T>> {
        self.map(ControlNode::into_node)
    }
}

impl<T> IntoControlNode<T> for Outcome<T> {
    fn into_control_node(self) -> Option<ControlNode<T>> {
        Some(ControlNode::from_outcome(self))
    }
}

/// Branch return value that is decided at runtime.
///
/// Use this when a single branch sometimes hands back a node and sometimes
/// only a plain value.
///
/// ```rust
/// use control_node::core::{Chainable, ControlNode};
///
/// let node = ControlNode::succeeded(4).chain(|v: &i32| {
///     if v % 2 == 0 {
///         Chainable::plain("even")
///     } else {
///         Chainable::node(ControlNode::failed(*v))
///     }
/// });
///
/// assert!(node.is_succeeded());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Chainable<T, V = ()> {
    /// Continue the chain from this node
    Node(ControlNode<T>),
    /// Plain value, discarded after the adapter check
    Plain(V),
}

impl<T, V> Chainable<T, V> {
    /// Hand the chain over to `node`.
    pub fn node(node: ControlNode<T>) -> Self {
        Self::Node(node)
    }

    /// Mark `value` as plain; the chain keeps its original payload.
    pub fn plain(value: V) -> Self {
        Self::Plain(value)
    }

    /// Check if this value continues the chain from a node.
    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }
}

impl<T, V> IntoControlNode<T> for Chainable<T, V> {
    fn into_control_node(self) -> Option<ControlNode<T>> {
        match self {
            Self::Node(node) => Some(node.into_node()),
            Self::Plain(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NodeKind;

    #[test]
    fn unit_is_plain() {
        assert!(IntoControlNode::<i32>::into_control_node(()).is_none());
    }

    #[test]
    fn node_converts_to_itself() {
        let node = ControlNode::failed(3);
        assert_eq!(node.clone().into_control_node(), Some(node));
    }

    #[test]
    fn option_follows_its_contents() {
        let none: Option<ControlNode<i32>> = None;
        assert!(none.into_control_node().is_none());

        let some = Some(ControlNode::succeeded(1));
        assert_eq!(
            some.into_control_node().map(|n| n.kind()),
            Some(NodeKind::Succeeded)
        );
    }

    #[test]
    fn outcome_builds_fresh_node() {
        let node = Outcome::Failure(9).into_control_node().unwrap();
        assert_eq!(node.kind(), NodeKind::Failed);
        assert_eq!(*node.result(), 9);
    }

    #[test]
    fn wrapped_plain_value_keeps_original_payload() {
        let node = ControlNode::succeeded(5).chain(|v: &i32| Chainable::<i32, bool>::plain(*v > 3));
        assert_eq!(node, ControlNode::succeeded(5));
    }

    #[test]
    fn chainable_distinguishes_node_from_plain() {
        let plain: Chainable<i32, &str> = Chainable::plain("ignored");
        let node: Chainable<i32, &str> = Chainable::node(ControlNode::succeeded(2));

        assert!(!plain.is_node());
        assert!(node.is_node());
        assert!(plain.into_control_node().is_none());
        assert_eq!(*node.into_control_node().unwrap().result(), 2);
    }
}
