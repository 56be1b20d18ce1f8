//! A node paired with the history of the chain that produced it.

use super::{ChainHistory, ChainStep};
use crate::core::{ControlError, ControlNode, IntoControlNode, NodeKind};
use chrono::Utc;

/// Chain wrapper that records one [`ChainStep`] per call.
///
/// Chaining semantics are exactly those of [`ControlNode`]; void self-loops
/// are recorded too.
///
/// # Example
///
/// ```rust
/// use control_node::core::{ControlNode, NodeKind};
/// use control_node::history::TracedChain;
///
/// let traced = TracedChain::new(ControlNode::failed(5))
///     .chain(|_: &i32| {})
///     .chain(|_: &i32| {});
///
/// assert!(traced.node().is_void());
/// assert_eq!(
///     traced.history().get_path(),
///     vec![&NodeKind::Failed, &NodeKind::Void, &NodeKind::Void]
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TracedChain<T> {
    node: ControlNode<T>,
    history: ChainHistory,
}

impl<T> TracedChain<T> {
    /// Start tracing from `node` with an empty history.
    pub fn new(node: ControlNode<T>) -> Self {
        Self {
            node,
            history: ChainHistory::new(),
        }
    }

    pub fn chain<F, R>(self, on_success: F) -> Self
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
    {
        let Self { node, history } = self;
        let from = node.kind();
        Self::advance(from, node.chain(on_success), history)
    }

    pub fn chain_with<F, R, G, S>(self, on_success: F, on_failure: G) -> Self
    where
        F: FnOnce(&T) -> R,
        R: IntoControlNode<T>,
        G: FnOnce(&T) -> S,
        S: IntoControlNode<T>,
    {
        let Self { node, history } = self;
        let from = node.kind();
        Self::advance(from, node.chain_with(on_success, on_failure), history)
    }

    /// Nothing is recorded when the call is rejected.
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
        let Self { node, history } = self;
        let from = node.kind();
        let next = node.try_chain(on_success, on_failure)?;
        Ok(Self::advance(from, next, history))
    }

    fn advance(from: NodeKind, node: ControlNode<T>, history: ChainHistory) -> Self {
        let step = ChainStep {
            from,
            to: node.kind(),
            timestamp: Utc::now(),
            step: history.steps().len() + 1,
        };
        Self {
            history: history.record(step),
            node,
        }
    }

    pub fn node(&self) -> &ControlNode<T> {
        &self.node
    }

    pub fn history(&self) -> &ChainHistory {
        &self.history
    }

    pub fn into_parts(self) -> (ControlNode<T>, ChainHistory) {
        (self.node, self.history)
    }
}

impl<T> From<ControlNode<T>> for TracedChain<T> {
    fn from(node: ControlNode<T>) -> Self {
        Self::new(node)
    }
}
