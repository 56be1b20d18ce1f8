//! Chain history tracking.
//!
//! Records how a logical chain moved between node kinds over time. History
//! values are immutable: `record` returns a new history.

mod traced;

pub use traced::TracedChain;

use crate::core::NodeKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single chain call.
///
/// # Example
///
/// ```rust
/// use control_node::core::NodeKind;
/// use control_node::history::ChainStep;
/// use chrono::Utc;
///
/// let step = ChainStep {
///     from: NodeKind::Failed,
///     to: NodeKind::Void,
///     timestamp: Utc::now(),
///     step: 1,
/// };
/// assert!(step.to.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainStep {
    /// Kind of the node `chain` was called on
    pub from: NodeKind,
    /// Kind of the node `chain` returned
    pub to: NodeKind,
    /// When the call returned
    pub timestamp: DateTime<Utc>,
    /// 1-based position of the call in the chain
    pub step: usize,
}

/// Ordered history of chain calls.
///
/// # Example
///
/// ```rust
/// use control_node::core::NodeKind;
/// use control_node::history::{ChainHistory, ChainStep};
/// use chrono::Utc;
///
/// let history = ChainHistory::new()
///     .record(ChainStep {
///         from: NodeKind::Succeeded,
///         to: NodeKind::Failed,
///         timestamp: Utc::now(),
///         step: 1,
///     })
///     .record(ChainStep {
///         from: NodeKind::Failed,
///         to: NodeKind::Void,
///         timestamp: Utc::now(),
///         step: 2,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&NodeKind::Succeeded, &NodeKind::Failed, &NodeKind::Void]);
/// assert!(history.reached_void());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChainHistory {
    steps: Vec<ChainStep>,
}

impl ChainHistory {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, step: ChainStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// Get the node kinds traversed: the first step's `from`, then the
    /// `to` of every step.
    pub fn get_path(&self) -> Vec<&NodeKind> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.from);
        }
        for step in &self.steps {
            path.push(&step.to);
        }
        path
    }

    /// Time between the first and last recorded step.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.steps.first()?, self.steps.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Check if the chain has reached a void terminal.
    pub fn reached_void(&self) -> bool {
        self.steps.iter().any(|step| step.to.is_terminal())
    }

    pub fn steps(&self) -> &[ChainStep] {
        &self.steps
    }
}
