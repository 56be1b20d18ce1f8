//! Callback-style settlement for nodes.

use super::error::ControlError;
use super::state::{NodeState, Outcome};

/// Write-once slot handed to a [`ControlNode::settle`] initializer.
///
/// Exactly one of [`resolve`](Settler::resolve) or [`reject`](Settler::reject)
/// must succeed before the initializer returns. A second settlement is
/// refused and remembered, so construction fails even if the initializer
/// discards the error.
///
/// [`ControlNode::settle`]: crate::core::ControlNode::settle
#[derive(Debug)]
pub struct Settler<T> {
    outcome: Option<Outcome<T>>,
    double_settled: Option<NodeState>,
}

impl<T> Settler<T> {
    pub(crate) fn new() -> Self {
        Self {
            outcome: None,
            double_settled: None,
        }
    }

    /// Settle the node as succeeded.
    pub fn resolve(&mut self, value: T) -> Result<(), ControlError> {
        self.settle(Outcome::Success(value))
    }

    /// Settle the node as failed.
    pub fn reject(&mut self, value: T) -> Result<(), ControlError> {
        self.settle(Outcome::Failure(value))
    }

    /// Check if a settlement has been recorded.
    pub fn is_settled(&self) -> bool {
        self.outcome.is_some()
    }

    fn settle(&mut self, outcome: Outcome<T>) -> Result<(), ControlError> {
        if let Some(previous) = &self.outcome {
            let previous = previous.state();
            self.double_settled = Some(previous);
            return Err(ControlError::AlreadySettled { previous });
        }
        self.outcome = Some(outcome);
        Ok(())
    }

    /// Take the single recorded settlement.
    ///
    /// Fails if nothing was settled, or if settlement was attempted more
    /// than once.
    pub(crate) fn finish(self) -> Result<Outcome<T>, ControlError> {
        if let Some(previous) = self.double_settled {
            return Err(ControlError::AlreadySettled { previous });
        }
        self.outcome.ok_or(ControlError::Unsettled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_settler_is_unsettled() {
        let settler: Settler<i32> = Settler::new();
        assert!(!settler.is_settled());
        assert_eq!(settler.finish().unwrap_err(), ControlError::Unsettled);
    }

    #[test]
    fn resolve_records_success() {
        let mut settler = Settler::new();
        settler.resolve(5).unwrap();

        assert!(settler.is_settled());
        assert_eq!(settler.finish(), Ok(Outcome::Success(5)));
    }

    #[test]
    fn second_settlement_is_rejected() {
        let mut settler = Settler::new();
        settler.reject(1).unwrap();

        let err = settler.resolve(2).unwrap_err();
        assert_eq!(
            err,
            ControlError::AlreadySettled {
                previous: NodeState::Failed
            }
        );
    }

    #[test]
    fn ignored_second_settlement_still_fails_finish() {
        let mut settler = Settler::new();
        settler.resolve(1).unwrap();
        let _ = settler.reject(2);

        assert_eq!(
            settler.finish().unwrap_err(),
            ControlError::AlreadySettled {
                previous: NodeState::Succeeded
            }
        );
    }
}
