//! Core node types and chaining logic.
//!
//! This module contains the whole combinator:
//! - State tags and settlement outcomes
//! - The `ControlNode` value and its `chain` rules
//! - The conversion capability branches use to hand back a node
//!
//! Everything here is synchronous. Branches run inline and `chain` returns
//! only after they do.

mod chainable;
mod error;
mod node;
mod settle;
mod state;

pub use chainable::{Chainable, IntoControlNode};
pub use error::ControlError;
pub use node::ControlNode;
pub use settle::Settler;
pub use state::{NodeKind, NodeState, Outcome};
