//! Control Node: a synchronous success/failure chaining combinator
//!
//! A [`ControlNode`] is settled once, as succeeded or failed, and carries a
//! single payload. `chain` sequences the next computation onto it. Failure
//! short-circuits by default: a failed node whose failure path yields no
//! further node becomes *void*, and a void node absorbs every later call.
//!
//! # Core Concepts
//!
//! - **Node**: Immutable outcome of one stage, see [`core::ControlNode`]
//! - **Chainable**: Branch return values that hand the chain a new node,
//!   see [`core::IntoControlNode`]
//! - **History**: Optional record of the kinds a chain moved through
//!
//! # Example
//!
//! ```rust
//! use control_node::core::{ControlNode, NodeKind};
//!
//! let node = ControlNode::succeeded(5)
//!     .chain(|v: &i32| println!("5 = {v}"))
//!     .chain(|v: &i32| ControlNode::failed(*v))
//!     .chain_with(|_: &i32| {}, |v: &i32| println!("rejected with {v}"))
//!     .chain(|_: &i32| ControlNode::succeeded(0));
//!
//! assert_eq!(node.kind(), NodeKind::Void);
//! assert_eq!(*node.result(), 5);
//! ```

pub mod core;
pub mod history;

// Re-export commonly used types
pub use crate::core::{Chainable, ControlError, ControlNode, IntoControlNode, NodeKind, NodeState, Outcome};
pub use crate::history::{ChainHistory, ChainStep, TracedChain};
