//! Fall-through Chain
//!
//! This example walks one chain through every kind of node.
//!
//! Key concepts:
//! - Plain success branches fall through and keep the original payload
//! - A branch can synthesize a new (rejecting) node
//! - A failure branch that returns nothing leaves a void node
//! - Void nodes absorb every later chain call
//!
//! Run with: cargo run --example fallthrough

use control_node::core::{ControlNode, Outcome};
use control_node::history::TracedChain;

fn not_executed(_: &i32) {
    panic!("Not executed");
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Fall-through Chain Example ===\n");

    let start = ControlNode::new(|| Outcome::Success(5));

    let traced = TracedChain::new(start)
        .chain_with(|val: &i32| println!("5 = {val}"), not_executed)
        .chain(|val: &i32| println!("Fell through to second chain (5 is still {val})"))
        .chain(|val: &i32| {
            println!("Synthesising new (rejecting) node");
            ControlNode::failed(*val)
        })
        .chain_with(not_executed, |val: &i32| {
            println!("Which rejects with value {val} (yet again)")
        })
        .chain_with(not_executed, not_executed);

    let (node, history) = traced.into_parts();

    println!(
        "\nAnd finally we have a {} node with bound result of {}",
        node.kind(),
        node.result()
    );
    let path: Vec<String> = history.get_path().iter().map(|k| k.to_string()).collect();
    println!("Path: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
}
