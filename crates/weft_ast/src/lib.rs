//! weft_ast: AST node definitions for binding expressions.
//!
//! Nodes are immutable, allocated into a caller-owned arena, and reference
//! child nodes via arena references. The runtime evaluator and observer
//! machinery consume these nodes; nothing here evaluates anything.

mod node;

pub use node::*;
