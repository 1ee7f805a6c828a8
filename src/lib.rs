//! Computes a valid compilation order for a set of source files from their
//! mutual dependency relationships.
//!
//! Build a [`graph::DependencyGraph`] by inserting `(dependent, dependency)`
//! pairs, then call [`graph::DependencyGraph::compute_order`] once to receive
//! either a total order over all files or a [`error::GraphHasCycle`] signal.
//!
//! ```
//! use linkorder::prelude::*;
//!
//! let mut graph = DependencyGraph::new();
//! graph.insert_edge("a", "b").insert_edge("b", "c");
//!
//! let order = graph.compute_order().unwrap();
//! assert_eq!(order.to_string(), "c -> b -> a");
//! ```

pub mod error;
pub mod graph;

/// Prelude of data types and functionality.
pub mod prelude {
    pub use crate::error::GraphHasCycle;
    pub use crate::graph::{BuildOrder, DependencyGraph};
}
