//! Undirected graph analysis with maximal clique compaction.
//!
//! This crate stores an undirected graph over arbitrary ordered, hashable
//! identifiers and answers reachability, degree ranking and maximal clique
//! queries. Compaction collapses each maximal clique into a synthetic
//! `Component <k>` node, giving shared nodes to the larger clique.
//!
//! ```
//! use clique_graph::Graph;
//!
//! let mut g: Graph<String> = Graph::new();
//! for (u, v) in [("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")] {
//!     g.add(u.to_string(), v.to_string());
//! }
//! assert_eq!(g.clique().len(), 1);
//!
//! g.compact();
//! assert!(g.contains(&"Component 1".to_string()));
//! ```

use wasm_bindgen::prelude::*;

pub mod advanced;
pub mod algorithms;
pub mod bindings;
pub mod command;
pub mod error;
pub mod graph;
pub mod reachability;
pub mod set_ops;

pub use advanced::ComponentLabel;
pub use algorithms::{Clique, MIN_CLIQUE_SIZE};
pub use bindings::CliqueGraph;
pub use command::{Command, Outcome, OutputFormat, Session};
pub use error::{CommandError, GraphError};
pub use graph::{AdjacencyEntry, Graph, NodeKey};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the crate version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
