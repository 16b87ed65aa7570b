//! JavaScript-facing graph handle.
//!
//! Wraps a `Graph<String>` so the browser can build a graph incrementally and
//! run the same queries as the command-line tool.

use crate::algorithms::clamp_count;
use crate::graph::Graph;
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Undirected graph over string identifiers, exported to JS.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct CliqueGraph {
    inner: Graph<String>,
}

#[wasm_bindgen]
impl CliqueGraph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CliqueGraph {
        CliqueGraph::default()
    }

    /// Number of nodes.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.inner.len()
    }

    /// Number of undirected edges.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn add(&mut self, u: &str, v: &str) {
        self.inner.add(u.to_string(), v.to_string());
    }

    /// Throws when the graph is empty.
    pub fn find(&self, node: &str) -> Result<bool, JsError> {
        self.inner
            .find(&node.to_string())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Top `n` nodes by degree as an array of strings; `n <= 0` gives `[]`.
    pub fn follow(&self, n: i32) -> Array {
        self.inner
            .follow(clamp_count(n.into()))
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Maximal cliques as `string[][]`.
    pub fn clique(&self) -> Result<JsValue, JsError> {
        let cliques: Vec<Vec<String>> = self
            .inner
            .clique()
            .into_iter()
            .map(|c| c.into_iter().collect())
            .collect();
        serde_wasm_bindgen::to_value(&cliques).map_err(|e| JsError::new(&e.to_string()))
    }

    pub fn compact(&mut self) {
        self.inner.compact();
    }

    /// Adjacency rows as `{ node, neighbors }[]`.
    pub fn adjacency(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.adjacency())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Adjacency rows serialized to a JSON string.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.adjacency()).map_err(|e| JsError::new(&e.to_string()))
    }
}
