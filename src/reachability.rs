//! Reachability queries.
//!
//! Traversals start from a fixed node (the smallest identifier) so results
//! are reproducible regardless of hash ordering.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeKey};
use std::collections::HashSet;

/// Node every whole-graph traversal starts from.
pub fn traversal_start<T: NodeKey>(graph: &Graph<T>) -> Result<&T> {
    graph.first_node().ok_or(GraphError::EmptyGraph)
}

/// Find all nodes reachable from source (iterative DFS).
/// Returns nodes in visit order, including the source. Unknown sources
/// yield an empty result; an empty graph is [`GraphError::EmptyGraph`].
pub fn reachable_from<T: NodeKey>(graph: &Graph<T>, source: &T) -> Result<Vec<T>> {
    traversal_start(graph)?;
    if !graph.contains(source) {
        return Ok(Vec::new());
    }

    let mut visited: HashSet<&T> = HashSet::new();
    let mut stack = vec![source];
    let mut result = Vec::new();

    while let Some(v) = stack.pop() {
        if !visited.insert(v) {
            continue;
        }
        result.push(v.clone());
        // Reverse so the first-inserted neighbor is explored first
        for w in graph.neighbors_slice(v).iter().rev() {
            if !visited.contains(w) {
                stack.push(w);
            }
        }
    }

    Ok(result)
}

/// Whether `target` is reached by a DFS from the traversal start node.
///
/// Stops as soon as the target is popped. Fails with
/// [`GraphError::EmptyGraph`] when there is nothing to traverse.
pub fn find<T: NodeKey>(graph: &Graph<T>, target: &T) -> Result<bool> {
    let start = traversal_start(graph)?;

    let mut visited: HashSet<&T> = HashSet::new();
    let mut stack = vec![start];

    while let Some(v) = stack.pop() {
        if v == target {
            return Ok(true);
        }
        if visited.insert(v) {
            stack.extend(graph.neighbors_slice(v).iter().filter(|w| !visited.contains(w)));
        }
    }

    Ok(false)
}
