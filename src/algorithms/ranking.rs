//! Degree ranking ("who is followed the most").
//!
//! Orders nodes by degree descending with identifier ascending as the
//! tie-break, using a max-heap so only the requested prefix is popped.

use crate::graph::{Graph, NodeKey};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Heap entry: higher degree wins, then the smaller identifier.
#[derive(Debug, PartialEq, Eq)]
struct Ranked<'a, T> {
    degree: usize,
    node: Reverse<&'a T>,
}

impl<T: Ord> Ord for Ranked<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree
            .cmp(&other.degree)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl<T: Ord> PartialOrd for Ranked<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The `n` highest-degree nodes, ties broken by identifier ascending.
///
/// `n` is clamped to the node count; `n == 0` yields an empty result.
pub fn follow<T: NodeKey>(graph: &Graph<T>, n: usize) -> Vec<T> {
    let n = n.min(graph.len());
    if n == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Ranked<'_, T>> = graph
        .keys()
        .map(|node| Ranked {
            degree: graph.degree(node),
            node: Reverse(node),
        })
        .collect();

    let mut top = Vec::with_capacity(n);
    while top.len() < n {
        match heap.pop() {
            Some(entry) => top.push(entry.node.0.clone()),
            None => break,
        }
    }
    top
}

/// Convert a signed request count; zero and negative counts ask for nothing.
pub fn clamp_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Full ranking of every node.
pub fn rank_by_degree<T: NodeKey>(graph: &Graph<T>) -> Vec<(T, usize)> {
    follow(graph, graph.len())
        .into_iter()
        .map(|node| {
            let degree = graph.degree(&node);
            (node, degree)
        })
        .collect()
}
