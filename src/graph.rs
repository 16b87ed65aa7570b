//! Adjacency-list storage for undirected graphs.
//!
//! Nodes are created lazily the first time an edge mentions them. Every edge
//! is stored twice, once in each endpoint's list, and lists never hold
//! duplicates.

use crate::advanced::compact::{self, ComponentLabel};
use crate::algorithms::{clique, ranking, Clique};
use crate::error::Result;
use crate::reachability;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hash;

/// Bound shared by every node identifier: identity, ordering for
/// tie-breaks, and hashing for the adjacency map.
pub trait NodeKey: Ord + Hash + Clone + fmt::Debug {}

impl<T: Ord + Hash + Clone + fmt::Debug> NodeKey for T {}

/// One row of the adjacency listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyEntry<T> {
    pub node: T,
    pub neighbors: Vec<T>,
}

/// Undirected graph keyed by node identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<T: NodeKey> {
    adjacency: HashMap<T, Vec<T>>,
}

impl<T: NodeKey> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NodeKey> Graph<T> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Register `node` with an empty adjacency list if it is not present yet.
    pub fn insert_node(&mut self, node: T) {
        self.adjacency.entry(node).or_default();
    }

    /// Connect `u` and `v`, creating either node on first reference.
    ///
    /// Adding an existing edge is a no-op. Self-loops are not stored: the node
    /// is registered but its adjacency is left unchanged.
    pub fn add(&mut self, u: T, v: T) {
        if u == v {
            log::warn!("ignoring self-loop on {:?}", u);
            self.insert_node(u);
            return;
        }

        let adj_u = self.adjacency.entry(u.clone()).or_default();
        if !adj_u.contains(&v) {
            adj_u.push(v.clone());
        }

        let adj_v = self.adjacency.entry(v).or_default();
        if !adj_v.contains(&u) {
            adj_v.push(u);
        }
    }

    /// Number of neighbors of `node`, zero if absent.
    pub fn degree(&self, node: &T) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    /// Neighbors in insertion order.
    pub fn neighbors_slice(&self, node: &T) -> &[T] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbors of `node` as an ordered set; empty if absent.
    pub fn neighbors(&self, node: &T) -> BTreeSet<T> {
        self.neighbors_slice(node).iter().cloned().collect()
    }

    /// All node identifiers, ascending.
    pub fn nodes(&self) -> BTreeSet<T> {
        self.adjacency.keys().cloned().collect()
    }

    /// Node identifiers in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &T> {
        self.adjacency.keys()
    }

    /// Smallest node identifier, if any.
    pub fn first_node(&self) -> Option<&T> {
        self.adjacency.keys().min()
    }

    /// Delete `node` and every edge touching it. No-op if absent.
    pub fn remove_node(&mut self, node: &T) {
        let Some(neighbors) = self.adjacency.remove(node) else {
            return;
        };
        for n in &neighbors {
            if let Some(adj) = self.adjacency.get_mut(n) {
                adj.retain(|x| x != node);
            }
        }
    }

    /// Adjacency rows in ascending node order; neighbors keep insertion order.
    pub fn adjacency(&self) -> Vec<AdjacencyEntry<T>> {
        let mut rows: Vec<AdjacencyEntry<T>> = self
            .adjacency
            .iter()
            .map(|(node, neighbors)| AdjacencyEntry {
                node: node.clone(),
                neighbors: neighbors.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.node.cmp(&b.node));
        rows
    }
}

// Query surface; the algorithms live in their own modules.
impl<T: NodeKey> Graph<T> {
    /// See [`reachability::find`].
    pub fn find(&self, node: &T) -> Result<bool> {
        reachability::find(self, node)
    }

    /// See [`ranking::follow`].
    pub fn follow(&self, n: usize) -> Vec<T> {
        ranking::follow(self, n)
    }

    /// See [`clique::maximal_cliques`].
    pub fn clique(&self) -> Vec<Clique<T>> {
        clique::maximal_cliques(self)
    }
}

impl<T: ComponentLabel> Graph<T> {
    /// See [`compact::compact`].
    pub fn compact(&mut self) {
        compact::compact(self)
    }
}

impl<T: fmt::Display> fmt::Display for AdjacencyEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [ ", self.node)?;
        for n in &self.neighbors {
            write!(f, "{} ", n)?;
        }
        write!(f, "]")
    }
}

impl<T: NodeKey + fmt::Display> fmt::Display for Graph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adjacency() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
