//! Maximal clique enumeration (Bron-Kerbosch backtracking, no pivoting).
//!
//! The search threads three sets through each call:
//! - `r`: the clique built so far
//! - `p`: candidates that are adjacent to every node in `r`
//! - `x`: nodes already explored at this level, adjacent to all of `r`
//!
//! Every call owns its sets. The candidate loop walks a snapshot of `p`
//! while the live `p` and `x` are updated between iterations.

use crate::graph::{Graph, NodeKey};
use crate::set_ops::{difference, intersection, union};
use std::collections::BTreeSet;

/// A clique as an ordered set of node identifiers.
pub type Clique<T> = BTreeSet<T>;

/// Cliques with this many nodes or fewer are not reported.
pub const MIN_CLIQUE_SIZE: usize = 3;

/// Enumerate every maximal clique with at least [`MIN_CLIQUE_SIZE`] nodes.
///
/// Results come out in search order, which is deterministic because all
/// sets are ordered.
pub fn maximal_cliques<T: NodeKey>(graph: &Graph<T>) -> Vec<Clique<T>> {
    let mut cliques = Vec::new();
    search(graph, BTreeSet::new(), graph.nodes(), BTreeSet::new(), &mut cliques);
    log::debug!("found {} maximal cliques in {} nodes", cliques.len(), graph.len());
    cliques
}

fn search<T: NodeKey>(
    graph: &Graph<T>,
    r: BTreeSet<T>,
    mut p: BTreeSet<T>,
    mut x: BTreeSet<T>,
    cliques: &mut Vec<Clique<T>>,
) {
    if p.is_empty() && x.is_empty() {
        if r.len() >= MIN_CLIQUE_SIZE {
            cliques.push(r);
        }
        return;
    }

    let snapshot: Vec<T> = p.iter().cloned().collect();
    for v in snapshot {
        let single = BTreeSet::from([v.clone()]);
        let neighbors = graph.neighbors(&v);

        search(
            graph,
            union(&r, &single),
            intersection(&p, &neighbors),
            intersection(&x, &neighbors),
            cliques,
        );

        p = difference(&p, &single);
        x = union(&x, &single);
    }
}

/// Whether every pair of distinct nodes in `nodes` is adjacent.
pub fn is_clique<T: NodeKey>(graph: &Graph<T>, nodes: &Clique<T>) -> bool {
    nodes.iter().all(|u| {
        let neighbors = graph.neighbors(u);
        nodes.iter().all(|v| u == v || neighbors.contains(v))
    })
}

/// Whether `nodes` is a clique no outside node could extend.
pub fn is_maximal<T: NodeKey>(graph: &Graph<T>, nodes: &Clique<T>) -> bool {
    if !is_clique(graph, nodes) {
        return false;
    }
    let Some(first) = nodes.iter().next() else {
        return graph.is_empty();
    };
    // Any extension must be a neighbor of every member, in particular the first.
    difference(&graph.neighbors(first), nodes)
        .iter()
        .all(|candidate| !nodes.iter().all(|m| graph.neighbors(m).contains(candidate)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> Graph<String> {
        let mut g = Graph::new();
        for (u, v) in edges {
            g.add(u.to_string(), v.to_string());
        }
        g
    }

    fn clique(nodes: &[&str]) -> Clique<String> {
        nodes.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<String> = Graph::new();
        assert!(maximal_cliques(&g).is_empty());
    }

    #[test]
    fn test_triangle_with_tail() {
        //   A
        //  / \
        // B - C - D
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
        assert_eq!(maximal_cliques(&g), vec![clique(&["A", "B", "C"])]);
    }

    #[test]
    fn test_small_cliques_suppressed() {
        // a - b - c (path), e (self-loop only)
        let g = graph(&[("a", "b"), ("b", "c"), ("e", "e")]);
        assert!(maximal_cliques(&g).is_empty());
    }

    #[test]
    fn test_k4_reports_once() {
        let g = graph(&[
            ("a", "b"),
            ("a", "c"),
            ("a", "d"),
            ("b", "c"),
            ("b", "d"),
            ("c", "d"),
        ]);
        // No triangle subsets, only the maximal set
        assert_eq!(maximal_cliques(&g), vec![clique(&["a", "b", "c", "d"])]);
    }

    #[test]
    fn test_overlapping_cliques() {
        // Two triangles sharing edge b - c
        //   a
        //  / \
        // b - c
        //  \ /
        //   d
        let g = graph(&[("a", "b"), ("a", "c"), ("b", "c"), ("b", "d"), ("c", "d")]);
        let found = maximal_cliques(&g);
        assert_eq!(found, vec![clique(&["a", "b", "c"]), clique(&["b", "c", "d"])]);
    }

    #[test]
    fn test_cliques_are_valid_and_maximal() {
        // K4 on 1..4, triangle 4-5-6, triangle 6-7-8, bridge 8-9
        let mut g: Graph<u32> = Graph::new();
        for (u, v) in [
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
            (4, 5),
            (5, 6),
            (4, 6),
            (6, 7),
            (7, 8),
            (6, 8),
            (8, 9),
        ] {
            g.add(u, v);
        }

        let found = maximal_cliques(&g);
        assert_eq!(found.len(), 3);
        for c in &found {
            assert!(c.len() >= MIN_CLIQUE_SIZE);
            assert!(is_clique(&g, c));
            assert!(is_maximal(&g, c));
        }
        for a in &found {
            for b in &found {
                if a != b {
                    assert!(!a.is_subset(b));
                }
            }
        }
    }

    #[test]
    fn test_enumeration_leaves_graph_untouched() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a")]);
        let before = g.clone();
        let _ = maximal_cliques(&g);
        assert_eq!(g, before);
    }

    #[test]
    fn test_is_clique() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
        assert!(is_clique(&g, &clique(&["a", "b", "c"])));
        assert!(!is_clique(&g, &clique(&["a", "b", "d"])));
        assert!(is_clique(&g, &clique(&["a"])));
    }

    #[test]
    fn test_is_maximal() {
        let g = graph(&[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")]);
        assert!(is_maximal(&g, &clique(&["a", "b", "c"])));
        // Extendable by c
        assert!(!is_maximal(&g, &clique(&["a", "b"])));
        assert!(is_maximal(&g, &clique(&["c", "d"])));
    }

    #[test]
    fn test_deterministic() {
        let g = graph(&[
            ("p", "q"),
            ("q", "r"),
            ("r", "p"),
            ("r", "s"),
            ("s", "t"),
            ("t", "r"),
        ]);
        let first = maximal_cliques(&g);
        assert_eq!(first, maximal_cliques(&g));
        assert_eq!(first, vec![clique(&["p", "q", "r"]), clique(&["r", "s", "t"])]);
    }
}
