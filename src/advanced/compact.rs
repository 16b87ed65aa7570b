//! Clique compaction.
//!
//! Collapses each maximal clique into one synthetic node that inherits the
//! clique's external adjacency. Larger cliques are contracted first; a node
//! shared with a smaller clique is removed from that clique before it is
//! considered, which may drop it below the reporting threshold.

use crate::algorithms::clique::{maximal_cliques, Clique, MIN_CLIQUE_SIZE};
use crate::graph::{Graph, NodeKey};
use crate::set_ops::{difference, union};
use std::collections::BTreeSet;

/// Node identifiers that can name a synthetic component node.
pub trait ComponentLabel: NodeKey {
    /// Identifier for the `index`-th component of a compaction run (1-based).
    fn component(index: usize) -> Self;
}

impl ComponentLabel for String {
    fn component(index: usize) -> Self {
        format!("Component {}", index)
    }
}

/// Neighbors of any clique member that are not members themselves.
pub fn external_neighbors<T: NodeKey>(graph: &Graph<T>, clique: &Clique<T>) -> BTreeSet<T> {
    let all = clique
        .iter()
        .fold(BTreeSet::new(), |acc, member| union(&acc, &graph.neighbors(member)));
    difference(&all, clique)
}

/// Contract every maximal clique of the graph in place.
pub fn compact<T: ComponentLabel>(graph: &mut Graph<T>) {
    let mut pending = maximal_cliques(graph);
    sort_largest_last(&mut pending);

    let mut counter = 0;
    while let Some(clique) = pending.pop() {
        if clique.len() >= MIN_CLIQUE_SIZE {
            counter = contract(graph, &clique, counter);
        } else {
            log::debug!("skipping {:?}: shrunk below {} nodes", clique, MIN_CLIQUE_SIZE);
        }

        for other in pending.iter_mut() {
            *other = difference(other, &clique);
        }
        sort_largest_last(&mut pending);
    }
}

/// Replace `clique` with a fresh component node. Returns the updated counter.
fn contract<T: ComponentLabel>(graph: &mut Graph<T>, clique: &Clique<T>, counter: usize) -> usize {
    let external = external_neighbors(graph, clique);
    // Pick the label while members are still present so none of them is reused
    let (label, counter) = next_label(graph, counter);
    log::debug!("contracting {:?} into {:?}", clique, label);

    for member in clique {
        graph.remove_node(member);
    }

    graph.insert_node(label.clone());
    for neighbor in external {
        graph.add(label.clone(), neighbor);
    }
    counter
}

/// Next component label not already used by a node in the graph.
fn next_label<T: ComponentLabel>(graph: &Graph<T>, mut counter: usize) -> (T, usize) {
    loop {
        counter += 1;
        let label = T::component(counter);
        if !graph.contains(&label) {
            return (label, counter);
        }
    }
}

/// Size descending from the back, ties broken by set order ascending.
fn sort_largest_last<T: Ord>(cliques: &mut [Clique<T>]) {
    cliques.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)));
}
