use clique_graph::advanced::external_neighbors;
use clique_graph::algorithms::{is_clique, is_maximal};
use clique_graph::{Graph, GraphError, MIN_CLIQUE_SIZE};
use std::collections::BTreeSet;

fn graph(edges: &[(&str, &str)]) -> Graph<String> {
    let mut g = Graph::new();
    for (u, v) in edges {
        g.add(u.to_string(), v.to_string());
    }
    g
}

fn set(nodes: &[&str]) -> BTreeSet<String> {
    nodes.iter().map(|s| s.to_string()).collect()
}

fn s(x: &str) -> String {
    x.to_string()
}

/// Small social graph: two overlapping friend groups and a few loose ties.
fn sample() -> Graph<String> {
    graph(&[
        ("ana", "bob"),
        ("ana", "cid"),
        ("ana", "dee"),
        ("bob", "cid"),
        ("bob", "dee"),
        ("cid", "dee"),
        ("dee", "eve"),
        ("eve", "fay"),
        ("fay", "dee"),
        ("fay", "gus"),
        ("hal", "ivy"),
    ])
}

#[test]
fn test_add_idempotent_and_symmetric() {
    let pairs = [("a", "b"), ("b", "c"), ("c", "a"), ("c", "d")];
    let mut once = Graph::new();
    let mut twice = Graph::new();
    for (u, v) in pairs {
        once.add(s(u), s(v));
        twice.add(s(u), s(v));
        twice.add(s(u), s(v));
    }
    assert_eq!(once, twice);

    for (u, v) in pairs {
        assert!(once.neighbors(&s(u)).contains(v));
        assert!(once.neighbors(&s(v)).contains(u));
    }
}

#[test]
fn test_find_matches_component_of_start() {
    let g = sample();
    // Start node is "ana"; hal and ivy sit in their own component
    for node in ["ana", "bob", "cid", "dee", "eve", "fay", "gus"] {
        assert_eq!(g.find(&s(node)), Ok(true), "{} should be reachable", node);
    }
    assert_eq!(g.find(&s("hal")), Ok(false));
    assert_eq!(g.find(&s("ivy")), Ok(false));
    assert_eq!(g.find(&s("nobody")), Ok(false));
}

#[test]
fn test_find_empty_graph_errors() {
    let g: Graph<String> = Graph::new();
    assert_eq!(g.find(&s("a")), Err(GraphError::EmptyGraph));
}

#[test]
fn test_self_loop_policy() {
    let mut g: Graph<String> = Graph::new();
    g.add(s("x"), s("x"));
    assert_eq!(g.len(), 1);
    assert_eq!(g.degree(&s("x")), 0);
    assert_eq!(g.find(&s("x")), Ok(true));
    assert!(g.clique().is_empty());
}

#[test]
fn test_follow_ranking() {
    let g = sample();
    let ranked = g.follow(g.len());
    assert_eq!(ranked.len(), g.len());
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (da, db) = (g.degree(a), g.degree(b));
        assert!(da > db || (da == db && a < b), "{} before {}", a, b);
    }
    assert_eq!(g.follow(1), vec![s("dee")]);
    assert_eq!(g.follow(0), Vec::<String>::new());
    assert_eq!(g.follow(1000).len(), g.len());
}

#[test]
fn test_follow_example() {
    // A:3, B:3, C:1
    let g = graph(&[("A", "B"), ("A", "X"), ("A", "Y"), ("B", "C"), ("B", "Z")]);
    assert_eq!(g.follow(2), vec![s("A"), s("B")]);
}

#[test]
fn test_clique_validity() {
    let g = sample();
    let cliques = g.clique();
    assert_eq!(
        cliques,
        vec![set(&["ana", "bob", "cid", "dee"]), set(&["dee", "eve", "fay"])]
    );
    for c in &cliques {
        assert!(c.len() >= MIN_CLIQUE_SIZE);
        assert!(is_clique(&g, c));
        assert!(is_maximal(&g, c));
        for other in &cliques {
            assert!(c == other || !c.is_subset(other));
        }
    }
}

#[test]
fn test_compaction_soundness() {
    let mut g = sample();
    let big = set(&["ana", "bob", "cid", "dee"]);
    let expected = external_neighbors(&g, &big);
    assert_eq!(expected, set(&["eve", "fay"]));

    g.compact();

    for member in &big {
        assert!(!g.contains(member));
    }
    assert_eq!(g.neighbors(&s("Component 1")), expected);
    // {dee, eve, fay} lost dee to the larger group and is left alone
    assert!(!g.contains(&s("Component 2")));
    assert_eq!(g.neighbors(&s("eve")), set(&["fay", "Component 1"]));
    assert_eq!(g.neighbors(&s("hal")), set(&["ivy"]));
    assert!(g.clique().iter().all(|c| c.contains("Component 1")));
}

#[test]
fn test_compaction_example() {
    let mut g = graph(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D")]);
    assert_eq!(g.clique(), vec![set(&["A", "B", "C"])]);

    g.compact();
    assert_eq!(g.nodes(), set(&["Component 1", "D"]));
    assert_eq!(g.neighbors(&s("Component 1")), set(&["D"]));
    assert_eq!(g.neighbors(&s("D")), set(&["Component 1"]));
}

#[test]
fn test_generic_identifiers() {
    let mut g: Graph<char> = Graph::new();
    for (u, v) in [('a', 'b'), ('b', 'c'), ('c', 'a'), ('c', 'd')] {
        g.add(u, v);
    }
    assert_eq!(g.find(&'d'), Ok(true));
    assert_eq!(g.follow(1), vec!['c']);
    assert_eq!(g.clique(), vec![BTreeSet::from(['a', 'b', 'c'])]);
}
