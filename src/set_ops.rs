//! Set algebra over ordered node sets.
//!
//! Each operation walks both inputs once in sorted order and returns a
//! fresh set, so results are deterministic and inputs are never touched.

use std::collections::BTreeSet;

/// Nodes in `a`, `b`, or both.
pub fn union<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.union(b).cloned().collect()
}

/// Nodes in both `a` and `b`.
pub fn intersection<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.intersection(b).cloned().collect()
}

/// Nodes in `a` but not in `b`.
pub fn difference<T: Ord + Clone>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T> {
    a.difference(b).cloned().collect()
}
