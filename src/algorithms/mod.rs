//! Core graph algorithms.

pub mod clique;
pub mod ranking;

pub use clique::{is_clique, is_maximal, maximal_cliques, Clique, MIN_CLIQUE_SIZE};
pub use ranking::{clamp_count, follow, rank_by_degree};
