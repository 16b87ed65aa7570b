//! Advanced graph operations.
//!
//! Higher-level algorithms built on core graph primitives.

pub mod compact;

pub use compact::{compact, external_neighbors, ComponentLabel};
