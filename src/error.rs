//! Error types for graph queries and command parsing.

use thiserror::Error;

/// Errors raised by graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A traversal was requested on a graph with no nodes.
    #[error("graph is empty")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {expected} argument(s), got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`Follow` count must be an integer, got `{0}`")]
    InvalidCount(String),
}
