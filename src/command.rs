//! Line-oriented command scripts.
//!
//! Each non-blank line holds one command: `Add u v`, `Find u`, `Follow n`,
//! `Clique` or `Compact`. A [`Session`] owns the graph, applies commands in
//! order and renders each result either as text or as one JSON object per line.

use crate::algorithms::{clamp_count, Clique};
use crate::error::{CommandError, GraphError};
use crate::graph::{AdjacencyEntry, Graph};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String, String),
    Find(String),
    Follow(usize),
    Clique,
    Compact,
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        let arity = |command: &'static str, expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(CommandError::WrongArity {
                    command,
                    expected,
                    found: args.len(),
                })
            }
        };

        match name {
            "Add" => {
                arity("Add", 2)?;
                Ok(Command::Add(args[0].to_string(), args[1].to_string()))
            }
            "Find" => {
                arity("Find", 1)?;
                Ok(Command::Find(args[0].to_string()))
            }
            "Follow" => {
                arity("Follow", 1)?;
                let n: i64 = args[0]
                    .parse()
                    .map_err(|_| CommandError::InvalidCount(args[0].to_string()))?;
                Ok(Command::Follow(clamp_count(n)))
            }
            "Clique" => {
                arity("Clique", 0)?;
                Ok(Command::Clique)
            }
            "Compact" => {
                arity("Compact", 0)?;
                Ok(Command::Compact)
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    #[serde(rename = "added")]
    Added,
    #[serde(rename = "find")]
    Found(bool),
    #[serde(rename = "follow")]
    Followed(Vec<String>),
    #[serde(rename = "cliques")]
    Cliques(Vec<Clique<String>>),
    #[serde(rename = "adjacency")]
    Compacted(Vec<AdjacencyEntry<String>>),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added => Ok(()),
            Outcome::Found(true) => writeln!(f, "Yes"),
            Outcome::Found(false) => writeln!(f, "No"),
            Outcome::Followed(nodes) => nodes.iter().try_for_each(|n| writeln!(f, "{}", n)),
            Outcome::Cliques(cliques) => cliques.iter().try_for_each(|c| {
                let members: Vec<&str> = c.iter().map(String::as_str).collect();
                writeln!(f, "{}", members.join(" "))
            }),
            Outcome::Compacted(rows) => {
                for row in rows {
                    writeln!(f, "{}", row)?;
                }
                writeln!(f)
            }
        }
    }
}

/// How a session writes outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Counters for one script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub executed: usize,
    pub rejected: usize,
    pub failed: usize,
}

/// A graph plus the command loop driving it.
#[derive(Debug, Default)]
pub struct Session {
    graph: Graph<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// Apply one command to the graph.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, GraphError> {
        let outcome = match command {
            Command::Add(u, v) => {
                self.graph.add(u, v);
                Outcome::Added
            }
            Command::Find(u) => Outcome::Found(self.graph.find(&u)?),
            Command::Follow(n) => Outcome::Followed(self.graph.follow(n)),
            Command::Clique => Outcome::Cliques(self.graph.clique()),
            Command::Compact => {
                self.graph.compact();
                Outcome::Compacted(self.graph.adjacency())
            }
        };
        Ok(outcome)
    }

    /// Run every line of `input`, writing results to `out`.
    ///
    /// Malformed lines and failed commands are logged and skipped; only I/O
    /// errors abort the run.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut out: W,
        format: OutputFormat,
    ) -> io::Result<RunStats> {
        let mut stats = RunStats::default();

        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("line {}: {}", idx + 1, e);
                    stats.rejected += 1;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(outcome) => {
                    stats.executed += 1;
                    write_outcome(&mut out, &outcome, format)?;
                }
                Err(e) => {
                    log::error!("line {}: {}", idx + 1, e);
                    stats.failed += 1;
                }
            }
        }

        out.flush()?;
        Ok(stats)
    }
}

fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome, format: OutputFormat) -> io::Result<()> {
    match (format, outcome) {
        (_, Outcome::Added) => Ok(()),
        (OutputFormat::Text, _) => write!(out, "{}", outcome),
        (OutputFormat::Json, _) => {
            serde_json::to_writer(&mut *out, outcome)?;
            writeln!(out)
        }
    }
}
