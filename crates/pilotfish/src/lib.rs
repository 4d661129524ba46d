//! Single-source shortest-path algorithms with replayable step traces.
//!
//! Both variants run to completion synchronously and return an
//! [`AlgorithmResult`] whose ordered step sequence an external renderer can
//! replay at any speed, forward or backward. Each step is a frozen value
//! snapshot, so indexing into the sequence at an arbitrary point always
//! shows the state exactly as it was at that instant.

pub use pilotfish_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bellman_ford;
pub mod dijkstra;
pub mod model;
mod tree;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use model::{AlgorithmResult, AlgorithmStep, Distance, Distances, Previous, StepKind};

use crate::graphlib::Graph;

/// The algorithm variants the engine dispatches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
}

impl Algorithm {
    /// Stable id, also accepted by [`Algorithm::from_str`].
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::BellmanFord => "bellman_ford",
        }
    }

    /// Run this variant over `g` from `source`.
    pub fn run(self, g: &Graph, source: &str) -> AlgorithmResult {
        match self {
            Algorithm::Dijkstra => dijkstra(g, source),
            Algorithm::BellmanFord => bellman_ford(g, source),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("No shortest-path algorithm registered for id: {id}")]
pub struct UnknownAlgorithmError {
    pub id: String,
}

impl std::str::FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman_ford" | "bellman-ford" => Ok(Algorithm::BellmanFord),
            _ => Err(UnknownAlgorithmError { id: s.to_string() }),
        }
    }
}
