//! Engine value types: distances, step records, run results.
//!
//! Steps are immutable value snapshots. A renderer indexes into the step
//! sequence at arbitrary points, including backward, so every step carries
//! its own frozen copy of the distance and predecessor maps instead of a
//! view of shared state.

use crate::graphlib::Edge;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// A node's tentative distance from the source: finite, or the
/// "unreachable" sentinel.
///
/// The derived order is the selection order: finite distances compare by
/// value and every finite distance sorts before `Infinite`. Serializes
/// untagged, as a bare number or `null` for infinity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, serde::Deserialize,
)]
#[serde(untagged)]
pub enum Distance {
    Finite(i64),
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Distance after traversing an edge of the given weight. Infinity
    /// absorbs any weight.
    pub fn plus(self, weight: i64) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight)),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Distance per node id, in caller-supplied node order.
pub type Distances = IndexMap<String, Distance>;

/// Predecessor per node id, in caller-supplied node order. `None` marks the
/// source and unreachable nodes.
pub type Previous = IndexMap<String, Option<String>>;

/// What a step records. Closed so a renderer's exhaustive `match` is
/// checked at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Initial,
    Select,
    Relax,
    Update,
    Complete,
    NegativeCycle,
}

/// One frozen snapshot of the computation at a meaningful instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmStep {
    pub kind: StepKind,
    /// Selection round (Dijkstra) or relaxation pass (Bellman-Ford) the
    /// step belongs to; 0 for the `initial` step.
    pub iteration: usize,
    /// Node under examination, when the step concerns one.
    pub node: Option<String>,
    /// Edge under examination, when the step concerns one.
    pub edge: Option<Edge>,
    pub distances: Distances,
    pub previous: Previous,
    /// Ids whose distance changed in this step.
    pub updated: Vec<String>,
    pub message: String,
}

impl AlgorithmStep {
    pub(crate) fn snapshot(
        kind: StepKind,
        iteration: usize,
        distances: &Distances,
        previous: &Previous,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            iteration,
            node: None,
            edge: None,
            distances: distances.clone(),
            previous: previous.clone(),
            updated: Vec::new(),
            message: message.into(),
        }
    }
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmResult {
    pub distances: Distances,
    pub previous: Previous,
    pub steps: Vec<AlgorithmStep>,
    pub has_negative_cycle: bool,
    pub shortest_path_tree: Vec<Edge>,
}

impl AlgorithmResult {
    /// Nodes along the shortest path from the source to `target`,
    /// source-first.
    ///
    /// `None` when the target is unknown or unreachable, or when the run
    /// detected a negative cycle (the predecessor map may then contain a
    /// cycle, so there is no tree to walk).
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if self.has_negative_cycle {
            return None;
        }
        if !self.distances.get(target)?.is_finite() {
            return None;
        }
        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(prev) = self.previous.get(current)?.as_deref() {
            if path.len() > self.previous.len() {
                return None;
            }
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}
