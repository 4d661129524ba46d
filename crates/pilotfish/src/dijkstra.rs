//! Dijkstra's algorithm with a replayable step trace.
//!
//! Selection is a linear scan over caller-supplied node order rather than a
//! priority queue. For graphs small enough to animate, the scan keeps the
//! tie-break rule trivially deterministic: among unvisited nodes with the
//! smallest finite distance, the first one in caller order wins.

use crate::graphlib::{Edge, Graph};
use crate::model::{AlgorithmResult, AlgorithmStep, Distance, Distances, Previous, StepKind};
use crate::tree::shortest_path_tree;
use rustc_hash::FxHashSet as HashSet;

/// Run Dijkstra from `source`, recording every observable state change.
///
/// Assumes non-negative weights (the textbook precondition). The
/// precondition is not validated; negative weights yield unspecified
/// results.
#[tracing::instrument(skip(g), fields(source = %source, nodes = g.node_count(), edges = g.edge_count()))]
pub fn dijkstra(g: &Graph, source: &str) -> AlgorithmResult {
    let adj = g.adjacency();

    let mut distances: Distances = g
        .nodes()
        .map(|id| (id.to_string(), Distance::Infinite))
        .collect();
    let mut previous: Previous = g.nodes().map(|id| (id.to_string(), None)).collect();
    if let Some(d) = distances.get_mut(source) {
        *d = Distance::Finite(0);
    }

    let message = if distances.contains_key(source) {
        format!("Initialized distances; {source} starts at 0 and every other node is unreachable")
    } else {
        format!("Source {source} is not in the graph; every node starts unreachable")
    };
    let mut steps = vec![AlgorithmStep::snapshot(
        StepKind::Initial,
        0,
        &distances,
        &previous,
        message,
    )];

    let mut visited: HashSet<String> = HashSet::default();
    let mut round = 0;

    // At most |V| - 1 selections: once every other node is visited, the
    // last node's outgoing edges cannot improve any distance (non-negative
    // weights), so its selection would be a silent no-op.
    while round < g.node_count().saturating_sub(1) {
        // Strict comparison keeps the first node in caller order on ties.
        let mut selected: Option<(&str, Distance)> = None;
        for id in g.nodes() {
            if visited.contains(id) {
                continue;
            }
            let d = distances.get(id).copied().unwrap_or(Distance::Infinite);
            if !d.is_finite() {
                continue;
            }
            match selected {
                Some((_, best)) if d >= best => {}
                _ => selected = Some((id, d)),
            }
        }
        // Every remaining unvisited node is unreachable once no finite
        // distance is left to pick.
        let Some((u, du)) = selected else {
            break;
        };
        round += 1;
        visited.insert(u.to_string());
        tracing::trace!(node = %u, distance = %du, round, "select");
        steps.push(AlgorithmStep {
            node: Some(u.to_string()),
            ..AlgorithmStep::snapshot(
                StepKind::Select,
                round,
                &distances,
                &previous,
                format!("Selected {u} with the smallest tentative distance {du}"),
            )
        });

        let Some(neighbors) = adj.get(u) else {
            continue;
        };
        for (w, weight) in neighbors {
            let candidate = du.plus(*weight);
            let current = distances.get(w.as_str()).copied().unwrap_or(Distance::Infinite);
            if candidate >= current {
                // Examined but not improved: not an observable event.
                continue;
            }
            distances.insert(w.clone(), candidate);
            previous.insert(w.clone(), Some(u.to_string()));
            tracing::trace!(from = %u, to = %w, distance = %candidate, "relax");
            steps.push(AlgorithmStep {
                node: Some(w.clone()),
                edge: Some(Edge::new(u, w.clone(), *weight)),
                updated: vec![w.clone()],
                ..AlgorithmStep::snapshot(
                    StepKind::Relax,
                    round,
                    &distances,
                    &previous,
                    format!("Relaxed {u} -> {w}; distance of {w} improved to {candidate}"),
                )
            });
        }
    }

    let shortest_path_tree = shortest_path_tree(g, &previous);
    let reachable = distances.values().filter(|d| d.is_finite()).count();
    steps.push(AlgorithmStep::snapshot(
        StepKind::Complete,
        round,
        &distances,
        &previous,
        format!(
            "Computation complete; {reachable} of {} nodes reachable",
            distances.len()
        ),
    ));

    AlgorithmResult {
        distances,
        previous,
        steps,
        has_negative_cycle: false,
        shortest_path_tree,
    }
}
