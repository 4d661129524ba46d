//! Bellman-Ford with a replayable step trace and negative-cycle detection.

use crate::graphlib::Graph;
use crate::model::{AlgorithmResult, AlgorithmStep, Distance, Distances, Previous, StepKind};
use crate::tree::shortest_path_tree;

/// Run Bellman-Ford from `source`, recording every observable state change.
///
/// Relaxation passes stop early once a full pass changes nothing, since the
/// remaining passes cannot change anything either; the convergence is
/// recorded as a no-op `update` step so a replay shows why the passes
/// ended.
#[tracing::instrument(skip(g), fields(source = %source, nodes = g.node_count(), edges = g.edge_count()))]
pub fn bellman_ford(g: &Graph, source: &str) -> AlgorithmResult {
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

    let mut passes_run = 0;
    for pass in 1..g.node_count() {
        passes_run = pass;
        let mut changed = false;
        for e in g.edges() {
            let Some(&dv) = distances.get(e.v.as_str()) else {
                continue;
            };
            if !dv.is_finite() {
                continue;
            }
            let Some(&dw) = distances.get(e.w.as_str()) else {
                continue;
            };
            let candidate = dv.plus(e.weight);
            if candidate >= dw {
                continue;
            }
            distances.insert(e.w.clone(), candidate);
            previous.insert(e.w.clone(), Some(e.v.clone()));
            changed = true;
            tracing::trace!(from = %e.v, to = %e.w, distance = %candidate, pass, "relax");
            steps.push(AlgorithmStep {
                node: Some(e.w.clone()),
                edge: Some(e.clone()),
                updated: vec![e.w.clone()],
                ..AlgorithmStep::snapshot(
                    StepKind::Relax,
                    pass,
                    &distances,
                    &previous,
                    format!(
                        "Pass {pass}: relaxed {} -> {}; distance of {} improved to {candidate}",
                        e.v, e.w, e.w
                    ),
                )
            });
        }
        if !changed {
            steps.push(AlgorithmStep::snapshot(
                StepKind::Update,
                pass,
                &distances,
                &previous,
                format!("Pass {pass} changed no distances; relaxation has converged"),
            ));
            break;
        }
    }

    // One extra scan: any edge that still relaxes proves a negative-weight
    // cycle reachable from the source.
    let check_pass = passes_run + 1;
    for e in g.edges() {
        let Some(&dv) = distances.get(e.v.as_str()) else {
            continue;
        };
        if !dv.is_finite() {
            continue;
        }
        let Some(&dw) = distances.get(e.w.as_str()) else {
            continue;
        };
        if dv.plus(e.weight) >= dw {
            continue;
        }
        tracing::debug!(from = %e.v, to = %e.w, "negative cycle");
        steps.push(AlgorithmStep {
            edge: Some(e.clone()),
            ..AlgorithmStep::snapshot(
                StepKind::NegativeCycle,
                check_pass,
                &distances,
                &previous,
                format!(
                    "Edge {} -> {} still relaxes after every pass; negative-weight cycle detected",
                    e.v, e.w
                ),
            )
        });
        return AlgorithmResult {
            distances,
            previous,
            steps,
            has_negative_cycle: true,
            shortest_path_tree: Vec::new(),
        };
    }

    let shortest_path_tree = shortest_path_tree(g, &previous);
    let reachable = distances.values().filter(|d| d.is_finite()).count();
    steps.push(AlgorithmStep::snapshot(
        StepKind::Complete,
        check_pass,
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
