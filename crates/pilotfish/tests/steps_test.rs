use pilotfish::graphlib::Graph;
use pilotfish::model::{AlgorithmResult, Distance, StepKind};
use pilotfish::{Algorithm, bellman_ford, dijkstra};
use serde_json::json;
use std::str::FromStr;

fn sample() -> Graph {
    let mut g = Graph::new();
    for id in ["a", "b", "c", "d", "e", "f"] {
        g.ensure_node(id);
    }
    g.set_edge("a", "b", 7);
    g.set_edge("a", "c", 9);
    g.set_edge("a", "f", 14);
    g.set_edge("b", "c", 10);
    g.set_edge("b", "d", 15);
    g.set_edge("c", "d", 11);
    g.set_edge("c", "f", 2);
    g.set_edge("f", "e", 9);
    g.set_edge("d", "e", 6);
    g
}

fn assert_step_sequence_shape(result: &AlgorithmResult) {
    let initial_count = result
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Initial)
        .count();
    assert_eq!(initial_count, 1);
    assert_eq!(result.steps[0].kind, StepKind::Initial);

    let complete_count = result
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Complete)
        .count();
    assert_eq!(complete_count, 1);
    assert_eq!(result.steps.last().unwrap().kind, StepKind::Complete);
}

fn assert_predecessor_invariant(result: &AlgorithmResult) {
    for step in &result.steps {
        for (id, prev) in &step.previous {
            let d = step.distances[id.as_str()];
            match prev {
                None => assert!(
                    d == Distance::Finite(0) || d == Distance::Infinite,
                    "{id}: no predecessor but distance {d}"
                ),
                Some(_) => assert!(d.is_finite(), "{id}: predecessor without finite distance"),
            }
        }
    }
}

#[test]
fn step_sequences_begin_with_initial_and_end_with_complete() {
    let g = sample();
    assert_step_sequence_shape(&dijkstra(&g, "a"));
    assert_step_sequence_shape(&bellman_ford(&g, "a"));
}

#[test]
fn predecessor_invariant_holds_in_every_snapshot() {
    let g = sample();
    assert_predecessor_invariant(&dijkstra(&g, "a"));
    assert_predecessor_invariant(&bellman_ford(&g, "a"));
}

#[test]
fn dijkstra_and_bellman_ford_agree_on_non_negative_weights() {
    let g = sample();
    let d = dijkstra(&g, "a");
    let b = bellman_ford(&g, "a");

    assert_eq!(d.distances, b.distances);
    assert_eq!(d.distances["e"], Distance::Finite(20));
    assert_eq!(d.distances["f"], Distance::Finite(11));
}

#[test]
fn reruns_on_unchanged_input_are_byte_for_byte_identical() {
    let g = sample();

    let first = dijkstra(&g, "a");
    let second = dijkstra(&g, "a");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );

    let first = bellman_ford(&g, "a");
    let second = bellman_ford(&g, "a");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn single_node_run_serializes_to_the_golden_payload() {
    let mut g = Graph::new();
    g.ensure_node("n");

    let result = dijkstra(&g, "n");

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "distances": { "n": 0 },
            "previous": { "n": null },
            "steps": [
                {
                    "kind": "initial",
                    "iteration": 0,
                    "node": null,
                    "edge": null,
                    "distances": { "n": 0 },
                    "previous": { "n": null },
                    "updated": [],
                    "message": "Initialized distances; n starts at 0 and every other node is unreachable"
                },
                {
                    "kind": "complete",
                    "iteration": 0,
                    "node": null,
                    "edge": null,
                    "distances": { "n": 0 },
                    "previous": { "n": null },
                    "updated": [],
                    "message": "Computation complete; 1 of 1 nodes reachable"
                }
            ],
            "has_negative_cycle": false,
            "shortest_path_tree": []
        })
    );
}

#[test]
fn infinite_distances_serialize_as_null() {
    let mut g = Graph::new();
    g.ensure_node("a");
    g.ensure_node("b");

    let result = dijkstra(&g, "a");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["distances"]["b"], json!(null));
    assert_eq!(value["distances"]["a"], json!(0));
}

#[test]
fn path_to_walks_the_predecessor_chain_back_to_the_source() {
    let mut g = Graph::new();
    g.ensure_node("a");
    g.ensure_node("b");
    g.ensure_node("c");
    g.set_edge("a", "b", 4);
    g.set_edge("a", "c", 1);
    g.set_edge("c", "b", 1);

    let result = dijkstra(&g, "a");

    assert_eq!(
        result.path_to("b"),
        Some(vec!["a".to_string(), "c".to_string(), "b".to_string()])
    );
    assert_eq!(result.path_to("a"), Some(vec!["a".to_string()]));
}

#[test]
fn path_to_returns_none_for_unknown_or_unreachable_targets() {
    let mut g = Graph::new();
    g.ensure_node("a");
    g.ensure_node("island");

    let result = dijkstra(&g, "a");

    assert_eq!(result.path_to("island"), None);
    assert_eq!(result.path_to("zz"), None);
}

#[test]
fn path_to_refuses_to_walk_a_negative_cycle_result() {
    let mut g = Graph::new();
    g.ensure_node("a");
    g.ensure_node("b");
    g.set_edge("a", "b", -1);
    g.set_edge("b", "a", -1);

    let result = bellman_ford(&g, "a");

    assert!(result.has_negative_cycle);
    assert_eq!(result.path_to("b"), None);
}

#[test]
fn algorithm_ids_parse_and_round_trip() {
    assert_eq!(Algorithm::from_str("dijkstra").unwrap(), Algorithm::Dijkstra);
    assert_eq!(
        Algorithm::from_str("bellman_ford").unwrap(),
        Algorithm::BellmanFord
    );
    assert_eq!(
        Algorithm::from_str("bellman-ford").unwrap(),
        Algorithm::BellmanFord
    );
    assert_eq!(Algorithm::Dijkstra.id(), "dijkstra");
    assert_eq!(Algorithm::BellmanFord.to_string(), "bellman_ford");

    let err = Algorithm::from_str("spfa").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No shortest-path algorithm registered for id: spfa"
    );
}

#[test]
fn algorithm_run_dispatches_to_the_matching_variant() {
    let g = sample();
    assert_eq!(Algorithm::Dijkstra.run(&g, "a"), dijkstra(&g, "a"));
    assert_eq!(Algorithm::BellmanFord.run(&g, "a"), bellman_ford(&g, "a"));
}
