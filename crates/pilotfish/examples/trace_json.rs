use pilotfish::Algorithm;
use pilotfish::graphlib::{Graph, NodeLabel};
use std::str::FromStr;

fn main() {
    let algorithm = std::env::args()
        .nth(1)
        .map(|arg| Algorithm::from_str(&arg).expect("known algorithm id"))
        .unwrap_or(Algorithm::Dijkstra);

    let mut g = Graph::new();
    g.set_node("a", NodeLabel::at(80.0, 60.0));
    g.set_node("b", NodeLabel::at(240.0, 40.0));
    g.set_node("c", NodeLabel::at(160.0, 160.0));
    g.set_node("d", NodeLabel::at(320.0, 140.0));
    g.set_edge("a", "b", 4);
    g.set_edge("a", "c", 1);
    g.set_edge("c", "b", 1);
    g.set_edge("b", "d", 3);
    g.set_edge("c", "d", 7);

    let result = algorithm.run(&g, "a");
    let json = serde_json::to_string_pretty(&result).expect("serialize result");
    println!("{json}");
}
