//! Shortest-path-tree reconstruction shared by both algorithm variants.

use crate::graphlib::{Edge, Graph};
use crate::model::Previous;

/// Collect, for every node with a predecessor and in node order, the first
/// edge in caller-supplied edge order matching `(previous[node], node)`.
///
/// With parallel edges the first match may not be the edge that produced
/// the relaxation; the tree is a display aid, not a recomputation.
pub(crate) fn shortest_path_tree(g: &Graph, previous: &Previous) -> Vec<Edge> {
    let mut tree = Vec::new();
    for (node, prev) in previous {
        let Some(prev) = prev else {
            continue;
        };
        if let Some(e) = g.edges().iter().find(|e| &e.v == prev && &e.w == node) {
            tree.push(e.clone());
        }
    }
    tree
}
