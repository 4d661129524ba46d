//! Graph container APIs used by `pilotfish`.
//!
//! The container is deliberately small: an insertion-ordered node list, an
//! insertion-ordered edge list, and the derived outgoing adjacency. Both
//! orders are observable downstream (selection tie-breaks and relaxation
//! order), so they are preserved exactly as the caller supplied them.

mod graph;

pub use graph::{AdjacencyList, Edge, Graph, NodeLabel};
