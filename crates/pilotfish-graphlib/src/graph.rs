use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Display metadata attached to a node. The algorithms never read it; the
/// coordinate space belongs to whatever renders the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeLabel {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl NodeLabel {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}

/// A directed edge `v -> w` with an integer weight.
///
/// Weights may be zero or negative. Parallel edges between the same ordered
/// pair are permitted and independent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub v: String,
    pub w: String,
    pub weight: i64,
}

impl Edge {
    pub fn new(v: impl Into<String>, w: impl Into<String>, weight: i64) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone)]
struct NodeEntry {
    id: String,
    label: NodeLabel,
}

/// Outgoing adjacency derived from a graph: node id to `(neighbor, weight)`
/// pairs in edge-list order.
pub type AdjacencyList = hashbrown::HashMap<String, Vec<(String, i64)>, FxBuildHasher>;

/// An insertion-ordered directed multigraph with string node ids.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: NodeLabel) -> &mut Self {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        self
    }

    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return self;
        }
        self.set_node(id, NodeLabel::default())
    }

    pub fn node(&self, id: &str) -> Option<&NodeLabel> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut NodeLabel> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Append a directed edge. Endpoints are not created implicitly: the
    /// caller owns the node set, and edges naming unknown nodes are
    /// tolerated (and skipped) by [`Graph::adjacency`].
    pub fn set_edge(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        weight: i64,
    ) -> &mut Self {
        self.edges.push(Edge::new(v, w, weight));
        self
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order, parallel duplicates included.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Remove the first edge matching `v -> w` in insertion order. Returns
    /// whether an edge was removed.
    pub fn remove_edge(&mut self, v: &str, w: &str) -> bool {
        let Some(idx) = self.edges.iter().position(|e| e.v == v && e.w == w) else {
            return false;
        };
        self.edges.remove(idx);
        true
    }

    /// Remove a node along with its incident edges. Returns whether the
    /// node existed.
    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };
        self.nodes.remove(idx);
        for i in idx..self.nodes.len() {
            let node_id = self.nodes[i].id.as_str();
            if let Some(v) = self.node_index.get_mut(node_id) {
                *v = i;
            }
        }
        self.edges.retain(|e| e.v != id && e.w != id);
        true
    }

    /// Build the outgoing adjacency for every node.
    ///
    /// Every node gets an entry (nodes without outgoing edges map to an
    /// empty list), and each entry lists its `(neighbor, weight)` pairs in
    /// edge-list order. Edges whose endpoints are not in the node set are
    /// skipped.
    pub fn adjacency(&self) -> AdjacencyList {
        let mut adj = AdjacencyList::default();
        adj.reserve(self.nodes.len());
        for n in &self.nodes {
            adj.insert(n.id.clone(), Vec::new());
        }
        for e in &self.edges {
            if !self.node_index.contains_key(e.w.as_str()) {
                continue;
            }
            let Some(list) = adj.get_mut(e.v.as_str()) else {
                continue;
            };
            list.push((e.w.clone(), e.weight));
        }
        adj
    }
}
