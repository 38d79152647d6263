use std::collections::{HashMap, HashSet};

/// Node identifier, opaque and unique within one graph snapshot.
///
/// The explorer layer addresses nodes by human-readable string ids, so
/// these are strings rather than interned integers.
pub type NodeId = String;

/// A directed, unweighted edge in an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
}

/// In-memory directed graph: string-keyed adjacency lists.
///
/// Adjacency order is insertion order and is significant: it fixes which
/// neighbor a search explores first and therefore how ties break. Duplicate
/// edges are kept as stored, not deduplicated.
///
/// Lookup contract: [`Graph::neighbors`] returns an empty slice for any id
/// that has no adjacency entry. Both search algorithms resolve neighbors
/// through this single rule; a node that only ever appears as an edge
/// target is a plain dead end.
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<Edge>>,
    nodes: HashSet<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            nodes: HashSet::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(node_count),
            nodes: HashSet::with_capacity(node_count),
        }
    }

    /// Register a node without any edges. Nodes touched by `add_edge` are
    /// registered automatically; this is for isolated nodes.
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.nodes.insert(id.into());
    }

    /// Append a directed edge to `from`'s adjacency list. Both endpoints
    /// become known nodes.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        let from = from.into();
        let to = to.into();
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { target: to });
    }

    /// Outgoing edges of `id` in adjacency order. Empty for unknown ids:
    /// this is the unified missing-node rule shared by both searches.
    pub fn neighbors(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `id` was registered, either directly or as an edge endpoint.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
