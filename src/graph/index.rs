use super::definition::{Edge, GraphDocument, Node};
use ahash::{AHashMap, AHashSet};

/// Adjacency lookups over a `GraphDocument`, shared by the compiler and traversal utilities.
///
/// Edge lists keep document order, so anything iterating them is deterministic.
/// Edges whose endpoints are missing are kept; looking up their node simply misses.
pub struct GraphIndex<'a> {
    nodes: AHashMap<&'a str, &'a Node>,
    edges_by_source: AHashMap<&'a str, Vec<&'a Edge>>,
    edges_by_target: AHashMap<&'a str, Vec<&'a Edge>>,
    convergence: AHashSet<&'a str>,
    start: Option<&'a Node>,
}

impl<'a> GraphIndex<'a> {
    pub fn build(document: &'a GraphDocument) -> Self {
        let mut nodes = AHashMap::with_capacity(document.nodes.len());
        for node in &document.nodes {
            nodes.entry(node.id.as_str()).or_insert(node);
        }

        let mut edges_by_source: AHashMap<&str, Vec<&Edge>> = AHashMap::new();
        let mut edges_by_target: AHashMap<&str, Vec<&Edge>> = AHashMap::new();
        for edge in &document.edges {
            edges_by_source
                .entry(edge.source.as_str())
                .or_default()
                .push(edge);
            edges_by_target
                .entry(edge.target.as_str())
                .or_default()
                .push(edge);
        }

        let convergence = edges_by_target
            .iter()
            .filter(|(_, incoming)| incoming.len() > 1)
            .map(|(id, _)| *id)
            .collect();

        Self {
            nodes,
            edges_by_source,
            edges_by_target,
            convergence,
            start: document.start_node(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    pub fn start(&self) -> Option<&'a Node> {
        self.start
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Outgoing edges of `id`, in document order.
    pub fn outgoing(&self, id: &str) -> &[&'a Edge] {
        self.edges_by_source
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Incoming edges of `id`, in document order.
    pub fn incoming(&self, id: &str) -> &[&'a Edge] {
        self.edges_by_target
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// A node with more than one incoming edge.
    pub fn is_convergence(&self, id: &str) -> bool {
        self.convergence.contains(id)
    }

    /// All convergence node ids, sorted.
    pub fn convergence_nodes(&self) -> Vec<&'a str> {
        let mut ids: Vec<_> = self.convergence.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// First outgoing edge leaving through `handle`. Later duplicates are ignored.
    pub fn edge_for_handle(&self, id: &str, handle: &str) -> Option<&'a Edge> {
        self.outgoing(id).iter().copied().find(|e| e.has_handle(handle))
    }

    pub fn target_for_handle(&self, id: &str, handle: &str) -> Option<&'a str> {
        self.edge_for_handle(id, handle).map(|e| e.target.as_str())
    }

    /// Target of the first outgoing edge, regardless of handle.
    pub fn first_target(&self, id: &str) -> Option<&'a str> {
        self.outgoing(id).first().map(|e| e.target.as_str())
    }
}
