//! Adjacency storage for the connection graph

use std::collections::HashMap;

use serde::Serialize;

/// Dense index assigned to a city the first time it is inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One direction of a connection, stored in the adjacency list of its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub neighbor: NodeIndex,
    pub cost: u32,
    pub time: u32,
}

/// Undirected multigraph of cities keyed by name
///
/// Every connection is stored twice, once in each endpoint's adjacency
/// list, with identical weights. Parallel connections are kept in insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    indices: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
    connections: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index of `name`, creating an empty adjacency list if unseen
    pub fn upsert_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }

        let idx = NodeIndex(self.names.len());
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Insert a symmetric connection between `a` and `b`
    pub fn add_connection(&mut self, a: &str, b: &str, cost: u32, time: u32) {
        let a_idx = self.upsert_node(a);
        let b_idx = self.upsert_node(b);

        self.adjacency[a_idx.0].push(Edge {
            neighbor: b_idx,
            cost,
            time,
        });
        self.adjacency[b_idx.0].push(Edge {
            neighbor: a_idx,
            cost,
            time,
        });
        self.connections += 1;
    }

    pub fn lookup_index(&self, name: &str) -> Option<NodeIndex> {
        self.indices.get(name).copied()
    }

    /// First edge from `a` to `b` in insertion order
    pub fn find_edge(&self, a: &str, b: &str) -> Option<&Edge> {
        let a_idx = self.lookup_index(a)?;
        let b_idx = self.lookup_index(b)?;
        self.find_edge_between(a_idx, b_idx)
    }

    /// Index-based variant of [`Graph::find_edge`]
    pub fn find_edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.edges(a).iter().find(|edge| edge.neighbor == b)
    }

    /// Adjacency list of `node`; empty for an index this graph never issued
    pub fn edges(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency.get(node.0).map_or(&[], Vec::as_slice)
    }

    /// Name of a node issued by this graph
    ///
    /// # Panics
    ///
    /// Panics if `node` was not produced by this graph.
    pub fn name(&self, node: NodeIndex) -> &str {
        &self.names[node.0]
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of `add_connection` calls, parallel connections included
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_assigns_dense_indices() {
        let mut graph = Graph::new();
        assert_eq!(graph.upsert_node("Seattle").index(), 0);
        assert_eq!(graph.upsert_node("Austin").index(), 1);
        assert_eq!(graph.upsert_node("Dallas").index(), 2);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut graph = Graph::new();
        let first = graph.upsert_node("Seattle");
        graph.add_connection("Seattle", "Austin", 10, 1);
        let again = graph.upsert_node("Seattle");

        assert_eq!(first, again);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edges(first).len(), 1);
    }

    #[test]
    fn test_add_connection_is_symmetric() {
        let mut graph = Graph::new();
        graph.add_connection("A", "B", 10, 5);

        let ab = graph.find_edge("A", "B").unwrap();
        let ba = graph.find_edge("B", "A").unwrap();
        assert_eq!((ab.cost, ab.time), (10, 5));
        assert_eq!((ba.cost, ba.time), (10, 5));
        assert_eq!(graph.name(ab.neighbor), "B");
        assert_eq!(graph.name(ba.neighbor), "A");
        assert_eq!(graph.connection_count(), 1);
    }

    #[test]
    fn test_lookup_unknown_name() {
        let mut graph = Graph::new();
        graph.add_connection("A", "B", 1, 1);
        assert!(graph.lookup_index("Z").is_none());
        assert!(graph.find_edge("A", "Z").is_none());
        assert!(graph.find_edge("Z", "A").is_none());
    }

    #[test]
    fn test_find_edge_returns_first_parallel_connection() {
        let mut graph = Graph::new();
        graph.add_connection("A", "B", 30, 3);
        graph.add_connection("A", "B", 10, 1);

        let edge = graph.find_edge("A", "B").unwrap();
        assert_eq!((edge.cost, edge.time), (30, 3));
        let back = graph.find_edge("B", "A").unwrap();
        assert_eq!((back.cost, back.time), (30, 3));
        assert_eq!(graph.edges(graph.lookup_index("A").unwrap()).len(), 2);
    }

    #[test]
    fn test_edges_of_foreign_index_is_empty() {
        let mut big = Graph::new();
        for name in ["A", "B", "C", "D"] {
            big.upsert_node(name);
        }
        let foreign = big.lookup_index("D").unwrap();

        let small = Graph::new();
        assert!(small.edges(foreign).is_empty());
        assert!(small.is_empty());
    }

    #[test]
    fn test_names_in_first_seen_order() {
        let mut graph = Graph::new();
        graph.add_connection("Miami", "Boston", 1, 1);
        graph.add_connection("Denver", "Miami", 1, 1);
        let names: Vec<&str> = (0..graph.node_count())
            .map(|i| graph.name(NodeIndex(i)))
            .collect();
        assert_eq!(names, vec!["Miami", "Boston", "Denver"]);
    }
}
