// Graph Model — nodes, weighted directed edges, adjacency index
//
// Owned-value storage built once per query and immutable during path
// computations. Edges are directed; parallel edges between the same
// ordered pair are kept and each is independently traversable.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::warn;

/// A directed weighted edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Directed weighted graph.
///
/// The adjacency index is appended in lockstep with the edge list, so
/// every edge has exactly one adjacency entry and vice versa, and every
/// node referenced by an edge is present in the node set.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: BTreeSet<String>,
    edges: Vec<Edge>,
    adjacency: HashMap<String, Vec<(String, f64)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Idempotent.
    pub fn add_node(&mut self, node: impl Into<String>) {
        let node = node.into();
        self.adjacency.entry(node.clone()).or_default();
        self.nodes.insert(node);
    }

    /// Append a directed edge, inserting both endpoints if absent.
    ///
    /// The weight is stored as given. Zero is fine; a negative weight
    /// violates the shortest-path engine's precondition and is the
    /// caller's responsibility.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: f64,
    ) {
        let source = source.into();
        let target = target.into();
        if weight < 0.0 {
            warn!(
                %source,
                %target,
                weight,
                "negative edge weight stored; shortest-path distances may be wrong"
            );
        }
        self.add_node(source.clone());
        self.add_node(target.clone());
        self.edges.push(Edge {
            source: source.clone(),
            target: target.clone(),
            weight,
        });
        self.adjacency.entry(source).or_default().push((target, weight));
    }

    /// Outgoing (neighbor, weight) pairs in edge insertion order, empty
    /// if the node has no recorded outgoing edges.
    pub fn neighbors(&self, node: &str) -> &[(String, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Is this node present in the node set?
    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// All nodes, in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = Graph::new();
        graph.add_node("A");
        graph.add_node("A");
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains("A"));
    }

    #[test]
    fn test_add_edge_inserts_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0);
        assert!(graph.contains("A"));
        assert!(graph.contains("B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_in_insertion_order() {
        let mut graph = Graph::new();
        graph.add_edge("A", "C", 2.0);
        graph.add_edge("A", "B", 4.0);
        let neighbors = graph.neighbors("A");
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0], ("C".to_string(), 2.0));
        assert_eq!(neighbors[1], ("B".to_string(), 4.0));
    }

    #[test]
    fn test_parallel_edges_kept() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("A", "B", 1.0);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("A").len(), 2);
    }

    #[test]
    fn test_neighbors_of_unknown_node_empty() {
        let graph = Graph::new();
        assert!(graph.neighbors("missing").is_empty());
    }

    #[test]
    fn test_node_without_outgoing_edges() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0);
        assert!(graph.neighbors("B").is_empty());
    }

    #[test]
    fn test_negative_weight_stored_as_given() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", -3.0);
        assert_eq!(graph.neighbors("A")[0].1, -3.0);
    }

    #[test]
    fn test_nodes_lexicographic() {
        let mut graph = Graph::new();
        graph.add_edge("B", "A", 1.0);
        graph.add_edge("A", "C", 1.0);
        let nodes: Vec<&str> = graph.nodes().collect();
        assert_eq!(nodes, vec!["A", "B", "C"]);
    }
}
