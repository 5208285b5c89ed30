//! Paths — reconstruction, cost evaluation, and the simple-path census

pub mod census;
pub mod cost;

pub use census::count_additional_paths;
pub use cost::path_cost;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::warn;

/// Ordered node sequence from start to end with no repeated node,
/// connected by real edges of the graph it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    nodes: Vec<String>,
}

impl Path {
    pub fn from_nodes(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" -> "))
    }
}

/// Walk backward from `end` along predecessor links until a node with no
/// predecessor, then reverse.
///
/// Precondition: the caller has checked that `end` is reachable (finite
/// engine distance). When it is not, the chain terminates somewhere
/// other than `start` and the result is a partial path; that is logged
/// here but deliberately not re-validated.
pub fn reconstruct_path(
    predecessors: &BTreeMap<String, Option<String>>,
    start: &str,
    end: &str,
) -> Path {
    let mut nodes = Vec::new();
    let mut cursor = Some(end.to_string());
    while let Some(node) = cursor {
        cursor = predecessors.get(&node).cloned().flatten();
        nodes.push(node);
    }
    nodes.reverse();

    if nodes.first().map(String::as_str) != Some(start) {
        warn!(start, end, "predecessor chain does not reach the start node; partial path");
    }
    Path::from_nodes(nodes)
}
