// Simple-Path Census
//
// Exhaustive depth-first enumeration of node-simple paths. The visited
// set is cloned into each branch, so sibling branches never share
// visitation state. Exponential on dense graphs; intended for the small
// graphs this engine serves.

use crate::graph::Graph;
use std::collections::HashSet;

/// Count distinct simple paths from `start` to `end`, minus one for the
/// path reserved as the shortest-path reference, floored at zero.
///
/// The result upper-bounds how many decoy paths a caller may request.
pub fn count_additional_paths(graph: &Graph, start: &str, end: &str) -> usize {
    simple_path_count(graph, start, end).saturating_sub(1)
}

/// Total number of distinct simple paths from `start` to `end`.
pub fn simple_path_count(graph: &Graph, start: &str, end: &str) -> usize {
    dfs(graph, start, end, HashSet::new())
}

fn dfs(graph: &Graph, current: &str, end: &str, visited: HashSet<String>) -> usize {
    if current == end {
        return 1;
    }
    if visited.contains(current) {
        return 0;
    }
    let mut visited = visited;
    visited.insert(current.to_string());
    graph
        .neighbors(current)
        .iter()
        .map(|(neighbor, _)| dfs(graph, neighbor, end, visited.clone()))
        .sum()
}
