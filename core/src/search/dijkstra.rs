// Label-Setting Shortest Path
//
// State is kept in ordered maps keyed by node id, and ties on the
// minimum distance break lexicographically, so traces are reproducible
// across runs. Correctness assumes non-negative edge weights; negative
// weights are tolerated silently and produce whatever the relaxation
// arithmetic yields.

use super::trace::Step;
use crate::graph::Graph;
use crate::RouteError;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Full output of one shortest-path search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Snapshot per iteration, initial snapshot first.
    pub steps: Vec<Step>,
    /// Final best distance per node; `f64::INFINITY` = unreachable.
    pub distances: BTreeMap<String, f64>,
    /// Final predecessor link per node.
    pub predecessors: BTreeMap<String, Option<String>>,
}

impl SearchOutcome {
    /// Distance to `node`, infinite when unknown or unreachable.
    pub fn distance_to(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }
}

/// Run the label-setting search from `start`, stopping early once `end`
/// is settled.
///
/// Every node in the graph is tracked, reachable or not. After an early
/// exit the target's distance and predecessor chain are final; other
/// nodes' entries may not be. Fails with `UnknownNode` before any
/// computation when either endpoint is absent from the graph.
pub fn shortest_path_search(
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<SearchOutcome, RouteError> {
    for endpoint in [start, end] {
        if !graph.contains(endpoint) {
            return Err(RouteError::UnknownNode(endpoint.to_string()));
        }
    }

    let mut distances: BTreeMap<String, f64> = graph
        .nodes()
        .map(|node| (node.to_string(), f64::INFINITY))
        .collect();
    let mut predecessors: BTreeMap<String, Option<String>> =
        graph.nodes().map(|node| (node.to_string(), None)).collect();
    let mut unvisited: BTreeSet<String> = graph.nodes().map(str::to_string).collect();
    distances.insert(start.to_string(), 0.0);

    let mut steps = vec![Step {
        current: start.to_string(),
        distance: 0.0,
        distances: distances.clone(),
        predecessors: predecessors.clone(),
        unvisited: unvisited.clone(),
    }];

    while !unvisited.is_empty() {
        // Minimum distance first, lexicographic node id on ties.
        let Some(current) = unvisited
            .iter()
            .min_by(|a, b| distances[*a].total_cmp(&distances[*b]).then_with(|| a.cmp(b)))
            .cloned()
        else {
            break;
        };

        let current_distance = distances[&current];
        if current_distance.is_infinite() {
            // Everything still unvisited is unreachable from start.
            break;
        }

        unvisited.remove(&current);

        for (neighbor, weight) in graph.neighbors(&current) {
            let candidate = current_distance + weight;
            if candidate < distances[neighbor] {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), Some(current.clone()));
            }
        }

        debug!(node = %current, distance = current_distance, "settled node");
        steps.push(Step {
            current: current.clone(),
            distance: current_distance,
            distances: distances.clone(),
            predecessors: predecessors.clone(),
            unvisited: unvisited.clone(),
        });

        if current == end {
            // Target settled; remaining nodes' distances may be non-final.
            break;
        }
    }

    Ok(SearchOutcome {
        steps,
        distances,
        predecessors,
    })
}
