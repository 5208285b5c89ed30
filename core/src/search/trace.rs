// Step Trace — per-iteration snapshots of the search state
//
// Each snapshot is a full owned copy of the distance map, predecessor
// map, and unvisited set, so later mutation of the live state can never
// alias into an already-recorded step.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One snapshot of the search state.
///
/// Taken once before any node is settled (with `current` = start) and
/// once after each settled node's relaxation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    /// Node settled at this iteration (the start node for the initial
    /// snapshot).
    pub current: String,
    /// Distance to `current` at snapshot time.
    pub distance: f64,
    /// Best known distance per node; `f64::INFINITY` = not yet reached.
    pub distances: BTreeMap<String, f64>,
    /// Predecessor link per node.
    pub predecessors: BTreeMap<String, Option<String>>,
    /// Nodes not yet settled.
    pub unvisited: BTreeSet<String>,
}
