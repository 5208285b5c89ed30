// VeilRoute Core — Path Diversity Engine
//
// "Which path carries the traffic?"
//
// Every public operation here exists to make that question expensive to
// answer: compute the shortest path over a weighted directed graph, then
// surround the real traffic path with decoy paths so a passive observer
// cannot tell the real route from the decoys or from the shortest path.

pub mod decoy;
pub mod graph;
pub mod paths;
pub mod planner;
pub mod search;

use thiserror::Error;

pub use decoy::{displayed_path, PathSampler, PathTag, SampledPaths, SamplerConfig};
pub use graph::{Edge, Graph};
pub use paths::{count_additional_paths, path_cost, reconstruct_path, Path};
pub use planner::{plan_routes, RoutePlan, ScoredPath};
pub use search::{shortest_path_search, SearchOutcome, Step};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Errors surfaced by the path diversity engine.
///
/// Every variant is scoped to the current query and recoverable at the
/// caller: re-prompt with corrected parameters, a smaller decoy count, or
/// a fixed graph description. Nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouteError {
    /// Start or end node is not present in the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),
    /// Both endpoints exist but no path connects them.
    #[error("no path from {start} to {end}")]
    NoRoute { start: String, end: String },
    /// The graph could not supply the requested number of distinct paths.
    #[error("insufficient path diversity: requested {requested}, available {available}")]
    InsufficientDiversity { requested: usize, available: usize },
    /// A graph description or configuration failed structural validation.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}
