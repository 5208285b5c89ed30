// Route Planning — the full query pipeline
//
// Search, reachability check, reference shortest path, census bounds
// check, decoy sampling, cost scoring. One call per query: the graph
// and every piece of state are owned by this call stack, so concurrent
// callers simply construct independent graphs.

use crate::decoy::PathSampler;
use crate::graph::Graph;
use crate::paths::{count_additional_paths, path_cost, reconstruct_path, Path};
use crate::search::{shortest_path_search, Step};
use crate::RouteError;
use rand::Rng;
use tracing::debug;

/// A path with its evaluated cost.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPath {
    pub path: Path,
    pub cost: f64,
}

/// Everything one diversity query produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Search trace, for explanation and visualization only.
    pub steps: Vec<Step>,
    /// Reference shortest path. Never transmitted.
    pub shortest: ScoredPath,
    /// Decoy paths in acceptance order.
    pub decoys: Vec<ScoredPath>,
    /// The path that actually carries traffic. `None` for a zero-decoy
    /// query, which skips generation and only reports the analysis.
    pub actual: Option<ScoredPath>,
}

/// Run one full diversity query.
///
/// Fails with `UnknownNode` before any computation when an endpoint is
/// absent, `NoRoute` when the endpoints are not connected, and
/// `InsufficientDiversity` when the graph cannot support `decoy_count`
/// decoys plus a distinct actual-traffic path, either rejected up front
/// against the census or after the sampler's budget ran out.
pub fn plan_routes<R: Rng>(
    graph: &Graph,
    start: &str,
    end: &str,
    decoy_count: usize,
    rng: &mut R,
) -> Result<RoutePlan, RouteError> {
    let outcome = shortest_path_search(graph, start, end)?;
    if outcome.distance_to(end).is_infinite() {
        return Err(RouteError::NoRoute {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let shortest = reconstruct_path(&outcome.predecessors, start, end);

    let score = |path: Path| -> ScoredPath {
        let cost = path_cost(graph, &path);
        ScoredPath { path, cost }
    };

    // A zero-decoy query skips generation entirely, as the interactive
    // front end does: the analysis is still reported, nothing is
    // sampled, and there is no reserved traffic path to hide.
    if decoy_count == 0 {
        debug!(start, end, "route plan complete without decoys");
        return Ok(RoutePlan {
            steps: outcome.steps,
            shortest: score(shortest),
            decoys: Vec::new(),
            actual: None,
        });
    }

    // Bounds check before sampling: beyond the reference path there must
    // be room for the decoys plus the actual-traffic path.
    let available = count_additional_paths(graph, start, end);
    if decoy_count >= available {
        return Err(RouteError::InsufficientDiversity {
            requested: decoy_count,
            available,
        });
    }

    let mut sampler = PathSampler::with_rng(graph, rng);
    let sampled = sampler.sample(start, end, &shortest, decoy_count);
    // Shortfalls report the census availability so the caller can pick
    // a smaller retry count.
    if sampled.decoys.len() < decoy_count {
        return Err(RouteError::InsufficientDiversity {
            requested: decoy_count,
            available,
        });
    }
    let actual = sampled.actual.ok_or(RouteError::InsufficientDiversity {
        requested: decoy_count,
        available,
    })?;

    debug!(
        start,
        end,
        decoys = sampled.decoys.len(),
        "route plan complete"
    );
    Ok(RoutePlan {
        steps: outcome.steps,
        shortest: score(shortest),
        decoys: sampled.decoys.into_iter().map(score).collect(),
        actual: Some(score(actual)),
    })
}
