// Decoy Path Sampling — randomized simple-path walks
//
// Repeated random walks from start: each hop picks uniformly among
// neighbors not yet visited on this walk, with the end node always
// eligible. A dead end or a revisit discards the attempt. Accepted
// walks must differ from the excluded shortest path and from every
// decoy already collected. One attempt budget covers both the decoy
// loop and the follow-up search for the actual-traffic path.

use crate::graph::Graph;
use crate::paths::Path;
use crate::RouteError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Attempt budget per requested decoy (budget = multiplier * count).
    pub attempt_multiplier: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            attempt_multiplier: 5,
        }
    }
}

impl SamplerConfig {
    /// Validate the sampling configuration.
    pub fn validate(&self) -> Result<(), RouteError> {
        if self.attempt_multiplier == 0 {
            return Err(RouteError::MalformedInput(
                "attempt_multiplier must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one sampling run.
///
/// Shortfalls are soft: fewer decoys than requested and/or an absent
/// actual path mean the graph did not offer enough diversity within
/// budget. The caller decides how to degrade.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledPaths {
    /// Distinct decoy paths in acceptance order, none equal to the
    /// excluded path.
    pub decoys: Vec<Path>,
    /// Reserved actual-traffic path, distinct from the excluded path
    /// and from every decoy. `None` when the budget ran out first.
    pub actual: Option<Path>,
}

/// Random simple-path sampler over a fixed graph.
///
/// The generator is caller-supplied so sampling runs can be reproduced
/// with a seeded `StdRng` in tests.
pub struct PathSampler<'g, R: Rng> {
    graph: &'g Graph,
    rng: R,
    config: SamplerConfig,
}

impl<'g> PathSampler<'g, StdRng> {
    /// Sampler with an OS-seeded generator.
    pub fn from_entropy(graph: &'g Graph) -> Self {
        Self::with_rng(graph, StdRng::from_entropy())
    }
}

impl<'g, R: Rng> PathSampler<'g, R> {
    /// Sampler with a caller-supplied generator and default config.
    pub fn with_rng(graph: &'g Graph, rng: R) -> Self {
        Self {
            graph,
            rng,
            config: SamplerConfig::default(),
        }
    }

    /// Sampler with an explicit configuration.
    pub fn with_config(
        graph: &'g Graph,
        rng: R,
        config: SamplerConfig,
    ) -> Result<Self, RouteError> {
        config.validate()?;
        Ok(Self { graph, rng, config })
    }

    /// Collect up to `count` decoy paths plus the reserved
    /// actual-traffic path, all distinct from `exclude`.
    pub fn sample(
        &mut self,
        start: &str,
        end: &str,
        exclude: &Path,
        count: usize,
    ) -> SampledPaths {
        let budget = self.config.attempt_multiplier.saturating_mul(count);
        let mut attempts = 0usize;
        let mut decoys: Vec<Path> = Vec::new();

        while decoys.len() < count && attempts < budget {
            attempts += 1;
            let Some(candidate) = self.random_walk(start, end) else {
                continue;
            };
            if candidate != *exclude && !decoys.contains(&candidate) {
                debug!(path = %candidate, "accepted decoy path");
                decoys.push(candidate);
            }
        }

        // Whatever budget remains goes to the reserved actual-traffic
        // path, which must also differ from every decoy.
        let mut actual = None;
        while attempts < budget {
            attempts += 1;
            let Some(candidate) = self.random_walk(start, end) else {
                continue;
            };
            if candidate != *exclude && !decoys.contains(&candidate) {
                debug!(path = %candidate, "reserved actual-traffic path");
                actual = Some(candidate);
                break;
            }
        }

        if decoys.len() < count || actual.is_none() {
            debug!(
                requested = count,
                found = decoys.len(),
                actual_found = actual.is_some(),
                "sampling budget exhausted before full diversity"
            );
        }

        SampledPaths { decoys, actual }
    }

    /// One randomized walk from `start`. `None` when the walk dead-ends
    /// or revisits a node before reaching `end`.
    fn random_walk(&mut self, start: &str, end: &str) -> Option<Path> {
        let mut nodes: Vec<String> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut current = start.to_string();

        while current != end && !visited.contains(&current) {
            visited.insert(current.clone());
            nodes.push(current.clone());

            let eligible: Vec<&String> = self
                .graph
                .neighbors(&current)
                .iter()
                .map(|(neighbor, _)| neighbor)
                .filter(|neighbor| {
                    !visited.contains(neighbor.as_str()) || neighbor.as_str() == end
                })
                .collect();
            if eligible.is_empty() {
                trace!(at = %current, "walk dead-ended, attempt discarded");
                return None;
            }
            current = eligible[self.rng.gen_range(0..eligible.len())].clone();
        }

        if current != end {
            trace!(at = %current, "walk revisited a node, attempt discarded");
            return None;
        }

        nodes.push(current);
        Some(Path::from_nodes(dedup_keep_first(nodes)))
    }
}

/// Drop repeated nodes, keeping each node's first occurrence.
fn dedup_keep_first(nodes: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    nodes.into_iter().filter(|node| seen.insert(node.clone())).collect()
}
