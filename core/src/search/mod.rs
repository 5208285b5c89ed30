//! Shortest-Path Engine — label-setting search with a full step trace
//!
//! Classic Dijkstra generalized with observability: the engine settles
//! one node per iteration and records an owned snapshot of its entire
//! state each time, so a front end can replay the search step by step.
//! The trace is never consumed by downstream computation.

pub mod dijkstra;
pub mod trace;

pub use dijkstra::{shortest_path_search, SearchOutcome};
pub use trace::Step;
