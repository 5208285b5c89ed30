// Decoy Paths — sampling and observer-facing selection
//
// The sampler produces the decoy set plus the reserved actual-traffic
// path; the selector simulates which path an observer would see as
// "selected". The selector never feeds routing: traffic always goes
// over the sampler's reserved path regardless of what is displayed.

pub mod sampler;
pub mod selector;

pub use sampler::{PathSampler, SampledPaths, SamplerConfig};
pub use selector::{displayed_path, PathTag};
