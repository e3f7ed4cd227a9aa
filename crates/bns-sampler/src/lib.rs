#![deny(missing_docs)]

//! Sampling-based approximate inference over discrete Bayesian networks.
//!
//! Every estimator takes the network and the random source explicitly, so an
//! estimation run is a pure function of its inputs and of the stream it
//! consumes.

/// Batch query runs over per-query seed substreams.
pub mod batch;
/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Likelihood weighting.
pub mod likelihood;
/// Run manifest serialization helpers.
pub mod manifest;
/// Forward (prior) sampling.
pub mod prior;
/// Rejection sampling.
pub mod rejection;
/// Estimator reports and diagnostics.
pub mod report;
mod validate;

pub use batch::{run, QuerySpec, RunSummary};
pub use config::{EstimatorKind, OutputConfig, SamplerConfig, SeedPolicy};
pub use likelihood::{
    estimate_by_likelihood_weighting, likelihood_weighting_report, weighted_sample,
    WeightedSample,
};
pub use manifest::RunManifest;
pub use prior::{generate_sample, select_state};
pub use rejection::{estimate_by_rejection, rejection_sampling_report};
pub use report::{EstimateReport, Method};
