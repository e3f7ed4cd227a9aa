use std::collections::BTreeMap;
use std::path::PathBuf;

use bns_core::errors::BnError;
use bns_core::provenance::{RunProvenance, SchemaVersion};
use bns_core::{Evidence, Query, RngHandle};
use bns_net::{canonical_hash, DiscreteNetwork};
use serde::{Deserialize, Serialize};

use crate::config::SamplerConfig;
use crate::determinism;
use crate::likelihood::likelihood_weighting_report;
use crate::manifest::RunManifest;
use crate::rejection::rejection_sampling_report;
use crate::report::{EstimateReport, Method};

/// One query of a batch together with its evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Query whose posterior is estimated.
    pub query: Query,
    /// Evidence conditioned on.
    #[serde(default)]
    pub evidence: Evidence,
}

impl QuerySpec {
    /// Creates a query specification.
    pub fn new(query: Query, evidence: Evidence) -> Self {
        Self { query, evidence }
    }
}

/// Summary returned to callers after a batch completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Master seed every estimator substream was derived from.
    pub master_seed: u64,
    /// Canonical hash of the sampled network.
    pub network_hash: String,
    /// Samples drawn per estimator and query.
    pub samples: usize,
    /// Reports ordered by query, then by method.
    pub reports: Vec<EstimateReport>,
    /// Manifest path, if emitted.
    pub manifest_path: Option<PathBuf>,
}

impl RunSummary {
    /// Reports produced by `method`, in query order.
    pub fn reports_for(&self, method: Method) -> impl Iterator<Item = &EstimateReport> {
        self.reports
            .iter()
            .filter(move |report| report.method == method)
    }
}

/// Evaluates every query with the configured estimators.
///
/// Each `(query index, method)` pair samples from its own substream of the
/// master seed, so a report depends only on its query, its position in the
/// batch and the seed.
pub fn run(
    config: &SamplerConfig,
    network: &DiscreteNetwork,
    queries: &[QuerySpec],
) -> Result<RunSummary, BnError> {
    let master_seed = config.seed_policy.master_seed;
    let network_hash = canonical_hash(network)?;

    let span = tracing::info_span!(
        "sampler_run",
        queries = queries.len(),
        samples = config.samples,
        seed = master_seed
    );
    let _enter = span.enter();

    let mut reports = Vec::with_capacity(queries.len() * config.method.methods().len());
    for (index, spec) in queries.iter().enumerate() {
        for &method in config.method.methods() {
            let mut rng =
                RngHandle::from_seed(determinism::estimator_seed(master_seed, index, method));
            let report = match method {
                Method::Rejection => rejection_sampling_report(
                    network,
                    &spec.query,
                    &spec.evidence,
                    config.samples,
                    &mut rng,
                )?,
                Method::LikelihoodWeighting => likelihood_weighting_report(
                    network,
                    &spec.query,
                    &spec.evidence,
                    config.samples,
                    &mut rng,
                )?,
            };
            tracing::info!(
                query = index,
                method = method.as_str(),
                estimate = report.estimate,
                "query estimated"
            );
            reports.push(report);
        }
    }

    let manifest_path = match &config.output.run_directory {
        Some(directory) => {
            let path = directory.join(&config.output.manifest_file);
            let manifest = RunManifest {
                schema_version: SchemaVersion::default(),
                config: config.clone(),
                provenance: RunProvenance {
                    network_hash: network_hash.clone(),
                    seed: master_seed,
                    created_at: chrono::Utc::now().to_rfc3339(),
                    tool_versions: tool_versions(),
                },
                seed_label: config.seed_policy.label.clone(),
                queries: queries.to_vec(),
                reports: reports.clone(),
            };
            manifest.write(&path)?;
            Some(path)
        }
        None => None,
    };

    Ok(RunSummary {
        master_seed,
        network_hash,
        samples: config.samples,
        reports,
        manifest_path,
    })
}

fn tool_versions() -> BTreeMap<String, String> {
    let mut versions = BTreeMap::new();
    versions.insert(
        env!("CARGO_PKG_NAME").to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    versions
}
