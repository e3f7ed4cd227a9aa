use std::fs;
use std::path::{Path, PathBuf};

use bns_core::errors::{BnError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::report::Method;

/// YAML-configurable parameters governing a batch of estimations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Samples drawn per estimator and query.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Estimators to run for every query.
    #[serde(default)]
    pub method: EstimatorKind,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_samples() -> usize {
    10_000
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            method: EstimatorKind::default(),
            seed_policy: SeedPolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SamplerConfig {
    /// Parses a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, BnError> {
        serde_yaml::from_str(yaml)
            .map_err(|err| BnError::Config(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Loads a configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, BnError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            BnError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| {
            BnError::Config(
                err.info()
                    .clone()
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// Which estimators a run evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EstimatorKind {
    /// Rejection sampling only.
    Rejection,
    /// Likelihood weighting only.
    LikelihoodWeighting,
    /// Both estimators, rejection first.
    #[default]
    Both,
}

impl EstimatorKind {
    /// Methods evaluated, in report order.
    pub fn methods(&self) -> &'static [Method] {
        match self {
            EstimatorKind::Rejection => &[Method::Rejection],
            EstimatorKind::LikelihoodWeighting => &[Method::LikelihoodWeighting],
            EstimatorKind::Both => &[Method::Rejection, Method::LikelihoodWeighting],
        }
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label recorded in manifests.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. No manifest is written when unset.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Manifest filename relative to `run_directory`.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            manifest_file: default_manifest_filename(),
        }
    }
}
