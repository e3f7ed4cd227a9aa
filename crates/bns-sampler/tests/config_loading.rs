use std::fs;
use std::path::PathBuf;

use bns_core::BnError;
use bns_sampler::{EstimatorKind, SamplerConfig};
use tempfile::tempdir;

#[test]
fn empty_document_uses_defaults() {
    let config = SamplerConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config, SamplerConfig::default());
    assert_eq!(config.samples, 10_000);
    assert_eq!(config.method, EstimatorKind::Both);
    assert_eq!(config.output.manifest_file, PathBuf::from("manifest.json"));
    assert!(config.output.run_directory.is_none());
}

#[test]
fn partial_document_overrides_fields() {
    let yaml = "\
samples: 2500
method: likelihood-weighting
seed_policy:
  master_seed: 7
  label: nightly
";
    let config = SamplerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.samples, 2_500);
    assert_eq!(config.method, EstimatorKind::LikelihoodWeighting);
    assert_eq!(config.seed_policy.master_seed, 7);
    assert_eq!(config.seed_policy.label.as_deref(), Some("nightly"));
}

#[test]
fn loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yaml");
    fs::write(&path, "method: rejection\noutput:\n  run_directory: out\n").unwrap();
    let config = SamplerConfig::load(&path).unwrap();
    assert_eq!(config.method, EstimatorKind::Rejection);
    assert_eq!(config.output.run_directory, Some(PathBuf::from("out")));
}

#[test]
fn invalid_yaml_is_a_config_error() {
    let err = SamplerConfig::from_yaml_str("samples: [not, a, number]").unwrap_err();
    match err {
        BnError::Config(info) => assert_eq!(info.code, "config-parse"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_file_reports_its_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = SamplerConfig::load(&path).unwrap_err();
    assert_eq!(err.info().code, "config-read");
    assert_eq!(
        err.info().context.get("path"),
        Some(&path.display().to_string())
    );
}
