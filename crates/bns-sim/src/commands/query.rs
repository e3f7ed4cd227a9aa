use std::error::Error;
use std::path::PathBuf;

use bns_core::{Evidence, Query};
use bns_sampler::{run as run_batch, EstimatorKind, QuerySpec, SamplerConfig};
use clap::{Args, ValueEnum};

use super::{load_network, parse_assignment};

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Network JSON document.
    #[arg(long)]
    pub network: PathBuf,
    /// Queried outcome as `VAR=STATE`.
    #[arg(long, value_parser = parse_assignment)]
    pub query: (String, String),
    /// Observed outcome as `VAR=STATE`; repeatable.
    #[arg(long, value_parser = parse_assignment)]
    pub evidence: Vec<(String, String)>,
    /// YAML run configuration; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Samples drawn per estimator.
    #[arg(long)]
    pub samples: Option<usize>,
    /// Master seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Estimators to run.
    #[arg(long, value_enum)]
    pub method: Option<MethodArg>,
    /// Directory receiving the run manifest.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Rejection,
    LikelihoodWeighting,
    Both,
}

impl From<MethodArg> for EstimatorKind {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Rejection => EstimatorKind::Rejection,
            MethodArg::LikelihoodWeighting => EstimatorKind::LikelihoodWeighting,
            MethodArg::Both => EstimatorKind::Both,
        }
    }
}

pub fn run(args: &QueryArgs) -> Result<(), Box<dyn Error>> {
    let network = load_network(&args.network)?;
    let config = resolve_config(args)?;

    let (variable, state) = &args.query;
    let evidence: Evidence = args.evidence.iter().cloned().collect();
    let spec = QuerySpec::new(Query::new(variable.as_str(), state.as_str()), evidence);

    let summary = run_batch(&config, &network, std::slice::from_ref(&spec))?;
    if let Some(path) = &summary.manifest_path {
        tracing::info!(path = %path.display(), "manifest written");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn resolve_config(args: &QueryArgs) -> Result<SamplerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SamplerConfig::load(path)?,
        None => SamplerConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(seed) = args.seed {
        config.seed_policy.master_seed = seed;
    }
    if let Some(method) = args.method {
        config.method = method.into();
    }
    if let Some(out) = &args.out {
        config.output.run_directory = Some(out.clone());
    }
    Ok(config)
}
