use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use bns_core::RngHandle;
use bns_sampler::generate_sample;
use clap::Args;

use super::load_network;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Network JSON document.
    #[arg(long)]
    pub network: PathBuf,
    /// Number of samples to print.
    #[arg(long, default_value_t = 10)]
    pub count: usize,
    /// Seed of the sampling stream.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
}

pub fn run(args: &SampleArgs) -> Result<(), Box<dyn Error>> {
    let network = load_network(&args.network)?;
    let mut rng = RngHandle::from_seed(args.seed);
    tracing::debug!(count = args.count, seed = args.seed, "drawing prior samples");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..args.count {
        let sample = generate_sample(&network, &mut rng)?;
        serde_json::to_writer(&mut out, &sample)?;
        writeln!(out)?;
    }
    Ok(())
}
