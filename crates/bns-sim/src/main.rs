use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    query::{self, QueryArgs},
    sample::{self, SampleArgs},
    version::{self, VersionArgs},
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "bns-sim", about = "Bayesian network sampling CLI")]
struct Cli {
    /// Emit debug-level diagnostics on stderr.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print prior samples of a network as JSON lines.
    Sample(SampleArgs),
    /// Estimate a posterior probability given evidence.
    Query(QueryArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;
    match cli.command {
        Command::Sample(args) => sample::run(&args),
        Command::Query(args) => query::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn setup_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
