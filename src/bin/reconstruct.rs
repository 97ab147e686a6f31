//! Secret reconstruction CLI
//!
//! Reads a JSON share set and prints the constant term of the polynomial
//! through its first `k` shares.

use std::path::PathBuf;

use clap::Parser;
use rust_sss::{encode, ShareSet, ShareSetError, MAX_BASE, MIN_BASE};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    version,
    about = "Recover the secret constant term from a threshold set of polynomial shares."
)]
struct Args {
    /// JSON share set: {"keys": {"n", "k"}, "<x>": {"base", "value"}, ...}
    input: PathBuf,

    /// Radix used to print the secret
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(MIN_BASE as i64..=MAX_BASE as i64))]
    radix: u32,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ShareSetError> {
    let set = ShareSet::from_path(&args.input)?;

    info!(n = set.n(), k = set.k(), "loaded share set");

    let secret = set.reconstruct()?;

    println!("Secret (constant term C) = {}", encode(&secret, args.radix)?);

    Ok(())
}
