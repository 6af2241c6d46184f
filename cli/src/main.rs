//! `pizzafy-cli` entry point.

use anyhow::Result;
use clap::Parser;
use pizzafy_cli::{cli, commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Default to warn-level logs so command output stays readable; override via RUST_LOG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = cli::Cli::parse();
    print!("{}", commands::run(cli)?);
    Ok(())
}
