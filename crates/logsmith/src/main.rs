//! Logsmith CLI - Turn git history into classified conventional commits.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
