//! Initialize command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use logsmith_config::{CONFIG_FILE_NAME, Config};
use tracing::info;

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = Config::default()
        .to_toml_string()
        .context("failed to render default configuration")?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "created configuration");
    println!("Created {}", path.display());
    Ok(())
}
