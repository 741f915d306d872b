//! CLI subcommands.

pub mod commits;
pub mod init;

use std::path::Path;

use anyhow::{Context, Result};
use logsmith_config::{Config, ConfigError, find_and_load_config_from};
use tracing::debug;

/// Loads `logsmith.toml` from `dir` or a parent, falling back to defaults.
fn load_config_or_default(dir: &Path) -> Result<Config> {
    match find_and_load_config_from(dir) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        Err(err) => Err(err).context("failed to load configuration"),
    }
}
