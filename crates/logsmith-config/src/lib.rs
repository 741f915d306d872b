//! Configuration management for Logsmith.
//!
//! This crate handles loading and validating the `logsmith.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config};
pub use schema::{Config, FilterConfig, RangeConfig, TypeConfig};
