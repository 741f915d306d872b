//! Configuration schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Refuse to run when the working tree has uncommitted changes.
    #[serde(default)]
    pub require_clean: bool,

    /// Commit range configuration.
    #[serde(default)]
    pub range: RangeConfig,

    /// Scope aliases (raw scope -> canonical scope).
    #[serde(default)]
    pub scope_map: BTreeMap<String, String>,

    /// Commit types kept in the output, keyed by type name.
    #[serde(default = "default_types")]
    pub types: BTreeMap<String, TypeConfig>,

    /// Commit selection rules.
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            require_clean: false,
            range: RangeConfig::default(),
            scope_map: BTreeMap::new(),
            types: default_types(),
            filter: FilterConfig::default(),
        }
    }
}

impl Config {
    /// Checks values that deserialize fine but cannot be honored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for type names that are not made of
    /// lower-case ASCII letters and for empty scope aliases.
    pub fn validate(&self) -> ConfigResult<()> {
        for name in self.types.keys() {
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "type name must be made of lower-case ASCII letters: {name:?}"
                )));
            }
        }

        if self.scope_map.keys().any(String::is_empty) {
            return Err(ConfigError::Invalid(
                "scope_map keys must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Commit range configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Start of the range (exclusive). Defaults to the previous tag.
    pub from: Option<String>,

    /// End of the range. Defaults to the tag at HEAD, then the current branch.
    pub to: Option<String>,
}

/// A commit type section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeConfig {
    /// Section title used by changelog renderers.
    pub title: String,
}

impl TypeConfig {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

fn default_types() -> BTreeMap<String, TypeConfig> {
    [
        ("feat", "Enhancements"),
        ("perf", "Performance"),
        ("fix", "Fixes"),
        ("refactor", "Refactors"),
        ("docs", "Documentation"),
        ("build", "Build"),
        ("types", "Types"),
        ("chore", "Chore"),
        ("examples", "Examples"),
        ("test", "Tests"),
        ("style", "Styles"),
        ("ci", "CI"),
    ]
    .into_iter()
    .map(|(name, title)| (name.to_string(), TypeConfig::new(title)))
    .collect()
}

/// Commit selection rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Drop commits whose description starts with `release `.
    #[serde(default = "default_true")]
    pub exclude_releases: bool,

    /// Drop non-breaking `chore(deps)` commits.
    #[serde(default = "default_true")]
    pub exclude_dependency_updates: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_releases: true,
            exclude_dependency_updates: true,
        }
    }
}

fn default_true() -> bool {
    true
}
