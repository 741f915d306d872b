//! Configuration loader.

use std::path::Path;

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "logsmith.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;

    Ok(config)
}

/// Finds and loads configuration starting from the given directory.
///
/// Walks up the directory tree until a configuration file is found.
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();

    for dir in start_dir.ancestors() {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return load_config(config_path);
        }
    }

    Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/logsmith.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("logsmith.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_valid() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [scope_map]
            ui = "interface"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.scope_map.get("ui").unwrap(), "interface");
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        // Default values should be used
        let config = load_config(&config_path).unwrap();
        assert!(config.types.contains_key("fix"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::InvalidToml(_))
        ));
    }

    #[test]
    fn test_load_config_runs_validation() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [types."feat!"]
            title = "Bad"
        "#,
        )
        .unwrap();

        assert!(matches!(
            load_config(&config_path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(
            parent_dir.path().join(CONFIG_FILE_NAME),
            r#"
            require_clean = true
        "#,
        )
        .unwrap();

        let child_dir = parent_dir.path().join("subdir");
        fs::create_dir(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir).unwrap();
        assert!(config.require_clean);
    }
}
