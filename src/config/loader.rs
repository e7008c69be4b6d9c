//! Configuration loading and merging logic
//!
//! Precedence (highest to lowest): environment overrides, the root config
//! file, built-in defaults.

use super::{paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

pub const READ_ONLY_ENV: &str = "SECRETS9S_READ_ONLY";
pub const DEFAULT_NAMESPACE_ENV: &str = "SECRETS9S_DEFAULT_NAMESPACE";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// A missing file means defaults; an unreadable or invalid file is an error.
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::root_config_path())
    }

    /// Load configuration rooted at an explicit file path
    pub fn load_from(path: &Path) -> Result<Config> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            Self::load_defaults()
        };
        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is a valid, default configuration
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(read_only) = lookup(READ_ONLY_ENV) {
            match read_only.parse::<bool>() {
                Ok(val) => config.read_only = val,
                Err(_) => tracing::warn!("Ignoring {}={}: not a boolean", READ_ONLY_ENV, read_only),
            }
        }

        if let Some(namespace) = lookup(DEFAULT_NAMESPACE_ENV) {
            config.default_namespace = namespace;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_missing_and_empty_files() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        assert!(ConfigLoader::load_file(&path).is_err());

        std::fs::write(&path, "\n").unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("config.yaml");
        let config = Config {
            read_only: true,
            default_namespace: "team-a".to_string(),
            ..Default::default()
        };

        ConfigLoader::save(&config, &path).unwrap();
        assert_eq!(ConfigLoader::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "readOnly: maybe\n").unwrap();
        assert!(ConfigLoader::load_file(&path).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (READ_ONLY_ENV, "true"),
            (DEFAULT_NAMESPACE_ENV, "all"),
        ]
        .into_iter()
        .collect();

        let config = ConfigLoader::apply_overrides(Config::default(), |key| {
            vars.get(key).map(|v| v.to_string())
        });
        assert!(config.read_only);
        assert_eq!(config.default_namespace, "all");
    }

    #[test]
    fn test_bad_override_is_ignored() {
        let config = ConfigLoader::apply_overrides(Config::default(), |key| {
            (key == READ_ONLY_ENV).then(|| "yes".to_string())
        });
        assert!(!config.read_only);
    }
}
