//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Hide delete actions
    #[serde(default)]
    pub read_only: bool,

    /// Namespace to watch; "all" or empty watches every namespace
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiConfig {
    /// Enable mouse support
    #[serde(default)]
    pub enable_mouse: bool,

    /// Disable Unicode icons for compatibility
    #[serde(default)]
    pub no_icons: bool,

    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_namespace() -> String {
    "demo".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            read_only: false,
            default_namespace: default_namespace(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: false,
            no_icons: false,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(!config.read_only);
        assert_eq!(config.default_namespace, "demo");
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_config_serialization() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("readOnly"));
        assert!(yaml.contains("defaultNamespace"));
        assert!(yaml.contains("tickRateMs"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
readOnly: true
defaultNamespace: team-a
ui:
  noIcons: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.read_only);
        assert_eq!(config.default_namespace, "team-a");
        assert!(config.ui.no_icons);
        assert_eq!(config.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(serde_yaml::from_str::<Config>("skin: dracula").is_err());
    }
}
