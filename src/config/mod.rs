//! Configuration system for secrets9s
//!
//! A single YAML file layered over built-in defaults, with environment
//! variable overrides on top.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, UiConfig};

use anyhow::Context;

/// Keys accepted by `config get` / `config set`
pub const CONFIG_KEYS: &[&str] = &[
    "readOnly",
    "defaultNamespace",
    "ui.enableMouse",
    "ui.noIcons",
    "ui.tickRateMs",
];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "readOnly" => Ok(config.read_only.to_string()),
        "defaultNamespace" => Ok(config.default_namespace.clone()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.noIcons" => Ok(config.ui.no_icons.to_string()),
        "ui.tickRateMs" => Ok(config.ui.tick_rate_ms.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "readOnly" => {
            config.read_only = value
                .parse()
                .context("readOnly must be 'true' or 'false'")?;
        }
        "defaultNamespace" => {
            config.default_namespace = value.to_string();
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.noIcons" => {
            config.ui.no_icons = value
                .parse()
                .context("ui.noIcons must be 'true' or 'false'")?;
        }
        "ui.tickRateMs" => {
            let tick: u64 = value.parse().context("ui.tickRateMs must be a number")?;
            if tick == 0 {
                return Err(anyhow::anyhow!("ui.tickRateMs must be greater than 0"));
            }
            config.ui.tick_rate_ms = tick;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_round_trips() {
        let mut config = Config::default();
        for key in CONFIG_KEYS {
            let value = get_config_value(&config, key).unwrap();
            set_config_value(&mut config, key, &value).unwrap();
        }
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(set_config_value(&mut config, "readOnly", "yes").is_err());
        assert!(set_config_value(&mut config, "ui.tickRateMs", "0").is_err());
        assert!(set_config_value(&mut config, "ui.skin", "dark").is_err());
    }
}
