use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::branch::TRUNK_BRANCH;

/// Represents the complete configuration for version-gate.
///
/// Covers the pieces the version computation historically re-derived ad hoc:
/// the trunk branch name, the environment variable consulted for the
/// external reference on detached checkouts, and the publish channel names.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,

    #[serde(default = "default_ref_env_var")]
    pub ref_env_var: String,

    #[serde(default)]
    pub channels: ChannelsConfig,
}

/// Returns the default trunk branch name.
fn default_trunk_branch() -> String {
    TRUNK_BRANCH.to_string()
}

/// Returns the default environment variable holding the external reference.
fn default_ref_env_var() -> String {
    "GITHUB_REF_NAME".to_string()
}

/// Names of the remote repositories artifacts are routed to.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChannelsConfig {
    #[serde(default = "default_production_channel")]
    pub production: String,

    #[serde(default = "default_snapshot_channel")]
    pub snapshot: String,
}

fn default_production_channel() -> String {
    "releases".to_string()
}

fn default_snapshot_channel() -> String {
    "snapshots".to_string()
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        ChannelsConfig {
            production: default_production_channel(),
            snapshot: default_snapshot_channel(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trunk_branch: default_trunk_branch(),
            ref_env_var: default_ref_env_var(),
            channels: ChannelsConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versiongate.toml` in current directory
/// 3. `.versiongate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./versiongate.toml").exists() {
        fs::read_to_string("./versiongate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".versiongate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.trunk_branch, "main");
        assert_eq!(config.ref_env_var, "GITHUB_REF_NAME");
        assert_eq!(config.channels.production, "releases");
        assert_eq!(config.channels.snapshot, "snapshots");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(r#"trunk_branch = "master""#).unwrap();
        assert_eq!(config.trunk_branch, "master");
        assert_eq!(config.ref_env_var, "GITHUB_REF_NAME");
        assert_eq!(config.channels, ChannelsConfig::default());
    }

    #[test]
    fn test_channels_section() {
        let toml_content = r#"
[channels]
production = "maven-central"
snapshot = "staging"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.channels.production, "maven-central");
        assert_eq!(config.channels.snapshot, "staging");
    }
}
