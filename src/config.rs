use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::version::{is_valid_prefix, is_valid_suffix, MIN_HASH_LEN};
use crate::domain::Template;
use crate::error::{Error, Result};

/// File name searched for in the working directory and the user config directory.
pub const CONFIG_FILE_NAME: &str = "build-version.toml";

/// Longest hash a git object id can abbreviate to.
pub const MAX_HASH_LEN: usize = 40;

/// Represents the complete configuration for build-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Values the composer falls back to when a request leaves them open.
///
/// Read once at startup and passed by reference; never modified afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Defaults {
    /// Prefix emitted when a format requires one but none was supplied
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Suffix used when a suffix is requested without a value
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Format used when a request carries no signal at all
    #[serde(default)]
    pub template: Template,

    /// Length of hashes abbreviated from git object ids
    #[serde(default = "default_hash_length")]
    pub hash_length: usize,
}

/// Returns the default version prefix.
fn default_prefix() -> String {
    "v".to_string()
}

/// Returns the default suffix.
fn default_suffix() -> String {
    "rc".to_string()
}

/// Returns the default abbreviated hash length.
fn default_hash_length() -> usize {
    7
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            prefix: default_prefix(),
            suffix: default_suffix(),
            template: Template::DEFAULT,
            hash_length: default_hash_length(),
        }
    }
}

/// Naming of variables printed by `parse --export`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExportConfig {
    #[serde(default = "default_var_prefix")]
    pub var_prefix: String,
}

fn default_var_prefix() -> String {
    "VERSION".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            var_prefix: default_var_prefix(),
        }
    }
}

impl Config {
    /// Checks that configured defaults could appear in a valid version.
    pub fn validate(&self) -> Result<()> {
        let defaults = &self.defaults;
        if !is_valid_prefix(&defaults.prefix) {
            return Err(Error::config(format!(
                "default prefix '{}' must be non-empty and contain no digits or dots",
                defaults.prefix
            )));
        }
        if !is_valid_suffix(&defaults.suffix) {
            return Err(Error::config(format!(
                "default suffix '{}' may only contain letters, digits and '-'",
                defaults.suffix
            )));
        }
        if !(MIN_HASH_LEN..=MAX_HASH_LEN).contains(&defaults.hash_length) {
            return Err(Error::config(format!(
                "hash_length {} must be between {} and {}",
                defaults.hash_length, MIN_HASH_LEN, MAX_HASH_LEN
            )));
        }
        let var_prefix = &self.export.var_prefix;
        if var_prefix.is_empty()
            || !var_prefix
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(Error::config(format!(
                "export var_prefix '{}' must be a non-empty identifier",
                var_prefix
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `build-version.toml` in current directory
/// 3. `build-version.toml` in user config directory
/// 4. Default configuration if no file found
///
/// The loaded configuration is validated before it is returned.
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let config = match path {
        Some(path) => {
            let config_str = fs::read_to_string(&path)?;
            toml::from_str(&config_str).map_err(|e| {
                Error::config(format!("cannot parse '{}': {}", path.display(), e))
            })?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.prefix, "v");
        assert_eq!(config.defaults.suffix, "rc");
        assert_eq!(config.defaults.template.to_string(), "vX.YY.Z");
        assert_eq!(config.defaults.hash_length, 7);
        assert_eq!(config.export.var_prefix, "VERSION");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[defaults]
template = "X.YY.Z-rc"
"#,
        )
        .unwrap();
        assert_eq!(config.defaults.template.to_string(), "X.YY.Z-rc");
        assert_eq!(config.defaults.prefix, "v");
    }

    #[test]
    fn test_unknown_template_name_is_rejected() {
        let result: std::result::Result<Config, _> = toml::from_str(
            r#"
[defaults]
template = "vX.Y"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_defaults() {
        let mut config = Config::default();
        config.defaults.prefix = "v1".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.defaults.suffix = "rc.1".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.defaults.hash_length = 4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.export.var_prefix = "MY-APP".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serializes_template_by_name() {
        let out = toml::to_string(&Config::default()).unwrap();
        assert!(out.contains("template = \"vX.YY.Z\""), "got: {}", out);
    }
}
