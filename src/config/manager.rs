use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::paths;
use crate::shell::{DEFAULT_SOURCE, DEFAULT_TARGET};
use crate::translation::DEFAULT_ENDPOINT;

/// Default settings in the `[gtrans]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GtransConfig {
    /// Initial source language code (`auto` to detect).
    pub source: Option<String>,
    /// Initial target language code.
    pub target: Option<String>,
    /// Base URL of the translation service.
    pub endpoint: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtrans/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtrans: GtransConfig,
}

/// Settings a session starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub source: String,
    pub target: String,
    pub endpoint: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Merges CLI options, the config file and built-in defaults, in that order.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let pick = |cli: Option<&String>, file: Option<&String>, default: &str| {
        cli.or(file).cloned().unwrap_or_else(|| default.to_string())
    };

    ResolvedConfig {
        source: pick(
            options.from.as_ref(),
            config_file.gtrans.source.as_ref(),
            DEFAULT_SOURCE,
        ),
        target: pick(
            options.to.as_ref(),
            config_file.gtrans.target.as_ref(),
            DEFAULT_TARGET,
        ),
        endpoint: pick(
            options.endpoint.as_ref(),
            config_file.gtrans.endpoint.as_ref(),
            DEFAULT_ENDPOINT,
        ),
    }
}

/// Loads the read-only configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration lives at `$XDG_CONFIG_HOME/gtrans/config.toml`
    /// or `~/.config/gtrans/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Reads the config file; `Ok(None)` when it does not exist.
    pub fn load(&self) -> Result<Option<ConfigFile>> {
        let contents = match fs::read_to_string(&self.config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.config_path.display())
                });
            }
        };

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(Some(config_file))
    }
}
