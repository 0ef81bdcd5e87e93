//! Configuration management.
//!
//! Settings are layered, lowest precedence first:
//! - Built-in defaults
//! - `config.json` in the platform config directory
//! - `RESNAME_*` environment variables
//! - Command-line flags (applied by the commands themselves)

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use resname_catalog::Registry;
use resname_naming::DEFAULT_SEPARATOR;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the catalog path.
const ENV_CATALOG: &str = "RESNAME_CATALOG";

/// Environment variable overriding the default separator.
const ENV_SEPARATOR: &str = "RESNAME_SEPARATOR";

/// Environment variable overriding the log level.
const ENV_LOG_LEVEL: &str = "RESNAME_LOG_LEVEL";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("io", "resname", "resname")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Replacement catalog file (JSON). The bundled catalog is used if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default separator for generated names.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            separator: default_separator(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk (if present) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(catalog) = lookup(ENV_CATALOG).filter(|v| !v.is_empty()) {
            self.catalog = Some(PathBuf::from(catalog));
        }
        if let Some(separator) = lookup(ENV_SEPARATOR) {
            self.separator = separator;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
    }

    /// Load the resource registry this config points at.
    pub fn registry(&self) -> Result<Cow<'static, Registry>> {
        match &self.catalog {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read catalog from {:?}", path))?;
                let registry = Registry::from_json(&contents)
                    .with_context(|| format!("Failed to load catalog from {:?}", path))?;
                debug!(path = %path.display(), resource_types = registry.len(), "catalog loaded");
                Ok(Cow::Owned(registry))
            }
            None => Ok(Cow::Borrowed(Registry::builtin()?)),
        }
    }
}
