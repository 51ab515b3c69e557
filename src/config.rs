//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/lcfixture/lcfixture.toml`
//! 3. Local config: `<project_dir>/.lcfixture.toml`
//! 4. Environment variables: `LCFIXTURE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::render::{OutputFormat, DEFAULT_NULL_TOKEN};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub null_token: Option<String>,
    pub format: Option<OutputFormat>,
}

/// Unified configuration for lcfixture.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Token printed for absent nodes (default: "None")
    pub null_token: String,
    /// Output format when `--format` is not given (default: flat)
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            null_token: DEFAULT_NULL_TOKEN.to_string(),
            format: OutputFormat::default(),
        }
    }
}

/// Get the XDG config directory for lcfixture.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "lcfixture").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("lcfixture.toml"))
}

/// Get the path to the local config file in a project directory.
pub fn local_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".lcfixture.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ConfigResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_format(key: &str, value: &str) -> ConfigResult<OutputFormat> {
    OutputFormat::from_str(value, true).map_err(|message| ConfigError::Invalid {
        key: key.to_string(),
        message,
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            null_token: overlay
                .null_token
                .clone()
                .unwrap_or_else(|| self.null_token.clone()),
            format: overlay.format.unwrap_or(self.format),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `project_dir` - Optional project directory holding a local `.lcfixture.toml`
    pub fn load(project_dir: Option<&Path>) -> ConfigResult<Self> {
        Self::load_from(global_config_path().as_deref(), project_dir)
    }

    /// Like [`Settings::load`], with an explicit global config file.
    ///
    /// A missing file at `global_path` (or `None`) skips the global layer.
    #[instrument(level = "debug")]
    pub fn load_from(global_path: Option<&Path>, project_dir: Option<&Path>) -> ConfigResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path.filter(|p| p.exists()) {
            debug!(path = %global_path.display(), "loading global config");
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        // 3. Local config
        if let Some(dir) = project_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables
        Self::apply_env_overrides(current)
    }

    /// Apply LCFIXTURE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ConfigResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("LCFIXTURE").separator("__"))
            .build()?;

        if let Ok(val) = config.get_string("null_token") {
            settings.null_token = val;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = parse_format("LCFIXTURE_FORMAT", &val)?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# lcfixture configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/lcfixture/lcfixture.toml
#   Local:  <project_dir>/.lcfixture.toml
#   Env:    LCFIXTURE_* environment variables (explicit overrides)

# Token printed for absent nodes: "None" (Python style) or "null" (JSON style)
# null_token = "None"

# Output format when --format is not given: "flat", "json" or "diagram"
# format = "flat"
"#
        .to_string()
    }
}
