//! Optional TOML configuration for the display tool.
//!
//! Everything has a sensible default; a config file only overrides
//! presentation details (truncation bound, fallback label/class, per-state
//! class overrides). Missing file means defaults, a present-but-broken file
//! is a hard error.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::truncate::DEFAULT_TRUNCATE_LEN;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "display.toml";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub truncate: TruncateConfig,
    pub fallback: FallbackConfig,
    /// Per-state CSS class overrides, keyed by the wire-form state name.
    pub classes: FxHashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    /// Visible-character bound before the ellipsis.
    pub size: usize,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_TRUNCATE_LEN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Name shown for an empty state.
    pub state_label: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            state_label: "None".to_owned(),
        }
    }
}

impl DisplayConfig {
    /// Load from an explicit path, or from `display.toml` if present.
    ///
    /// An explicit path must exist; the implicit default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_path(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read, parse and validate a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Per-state class override, if configured.
    pub fn class_override(&self, state: &str) -> Option<&str> {
        self.classes.get(state).map(String::as_str)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.truncate.size == 0 {
            return Err(ConfigError::Validation(
                "truncate.size must be at least 1".to_owned(),
            ));
        }
        for (state, class) in &self.classes {
            if state.is_empty() || class.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "classes entries must be non-empty (found `{state}` = `{class}`)"
                )));
            }
        }
        Ok(())
    }
}
