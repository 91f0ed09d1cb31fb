//! Configuration management
//!
//! Settings come from a TOML file: `./brickset.toml` if present, otherwise
//! `~/.brickset/config.toml`. Every field has a default, so a missing file
//! or a partial one is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paths;

/// brickset configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BricksetConfig {
    /// Data source settings
    #[serde(default)]
    pub data: DataConfig,
    /// Parameters of the report queries
    #[serde(default)]
    pub queries: QueryParams,
}

/// Data source settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Data file to load; `None` uses the default file or the bundled dataset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Parameters of the report queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Largest tag count for the tag threshold query
    pub max_tags: usize,
    /// Tag to count
    pub tag: String,
    /// Name prefix to search for
    pub name_prefix: String,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            max_tags: 2,
            tag: "Microscale".to_string(),
            name_prefix: "rock".to_string(),
        }
    }
}

impl BricksetConfig {
    /// Load config from the first existing default location, or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        for path in [paths::local_config(), paths::global_config()] {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load config from an explicit path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Data file to load, if one should be read from disk
    ///
    /// The configured path wins; otherwise the default data file is used when
    /// it exists. `None` means the bundled dataset.
    #[must_use]
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data.path.clone().or_else(|| {
            let default = paths::default_data_file();
            default.exists().then_some(default)
        })
    }
}
