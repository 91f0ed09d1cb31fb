//! Error types for loading data and configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a record source
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("cannot read data file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The data could not be deserialized into records
    #[error("malformed data in {origin}: {source}")]
    Parse {
        /// Where the data came from (file path or resource name)
        origin: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`BricksetConfig`](crate::config::BricksetConfig)
    #[error("invalid config file {path}: {source}")]
    Parse {
        /// Path that was being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },
}
