//! Centralized path definitions for brickset
//!
//! ## Layout
//!
//! ```text
//! project/
//! ├── brickset.toml            # Local config (optional)
//! └── data/brickset.json       # Default data file (optional)
//!
//! ~/.brickset/
//! └── config.toml              # Global config (optional)
//! ```
//!
//! When no data file is configured and the default one is missing, the
//! dataset bundled into the binary is used.

use std::path::PathBuf;

/// Local configuration filename
pub const LOCAL_CONFIG_FILE: &str = "brickset.toml";

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data/brickset.json";

/// Global config directory name
const GLOBAL_DIR: &str = ".brickset";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the local config path (`./brickset.toml`).
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(LOCAL_CONFIG_FILE)
}

/// Get the default data file path (`./data/brickset.json`).
#[must_use]
pub fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

/// Get the global brickset directory.
///
/// Returns `~/.brickset/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.brickset/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
