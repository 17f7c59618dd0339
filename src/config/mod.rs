//! Tool configuration and the profile settings schema.
//!
//! The configuration file is optional TOML at
//! `$XDG_CONFIG_HOME/swap-profile/config.toml` (or
//! `~/.config/swap-profile/config.toml`). A missing file yields
//! [`AppConfig::default`].
pub mod settings;
pub mod toml_loader;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory name used under the XDG config and cache homes.
pub const APP_DIR: &str = "swap-profile";

/// Errors that arise from loading the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("IO error reading config file {}: {source}", .path.display())]
    Read {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML or contains unknown keys.
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },
}

/// Settings read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Marketplace directory to use when `--marketplace` is not given.
    pub marketplace: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        toml_loader::load_config(path)
    }
}

/// Default configuration file location.
///
/// Honors `XDG_CONFIG_HOME`, then falls back to `~/.config`. Returns `None`
/// if neither can be determined.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;
    Some(base.join(APP_DIR).join("config.toml"))
}
