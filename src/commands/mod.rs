//! Subcommand implementations and the setup they share.
pub mod completions;
pub mod list;
pub mod swap;
pub mod version;

use anyhow::{Context as _, Result};
use std::path::PathBuf;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, GlobalOpts};
use crate::config::{self, AppConfig};
use crate::logging::Log;
use crate::marketplace;
use crate::profiles::ProfileStore;

/// Shared state produced by the common command setup sequence.
///
/// Encapsulates configuration loading and marketplace resolution so that
/// each command does not have to repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    /// The resolved marketplace directory.
    pub marketplace: PathBuf,
    /// Store over `<marketplace>/profiles`.
    pub store: ProfileStore,
}

impl CommandSetup {
    /// Load configuration and resolve the profiles root.
    ///
    /// The marketplace override is taken from `--marketplace` (or its
    /// environment variable) first, then from the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is invalid or no
    /// marketplace root can be determined.
    pub fn init(global: &GlobalOpts, log: &dyn Log) -> Result<Self> {
        let config_path = global.config.clone().or_else(config::default_config_path);
        let app_config = match &config_path {
            Some(path) => {
                log.debug(&format!("config: {}", path.display()));
                AppConfig::load(path).context("loading configuration")?
            }
            None => AppConfig::default(),
        };

        let explicit = global.marketplace.as_deref().or(app_config.marketplace.as_deref());
        let marketplace = marketplace::resolve(explicit)?;
        log.debug(&format!("marketplace: {}", marketplace.display()));

        let store = ProfileStore::new(marketplace::profiles_root(&marketplace));
        Ok(Self { marketplace, store })
    }
}

/// Report the outcome of a command and return the process exit status.
///
/// A failure is logged as `fatal: <error chain>` at error level, which the
/// console layer sends to stderr.
pub fn finish(result: Result<()>, log: &dyn Log) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            log.error(&format!("fatal: {e:#}"));
            EXIT_FAILURE
        }
    }
}
