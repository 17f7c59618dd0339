//! Domain-specific error types for profile discovery and swapping.
//!
//! Library modules return [`ProfileError`]; command handlers at the CLI
//! boundary convert it to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error taxonomy
//!
//! ```text
//! ProfileError
//! ├── MarketplaceUnresolved ─┐
//! ├── RootNotFound           │
//! ├── ProfileNotFound        ├─ ErrorKind::NotFound
//! ├── SettingsNotFound      ─┘
//! ├── Malformed          ── ErrorKind::Malformed
//! └── Io                 ── ErrorKind::Io
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse classification of a [`ProfileError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The marketplace, the profiles root, a named profile, or its settings
    /// document is absent.
    NotFound,
    /// A settings document exists but does not parse into the expected shape.
    Malformed,
    /// A read, copy, or create operation failed.
    Io,
}

/// Errors raised by the profile manager.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No override was given, the executable is not inside a marketplace,
    /// and the home directory is unknown.
    #[error("cannot determine marketplace root. Use --marketplace or set SWAP_PROFILE_MARKETPLACE")]
    MarketplaceUnresolved,

    /// The profiles root does not exist or is not a directory.
    #[error("profiles root not found: {}", .path.display())]
    RootNotFound {
        /// The path that was expected to be a directory.
        path: PathBuf,
    },

    /// The requested profile is not among the discovered profiles.
    #[error("profile '{name}' not found (available: {})", .available.join(", "))]
    ProfileNotFound {
        /// The name that was requested.
        name: String,
        /// Every valid profile name, in discovery order.
        available: Vec<String>,
    },

    /// The profile directory has no settings document.
    #[error("settings document not found: {}", .path.display())]
    SettingsNotFound {
        /// Path of the missing `settings.json`.
        path: PathBuf,
    },

    /// The settings document is not valid JSON of the expected shape.
    #[error("malformed settings document {}: {source}", .path.display())]
    Malformed {
        /// Path of the offending `settings.json`.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// A filesystem operation failed.
    #[error("{action} {}: {source}", .path.display())]
    Io {
        /// Short description of the failed operation (e.g. `"copying"`).
        action: &'static str,
        /// Path the operation was acting on.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

impl ProfileError {
    /// Build an [`ProfileError::Io`] for `path`.
    pub(crate) fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MarketplaceUnresolved
            | Self::RootNotFound { .. }
            | Self::ProfileNotFound { .. }
            | Self::SettingsNotFound { .. } => ErrorKind::NotFound,
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}
