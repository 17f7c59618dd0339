//! Logger backed by the global tracing subscriber.
use super::types::Log;
use super::{DRY_RUN_TARGET, STAGE_TARGET};

/// Logger that emits every message as a [`tracing`] event.
///
/// Where the message ends up (console, log file) is decided by the
/// subscriber that [`init_subscriber`](super::init_subscriber) installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger;

impl Logger {
    /// Create a logger.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }
}
