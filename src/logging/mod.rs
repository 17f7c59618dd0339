//! Console and log file output.
//!
//! Commands report through the [`Log`] trait. [`Logger`] sends messages to
//! the tracing subscriber installed by [`init_subscriber`]; [`BufferedLog`]
//! keeps them in memory so tests can inspect what a command printed.

mod buffered;
mod logger;
mod subscriber;
mod types;
mod utils;

pub use buffered::{BufferedLog, LogEntry};
pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::Log;

/// Target used for stage headers.
pub(crate) const STAGE_TARGET: &str = "swap_profile::stage";

/// Target used for dry-run messages.
pub(crate) const DRY_RUN_TARGET: &str = "swap_profile::dry_run";

/// A [`Logger`] whose events land in a temporary log file for the duration
/// of one test thread.
#[cfg(test)]
pub(crate) struct CapturedLog {
    pub(crate) logger: Logger,
    pub(crate) path: std::path::PathBuf,
    _dir: tempfile::TempDir,
    _guard: tracing::dispatcher::DefaultGuard,
}

#[cfg(test)]
impl CapturedLog {
    /// Everything written to the log file so far.
    #[allow(clippy::expect_used)]
    pub(crate) fn contents(&self) -> String {
        std::fs::read_to_string(&self.path).expect("read log file")
    }
}

/// Install a thread-local subscriber with only a file layer and return a
/// logger that writes through it.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn capture_to_file() -> CapturedLog {
    use tracing_subscriber::{Layer as _, filter::LevelFilter, layer::SubscriberExt as _};
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.log");
    let layer = subscriber::FileLayer::open(&path, "test").expect("open log file");
    let dispatch = tracing::Dispatch::new(
        tracing_subscriber::registry().with(layer.with_filter(LevelFilter::DEBUG)),
    );
    CapturedLog {
        logger: Logger::new(),
        path,
        _dir: dir,
        _guard: tracing::dispatcher::set_default(&dispatch),
    }
}
