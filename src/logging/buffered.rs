//! In-memory logger that captures output for inspection.
use std::sync::Mutex;

use super::types::Log;

/// A single buffered log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A stage header entry.
    Stage(String),
    /// An informational entry.
    Info(String),
    /// A debug entry.
    Debug(String),
    /// A warning entry.
    Warn(String),
    /// An error entry.
    Error(String),
    /// A dry-run entry.
    DryRun(String),
}

impl LogEntry {
    /// The message text, without its level.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Stage(msg)
            | Self::Info(msg)
            | Self::Debug(msg)
            | Self::Warn(msg)
            | Self::Error(msg)
            | Self::DryRun(msg) => msg,
        }
    }
}

/// Implement the methods of [`Log`] by buffering each message into
/// `self.entries` as the corresponding [`LogEntry`] variant.
macro_rules! buffer_log_methods {
    ($($method:ident => $variant:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                if let Ok(mut guard) = self.entries.lock() {
                    guard.push(LogEntry::$variant(msg.to_string()));
                }
            }
        )+
    };
}

/// Logger that keeps every message in memory.
///
/// Entries can be inspected with [`entries`](Self::entries) or
/// [`messages`](Self::messages).
#[derive(Debug, Default)]
pub struct BufferedLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl BufferedLog {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Return a copy of all buffered entries.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Return the message text of every entry, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|e| e.message().to_string())
            .collect()
    }
}

impl Log for BufferedLog {
    buffer_log_methods!(
        stage => Stage,
        info => Info,
        debug => Debug,
        warn => Warn,
        error => Error,
        dry_run => DryRun,
    );
}
