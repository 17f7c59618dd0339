//! Log file location, colour detection, and timestamps.
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::config::APP_DIR;

/// Directory holding the tool's log files.
///
/// `xdg_cache` wins when set and non-empty; otherwise `<home>/.cache` is
/// used. Returns `None` when neither is known, so nothing is written into
/// the working directory.
pub(super) fn log_dir_from(xdg_cache: Option<&OsStr>, home: Option<PathBuf>) -> Option<PathBuf> {
    let base = xdg_cache
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".cache")))?;
    Some(base.join(APP_DIR))
}

/// Path of the `<stem>.log` file for this process.
pub(super) fn log_file_path(stem: &str) -> Option<PathBuf> {
    let xdg = std::env::var_os("XDG_CACHE_HOME");
    log_dir_from(xdg.as_deref(), dirs::home_dir()).map(|dir| dir.join(format!("{stem}.log")))
}

/// Whether to colour a stream.
///
/// Colour needs a terminal and is switched off by a non-empty `NO_COLOR`.
pub(super) fn color_enabled(is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    is_terminal && no_color.is_none_or(OsStr::is_empty)
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`, used in run headers.
pub(super) fn utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Current UTC time as `HH:MM:SS`, used on each log line.
pub(super) fn utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
