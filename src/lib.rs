//! Profile swapping for Claude Code projects.
//!
//! A *profile* is a directory holding a `settings.json` (and optionally a
//! `CLAUDE.md`) under the `profiles/` tree of a plugin marketplace. This
//! crate lists those profiles and copies a chosen one into a project's
//! `.claude/` directory, leaving `settings.local.json` alone.
//!
//! The public API is organised into these layers:
//!
//! - **[`profiles`]**: discovery, validation, and the swap itself
//! - **[`marketplace`]**: where the profiles live
//! - **[`config`]**: the tool's TOML config and the `settings.json` schema
//! - **[`resources`]**: idempotent `check + apply` file primitives
//! - **[`commands`]**: top-level subcommand orchestration (`list`, `swap`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod marketplace;
pub mod profiles;
pub mod resources;

/// Serializes environment variable changes across parallel test threads.
#[cfg(test)]
static TEST_ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with `key` set to `value`, holding [`TEST_ENV_MUTEX`] throughout.
#[cfg(test)]
pub(crate) fn with_env_var<T>(key: &str, value: &str, f: impl FnOnce() -> T) -> T {
    let _lock = TEST_ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    // SAFETY: Protected by TEST_ENV_MUTEX; removed before the lock is released.
    #[allow(unsafe_code)]
    unsafe {
        std::env::set_var(key, value);
    }
    let result = f();
    // SAFETY: Protected by TEST_ENV_MUTEX.
    #[allow(unsafe_code)]
    unsafe {
        std::env::remove_var(key);
    }
    result
}
