//! Command: apply a profile to a project.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::CommandSetup;
use crate::cli::{GlobalOpts, SwapOpts};
use crate::logging::Log;
use crate::profiles::{FileOutcome, LOCAL_SETTINGS_FILE, ProfileStore, SwapSummary};

/// Run the swap command.
///
/// # Errors
///
/// Returns an error if the marketplace cannot be resolved, the profile is
/// unknown or malformed, or the target cannot be written.
pub fn run(global: &GlobalOpts, opts: &SwapOpts, log: &dyn Log) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    let target = match &opts.target {
        Some(target) => target.clone(),
        None => std::env::current_dir().context("resolving current directory")?,
    };
    apply(&setup.store, &opts.name, target, global.dry_run, log).map(|_| ())
}

/// Swap `name` into `target` and report the outcome to `log`.
///
/// # Errors
///
/// Propagates any [`ProfileError`](crate::error::ProfileError) from the swap.
pub fn apply(
    store: &ProfileStore,
    name: &str,
    target: PathBuf,
    dry_run: bool,
    log: &dyn Log,
) -> Result<SwapSummary> {
    log.stage(&format!("Swapping profile \"{name}\""));
    log.debug(&format!("profiles root: {}", store.root().display()));

    let summary = store.swap(name, &target, dry_run)?;
    report(&summary, log);
    Ok(summary)
}

/// Print the per-file results and the closing summary.
pub fn report(summary: &SwapSummary, log: &dyn Log) {
    for file in &summary.files {
        let dest = file.dest.display();
        match file.outcome {
            FileOutcome::Written => log.info(&format!("Copied {} -> {dest}", file.name)),
            FileOutcome::Unchanged => log.info(&format!("Unchanged {} ({dest})", file.name)),
            FileOutcome::WouldWrite => log.dry_run(&format!("Would copy {} -> {dest}", file.name)),
            FileOutcome::LeftInPlace => log.warn(&format!(
                "Kept existing {} ({dest}); profile \"{}\" does not provide one",
                file.name, summary.profile
            )),
        }
    }

    if summary.config_dir.join(LOCAL_SETTINGS_FILE).exists() {
        log.debug(&format!("kept {LOCAL_SETTINGS_FILE}"));
    }

    let target = summary.target.display();
    if summary.dry_run {
        log.info(&format!(
            "Profile \"{}\" would be applied to {target}",
            summary.profile
        ));
    } else {
        log.info(&format!("Profile \"{}\" applied to {target}", summary.profile));
    }

    if summary.enabled_plugins.is_empty() {
        log.info("No plugins enabled.");
    } else {
        log.info(&format!(
            "Enabled plugins: {}",
            summary.enabled_plugins.join(", ")
        ));
    }

    if !summary.dry_run {
        log.info(
            "Claude Code will prompt to install marketplaces and plugins on next session.",
        );
    }
}
