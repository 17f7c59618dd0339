//! Command: list the available profiles.
use anyhow::Result;

use super::CommandSetup;
use crate::cli::GlobalOpts;
use crate::logging::Log;
use crate::profiles::{ListingStatus, ProfileListing, ProfileStore};

const NAME_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 10;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the marketplace cannot be resolved or the profiles
/// root cannot be scanned.
pub fn run(global: &GlobalOpts, log: &dyn Log) -> Result<()> {
    let setup = CommandSetup::init(global, log)?;
    report(&setup.store, log)
}

/// List the profiles in `store` to `log`.
///
/// # Errors
///
/// Returns an error if the profiles root cannot be scanned. Individual
/// profiles that fail to load are shown as errored instead.
pub fn report(store: &ProfileStore, log: &dyn Log) -> Result<()> {
    let listings = store.list()?;

    if listings.is_empty() {
        log.info(&format!("No profiles found in {}", store.root().display()));
        return Ok(());
    }

    log.stage("Available profiles");
    for line in render_table(&listings) {
        log.info(&line);
    }
    for listing in &listings {
        if let ListingStatus::Errored { reason } = &listing.status {
            log.debug(&format!("{}: {reason}", listing.name));
        }
    }
    Ok(())
}

/// Render the listing as aligned table lines, header first.
#[must_use]
pub fn render_table(listings: &[ProfileListing]) -> Vec<String> {
    let mut lines = vec![
        format!("{:<NAME_WIDTH$}{:<COUNT_WIDTH$}Enabled", "Profile", "Plugins"),
        "-".repeat(50),
    ];
    lines.extend(listings.iter().map(render_row));
    lines
}

fn render_row(listing: &ProfileListing) -> String {
    let (count, plugins) = match &listing.status {
        ListingStatus::Loaded { enabled } if enabled.is_empty() => {
            ("0".to_string(), "(none)".to_string())
        }
        ListingStatus::Loaded { enabled } => (enabled.len().to_string(), enabled.join(", ")),
        ListingStatus::Errored { .. } => ("?".to_string(), "(error reading)".to_string()),
    };
    format!("{:<NAME_WIDTH$}{count:<COUNT_WIDTH$}{plugins}", listing.name)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::logging::{BufferedLog, LogEntry};

    fn loaded(name: &str, enabled: &[&str]) -> ProfileListing {
        ProfileListing {
            name: name.to_string(),
            status: ListingStatus::Loaded {
                enabled: enabled.iter().map(ToString::to_string).collect(),
            },
        }
    }

    #[test]
    fn header_and_rule_come_first() {
        let lines = render_table(&[]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Profile             Plugins   Enabled"));
        assert_eq!(lines[1], "-".repeat(50));
    }

    #[test]
    fn row_shows_count_and_plugins() {
        let row = render_row(&loaded("default", &["foo@bar", "baz@qux"]));
        assert_eq!(
            row,
            format!("{:<20}{:<10}{}", "default", "2", "foo@bar, baz@qux")
        );
    }

    #[test]
    fn row_without_plugins_shows_none() {
        let row = render_row(&loaded("bare", &[]));
        assert!(row.starts_with("bare"));
        assert!(row.ends_with("0         (none)"));
    }

    #[test]
    fn errored_row_shows_placeholder() {
        let row = render_row(&ProfileListing {
            name: "broken".to_string(),
            status: ListingStatus::Errored {
                reason: "bad json".to_string(),
            },
        });
        assert!(row.ends_with("?         (error reading)"));
    }

    #[test]
    fn empty_root_prints_only_notice() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path());
        let log = BufferedLog::new();
        report(&store, &log).unwrap();
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert!(matches!(&entries[0], LogEntry::Info(msg) if msg.starts_with("No profiles found")));
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("absent"));
        let log = BufferedLog::new();
        assert!(report(&store, &log).is_err());
        assert!(log.entries().is_empty());
    }
}
