//! Profile discovery, validation, and application.
//!
//! A profile is a directory under the profiles root that directly contains a
//! `settings.json`. Swapping a profile into a project copies that file, plus
//! `CLAUDE.md` when the profile has one, into `<project>/.claude/`. Nothing
//! else in `.claude/` is touched, so `settings.local.json` always survives.
use std::io;
use std::path::{Path, PathBuf};

use crate::config::settings::ProfileSettings;
use crate::error::ProfileError;
use crate::resources::file_copy::FileCopyResource;
use crate::resources::{Resource, ResourceChange};

/// Required settings document inside a profile.
pub const SETTINGS_FILE: &str = "settings.json";

/// Optional documentation file inside a profile.
pub const DOC_FILE: &str = "CLAUDE.md";

/// Per-project override file that a swap never touches.
pub const LOCAL_SETTINGS_FILE: &str = "settings.local.json";

/// Configuration directory created under the swap target.
pub const CONFIG_DIR: &str = ".claude";

/// Files copied by a swap, in order, with whether each is required.
const SWAPPED_FILES: &[(&str, bool)] = &[(SETTINGS_FILE, true), (DOC_FILE, false)];

/// One row of a profile listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListing {
    /// Profile directory name.
    pub name: String,
    /// Outcome of loading the profile's settings.
    pub status: ListingStatus,
}

/// Whether a listed profile could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    /// Settings loaded; holds the enabled plugins in document order.
    Loaded {
        /// Enabled plugin identifiers.
        enabled: Vec<String>,
    },
    /// Settings could not be loaded.
    Errored {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// What happened to one file during a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file was created or overwritten.
    Written,
    /// The destination already had identical content.
    Unchanged,
    /// Dry run: the file would have been created or overwritten.
    WouldWrite,
    /// The profile has no such file; the copy already in the target was
    /// left as it was.
    LeftInPlace,
}

/// A file handled by a swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwappedFile {
    /// File name within the profile (e.g. `settings.json`).
    pub name: &'static str,
    /// Destination path in the target configuration directory.
    pub dest: PathBuf,
    /// Result for this file.
    pub outcome: FileOutcome,
}

/// Result of a successful swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapSummary {
    /// Name of the applied profile.
    pub profile: String,
    /// The project directory the profile was applied to.
    pub target: PathBuf,
    /// The `.claude` directory inside `target`.
    pub config_dir: PathBuf,
    /// Files handled, in copy order.
    pub files: Vec<SwappedFile>,
    /// Enabled plugins of the applied profile.
    pub enabled_plugins: Vec<String>,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Read-only view over a profiles root.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    /// Create a store for the profiles under `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The profiles root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of the named profile (not checked for existence).
    #[must_use]
    pub fn profile_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Names of all profiles, sorted lexicographically.
    ///
    /// Only real directories count; a symlink to a directory is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::RootNotFound`] if the root is missing or not a
    /// directory, or [`ProfileError::Io`] if it cannot be read.
    pub fn discover(&self) -> Result<Vec<String>, ProfileError> {
        if !self.root.is_dir() {
            return Err(ProfileError::RootNotFound {
                path: self.root.clone(),
            });
        }

        let entries = std::fs::read_dir(&self.root)
            .map_err(|e| ProfileError::io("reading directory", &self.root, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ProfileError::io("reading entry in", &self.root, e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| ProfileError::io("reading file type of", &entry.path(), e))?;
            if !file_type.is_dir() || !entry.path().join(SETTINGS_FILE).is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Read and parse the named profile's settings document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::SettingsNotFound`] if the profile or its
    /// settings document is absent (or `name` is not a plain directory
    /// name), [`ProfileError::Malformed`] if the document does not parse,
    /// and [`ProfileError::Io`] for other read failures.
    pub fn load_settings(&self, name: &str) -> Result<ProfileSettings, ProfileError> {
        let path = self.profile_dir(name).join(SETTINGS_FILE);
        if !is_plain_name(name) {
            return Err(ProfileError::SettingsNotFound { path });
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ProfileError::SettingsNotFound { path });
            }
            Err(e) => return Err(ProfileError::io("reading", &path, e)),
        };

        serde_json::from_str(&content).map_err(|source| ProfileError::Malformed { path, source })
    }

    /// List every profile with its enabled plugins.
    ///
    /// A profile whose settings cannot be loaded is reported as
    /// [`ListingStatus::Errored`]; the remaining profiles are still listed.
    ///
    /// # Errors
    ///
    /// Returns an error only if discovery itself fails.
    pub fn list(&self) -> Result<Vec<ProfileListing>, ProfileError> {
        Ok(self
            .discover()?
            .into_iter()
            .map(|name| {
                let status = match self.load_settings(&name) {
                    Ok(settings) => ListingStatus::Loaded {
                        enabled: settings.enabled_plugins(),
                    },
                    Err(e) => ListingStatus::Errored {
                        reason: e.to_string(),
                    },
                };
                ProfileListing { name, status }
            })
            .collect())
    }

    /// Apply the named profile to `target`.
    ///
    /// Validation (profile exists, settings parse) completes before anything
    /// is written. Files are then copied in order; the first failure aborts
    /// the swap, leaving earlier copies in place.
    ///
    /// With `dry_run`, the same checks run but nothing is created or written.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::ProfileNotFound`] for an unknown name,
    /// [`ProfileError::Malformed`] for unparseable settings, and
    /// [`ProfileError::Io`] if the target cannot be written.
    pub fn swap(
        &self,
        name: &str,
        target: &Path,
        dry_run: bool,
    ) -> Result<SwapSummary, ProfileError> {
        let available = self.discover()?;
        if !available.iter().any(|n| n == name) {
            return Err(ProfileError::ProfileNotFound {
                name: name.to_string(),
                available,
            });
        }

        let settings = self.load_settings(name)?;
        let profile_dir = self.profile_dir(name);
        let config_dir = target.join(CONFIG_DIR);

        let mut files = Vec::new();
        for &(file, required) in SWAPPED_FILES {
            let source = profile_dir.join(file);
            if !required && !source.is_file() {
                let dest = config_dir.join(file);
                if dest.is_file() {
                    files.push(SwappedFile {
                        name: file,
                        dest,
                        outcome: FileOutcome::LeftInPlace,
                    });
                }
                continue;
            }

            let resource = FileCopyResource::new(source, config_dir.join(file));
            let outcome = if dry_run {
                if resource.would_write()? {
                    FileOutcome::WouldWrite
                } else {
                    FileOutcome::Unchanged
                }
            } else {
                match resource.apply()? {
                    ResourceChange::Applied => FileOutcome::Written,
                    ResourceChange::AlreadyCorrect => FileOutcome::Unchanged,
                }
            };

            files.push(SwappedFile {
                name: file,
                dest: resource.dest,
                outcome,
            });
        }

        Ok(SwapSummary {
            profile: name.to_string(),
            target: target.to_path_buf(),
            config_dir,
            files,
            enabled_plugins: settings.enabled_plugins(),
            dry_run,
        })
    }
}

/// Return `true` if `name` names a direct child directory.
fn is_plain_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn write_profile(root: &Path, name: &str, settings: &str) -> PathBuf {
        let dir = root.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SETTINGS_FILE), settings).unwrap();
        dir
    }

    #[test]
    fn discover_missing_root_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(tmp.path().join("nope"));
        let err = store.discover().unwrap_err();
        assert!(matches!(err, ProfileError::RootNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn discover_root_that_is_a_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("profiles");
        std::fs::write(&file, "").unwrap();
        let err = ProfileStore::new(file).discover().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn discover_only_directories_with_settings() {
        let tmp = tempfile::tempdir().unwrap();
        write_profile(tmp.path(), "beta", "{}");
        write_profile(tmp.path(), "alpha", "{}");
        std::fs::create_dir_all(tmp.path().join("empty")).unwrap();
        std::fs::create_dir_all(tmp.path().join("nested").join("deep")).unwrap();
        std::fs::write(
            tmp.path().join("nested").join("deep").join(SETTINGS_FILE),
            "{}",
        )
        .unwrap();
        std::fs::write(tmp.path().join("stray.json"), "{}").unwrap();

        let names = ProfileStore::new(tmp.path()).discover().unwrap();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn discover_ignores_settings_directory() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join("odd").join(SETTINGS_FILE)).unwrap();
        assert!(ProfileStore::new(tmp.path()).discover().unwrap().is_empty());
    }

    #[test]
    fn load_settings_missing_profile_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = ProfileStore::new(tmp.path())
            .load_settings("ghost")
            .unwrap_err();
        assert!(matches!(err, ProfileError::SettingsNotFound { .. }));
    }

    #[test]
    fn load_settings_rejects_path_like_names() {
        let tmp = tempfile::tempdir().unwrap();
        write_profile(tmp.path(), "real", "{}");
        let store = ProfileStore::new(tmp.path().join("real"));
        for name in ["", ".", "..", "../real", "a/b"] {
            let err = store.load_settings(name).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound, "name {name:?}");
        }
    }

    #[test]
    fn load_settings_invalid_json_is_malformed() {
        let tmp = tempfile::tempdir().unwrap();
        write_profile(tmp.path(), "broken", "{ not json");
        let err = ProfileStore::new(tmp.path())
            .load_settings("broken")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn list_isolates_errored_profiles() {
        let tmp = tempfile::tempdir().unwrap();
        write_profile(tmp.path(), "bad", "[1, 2");
        write_profile(
            tmp.path(),
            "good",
            r#"{"enabledPlugins": {"foo@bar": true}}"#,
        );

        let listings = ProfileStore::new(tmp.path()).list().unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].name, "bad");
        assert!(matches!(listings[0].status, ListingStatus::Errored { .. }));
        assert_eq!(
            listings[1].status,
            ListingStatus::Loaded {
                enabled: vec!["foo@bar".to_string()]
            }
        );
    }

    #[test]
    fn swap_copies_settings_and_doc() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("profiles");
        let dir = write_profile(&root, "default", r#"{"enabledPlugins": {"a@m": true}}"#);
        std::fs::write(dir.join(DOC_FILE), "# Default\n").unwrap();
        let target = tmp.path().join("project");

        let summary = ProfileStore::new(&root)
            .swap("default", &target, false)
            .unwrap();

        assert_eq!(summary.files.len(), 2);
        assert!(summary.files.iter().all(|f| f.outcome == FileOutcome::Written));
        assert_eq!(summary.enabled_plugins, vec!["a@m"]);
        assert_eq!(
            std::fs::read_to_string(target.join(CONFIG_DIR).join(DOC_FILE)).unwrap(),
            "# Default\n"
        );
    }

    #[test]
    fn swap_without_doc_copies_settings_only() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("profiles");
        write_profile(&root, "plain", "{}");
        let target = tmp.path().join("project");

        let summary = ProfileStore::new(&root).swap("plain", &target, false).unwrap();
        assert_eq!(summary.files.len(), 1);
        assert_eq!(summary.files[0].name, SETTINGS_FILE);
        assert!(!target.join(CONFIG_DIR).join(DOC_FILE).exists());
    }

    #[test]
    fn swap_second_run_reports_unchanged() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("profiles");
        write_profile(&root, "default", "{}");
        let target = tmp.path().join("project");
        let store = ProfileStore::new(&root);

        store.swap("default", &target, false).unwrap();
        let again = store.swap("default", &target, false).unwrap();
        assert_eq!(again.files[0].outcome, FileOutcome::Unchanged);
    }

    #[test]
    fn swap_unknown_profile_reports_available() {
        let tmp = tempfile::tempdir().unwrap();
        write_profile(tmp.path(), "one", "{}");
        write_profile(tmp.path(), "two", "{}");
        let target = tmp.path().join("project");

        let err = ProfileStore::new(tmp.path())
            .swap("three", &target, false)
            .unwrap_err();
        match err {
            ProfileError::ProfileNotFound { name, available } => {
                assert_eq!(name, "three");
                assert_eq!(available, vec!["one", "two"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!target.exists());
    }

    #[test]
    fn dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("profiles");
        write_profile(&root, "default", "{}");
        let target = tmp.path().join("project");

        let summary = ProfileStore::new(&root).swap("default", &target, true).unwrap();
        assert!(summary.dry_run);
        assert_eq!(summary.files[0].outcome, FileOutcome::WouldWrite);
        assert!(!target.exists());
    }

    #[cfg(unix)]
    #[test]
    fn discover_skips_symlinked_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let real = write_profile(tmp.path(), "real", "{}");
        std::os::unix::fs::symlink(&real, tmp.path().join("alias")).unwrap();

        let names = ProfileStore::new(tmp.path()).discover().unwrap();
        assert_eq!(names, vec!["real"]);
    }

    #[test]
    fn swap_reports_doc_left_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("profiles");
        write_profile(&root, "plain", "{}");
        let config_dir = tmp.path().join("project").join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(DOC_FILE), "old notes").unwrap();

        let summary = ProfileStore::new(&root)
            .swap("plain", &tmp.path().join("project"), false)
            .unwrap();

        assert_eq!(summary.files.len(), 2);
        assert_eq!(summary.files[1].name, DOC_FILE);
        assert_eq!(summary.files[1].outcome, FileOutcome::LeftInPlace);
        assert_eq!(
            std::fs::read_to_string(config_dir.join(DOC_FILE)).unwrap(),
            "old notes"
        );
    }

    #[test]
    fn plain_name_rules() {
        assert!(is_plain_name("default"));
        assert!(is_plain_name(".hidden"));
        assert!(!is_plain_name(""));
        assert!(!is_plain_name(".."));
        assert!(!is_plain_name("a/b"));
        assert!(!is_plain_name("a\\b"));
    }
}
