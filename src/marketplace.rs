//! Marketplace root resolution.
//!
//! A marketplace is a directory holding a `profiles/` tree next to a
//! `.claude-plugin/` marker. The tool looks for it in this order:
//!
//! 1. an explicit override (flag, environment, or config file);
//! 2. the directory the binary is installed in, or one of its ancestors;
//! 3. `~/.claude/plugins/marketplaces/claude-profiles`.
use std::path::{Path, PathBuf};

use crate::error::ProfileError;

/// Name of the profiles directory inside a marketplace.
pub const PROFILES_DIR: &str = "profiles";

/// Marker directory that identifies a plugin marketplace.
pub const MARKETPLACE_MARKER: &str = ".claude-plugin";

/// How many ancestors of the executable's directory are searched.
const INSTALL_SEARCH_DEPTH: usize = 4;

/// Return `true` if `dir` contains both a `profiles/` directory and the
/// marketplace marker.
#[must_use]
pub fn looks_like_marketplace(dir: &Path) -> bool {
    dir.join(PROFILES_DIR).is_dir() && dir.join(MARKETPLACE_MARKER).is_dir()
}

/// Default marketplace location under `home`.
#[must_use]
pub fn default_marketplace_root(home: &Path) -> PathBuf {
    home.join(".claude")
        .join("plugins")
        .join("marketplaces")
        .join("claude-profiles")
}

/// Find a marketplace enclosing the executable at `exe`.
///
/// Covers both `<marketplace>/bin/swap-profile` and
/// `<marketplace>/target/release/swap-profile` layouts.
#[must_use]
pub fn installed_marketplace_root(exe: &Path) -> Option<PathBuf> {
    exe.parent()?
        .ancestors()
        .take(INSTALL_SEARCH_DEPTH)
        .find(|dir| looks_like_marketplace(dir))
        .map(Path::to_path_buf)
}

/// Resolve the marketplace root from its three possible sources.
///
/// Only the install-location search touches the filesystem (existence
/// checks); the explicit override and the home default are returned as-is.
///
/// # Errors
///
/// Returns [`ProfileError::MarketplaceUnresolved`] if no override is given,
/// the executable is not inside a marketplace, and the home directory is
/// unknown.
pub fn resolve_marketplace_root(
    explicit: Option<&Path>,
    exe: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ProfileError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(root) = exe.and_then(installed_marketplace_root) {
        return Ok(root);
    }

    home.map(default_marketplace_root)
        .ok_or(ProfileError::MarketplaceUnresolved)
}

/// Resolve the marketplace root for the running process.
///
/// # Errors
///
/// See [`resolve_marketplace_root`].
pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf, ProfileError> {
    let exe = std::env::current_exe().ok();
    let home = dirs::home_dir();
    resolve_marketplace_root(explicit, exe.as_deref(), home.as_deref())
}

/// Profiles root inside a marketplace.
#[must_use]
pub fn profiles_root(marketplace: &Path) -> PathBuf {
    marketplace.join(PROFILES_DIR)
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn make_marketplace(dir: &Path) {
        std::fs::create_dir_all(dir.join(PROFILES_DIR)).unwrap();
        std::fs::create_dir_all(dir.join(MARKETPLACE_MARKER)).unwrap();
    }

    #[test]
    fn explicit_override_wins() {
        let tmp = tempfile::tempdir().unwrap();
        make_marketplace(tmp.path());
        let exe = tmp.path().join("bin").join("swap-profile");
        let root = resolve_marketplace_root(
            Some(Path::new("/explicit/market")),
            Some(&exe),
            Some(Path::new("/home/user")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/explicit/market"));
    }

    #[test]
    fn explicit_override_need_not_exist() {
        let root =
            resolve_marketplace_root(Some(Path::new("/does/not/exist")), None, None).unwrap();
        assert_eq!(root, PathBuf::from("/does/not/exist"));
    }

    #[test]
    fn install_location_from_bin_dir() {
        let tmp = tempfile::tempdir().unwrap();
        make_marketplace(tmp.path());
        std::fs::create_dir_all(tmp.path().join("bin")).unwrap();
        let exe = tmp.path().join("bin").join("swap-profile");
        let root =
            resolve_marketplace_root(None, Some(&exe), Some(Path::new("/home/user"))).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn install_location_from_cargo_target_dir() {
        let tmp = tempfile::tempdir().unwrap();
        make_marketplace(tmp.path());
        let exe = tmp
            .path()
            .join("target")
            .join("release")
            .join("swap-profile");
        assert_eq!(installed_marketplace_root(&exe), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn directory_without_marker_is_not_a_marketplace() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(tmp.path().join(PROFILES_DIR)).unwrap();
        assert!(!looks_like_marketplace(tmp.path()));
        let exe = tmp.path().join("swap-profile");
        let root =
            resolve_marketplace_root(None, Some(&exe), Some(Path::new("/home/user"))).unwrap();
        assert_eq!(
            root,
            PathBuf::from("/home/user/.claude/plugins/marketplaces/claude-profiles")
        );
    }

    #[test]
    fn falls_back_to_home_default() {
        let root = resolve_marketplace_root(None, None, Some(Path::new("/home/user"))).unwrap();
        assert_eq!(root, default_marketplace_root(Path::new("/home/user")));
    }

    #[test]
    fn fails_without_any_source() {
        let err = resolve_marketplace_root(None, None, None).unwrap_err();
        assert!(matches!(err, ProfileError::MarketplaceUnresolved));
        assert!(err.to_string().contains("cannot determine marketplace root"));
    }

    #[test]
    fn profiles_root_is_child_of_marketplace() {
        assert_eq!(
            profiles_root(Path::new("/m")),
            PathBuf::from("/m").join("profiles")
        );
    }
}
