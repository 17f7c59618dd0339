//! File-system resource helpers.
use std::path::Path;

use crate::error::ProfileError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<(), ProfileError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ProfileError::io("creating directory", parent, e))?;
    }
    Ok(())
}

/// Return `true` if both files exist and have identical contents.
///
/// A missing `b` compares unequal rather than failing.
///
/// # Errors
///
/// Returns an error if `a` cannot be read, or `b` exists but cannot be read.
pub fn same_contents(a: &Path, b: &Path) -> Result<bool, ProfileError> {
    let theirs = match std::fs::read(b) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(ProfileError::io("reading", b, e)),
    };
    let ours = std::fs::read(a).map_err(|e| ProfileError::io("reading", a, e))?;
    Ok(ours == theirs)
}
