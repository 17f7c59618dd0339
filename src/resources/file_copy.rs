//! File copy resource.
use std::path::PathBuf;

use super::helpers::fs::{ensure_parent_dir, same_contents};
use super::{Resource, ResourceChange, ResourceState};
use crate::error::ProfileError;

/// A file that should exist at `dest` with the same bytes as `source`.
#[derive(Debug, Clone)]
pub struct FileCopyResource {
    /// The file to copy from.
    pub source: PathBuf,
    /// Where the copy should live.
    pub dest: PathBuf,
}

impl FileCopyResource {
    /// Create a new file copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, dest: PathBuf) -> Self {
        Self { source, dest }
    }

    /// Return whether [`apply`](Resource::apply) would write the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined or the destination
    /// cannot be replaced (e.g. it is a directory).
    pub fn would_write(&self) -> Result<bool, ProfileError> {
        match self.current_state()? {
            ResourceState::Missing | ResourceState::Incorrect => Ok(true),
            ResourceState::Correct => Ok(false),
            ResourceState::Invalid { reason } => Err(ProfileError::io(
                "replacing",
                &self.dest,
                std::io::Error::new(std::io::ErrorKind::IsADirectory, reason),
            )),
        }
    }
}

impl Resource for FileCopyResource {
    fn current_state(&self) -> Result<ResourceState, ProfileError> {
        let Ok(meta) = self.dest.symlink_metadata() else {
            return Ok(ResourceState::Missing);
        };
        if meta.is_dir() {
            return Ok(ResourceState::Invalid {
                reason: "destination is a directory".to_string(),
            });
        }
        if same_contents(&self.source, &self.dest)? {
            Ok(ResourceState::Correct)
        } else {
            Ok(ResourceState::Incorrect)
        }
    }

    fn apply(&self) -> Result<ResourceChange, ProfileError> {
        if !self.would_write()? {
            return Ok(ResourceChange::AlreadyCorrect);
        }

        ensure_parent_dir(&self.dest)?;
        std::fs::copy(&self.source, &self.dest)
            .map_err(|e| ProfileError::io("writing", &self.dest, e))?;
        Ok(ResourceChange::Applied)
    }
}
