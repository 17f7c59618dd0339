//! Idempotent resource primitives (check + apply pattern).
pub mod file_copy;
pub mod helpers;

use crate::error::ProfileError;

/// State of a resource on disk.
///
/// # Examples
///
/// ```
/// use swap_profile::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let correct = ResourceState::Correct;
/// let stale = ResourceState::Incorrect;
///
/// assert_ne!(missing, correct);
/// assert_ne!(stale, correct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect,
    /// Resource cannot be applied (e.g. the destination is a directory).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was already correct (no change needed).
    AlreadyCorrect,
}

/// Interface for resources that can be checked and applied.
pub trait Resource {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be determined.
    fn current_state(&self) -> Result<ResourceState, ProfileError>;

    /// Bring the resource to its desired state, creating parent directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be written.
    fn apply(&self) -> Result<ResourceChange, ProfileError>;
}
