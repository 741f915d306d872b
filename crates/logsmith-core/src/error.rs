//! Core error types.
//!
//! Classification itself never fails; only repository access can.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] logsmith_git::GitError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
