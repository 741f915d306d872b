//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository.
    #[error("not a git repository: {0}")]
    NotARepo(std::path::PathBuf),

    /// A revision could not be resolved.
    #[error("reference not found: {0}")]
    RefNotFound(String),

    /// Git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
