//! Commit range resolution.

use std::fmt;

use logsmith_git::Repository;
use tracing::debug;

use crate::CoreResult;

/// The revisions bounding a history query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    /// Start revision; `None` walks the whole history of `to`.
    pub from: Option<String>,

    /// End revision.
    pub to: String,
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{from}...{}", self.to),
            None => write!(f, "{}", self.to),
        }
    }
}

/// Fills in missing range bounds from the repository.
///
/// `from` falls back to the previous tag, then to the root commit.
/// `to` falls back to a tag at HEAD, then to the current branch.
///
/// # Errors
///
/// Returns an error if tags, HEAD or history cannot be read.
pub fn resolve_range(
    repo: &Repository,
    from: Option<&str>,
    to: Option<&str>,
) -> CoreResult<CommitRange> {
    let from = match from {
        Some(from) => Some(from.to_string()),
        None => match repo.previous_tag()? {
            Some(tag) => Some(tag),
            None => repo.first_commit()?,
        },
    };

    let to = match to {
        Some(to) => to.to_string(),
        None => match repo.current_tag()? {
            Some(tag) => tag,
            None => repo.current_branch()?,
        },
    };

    let range = CommitRange { from, to };
    debug!(%range, "resolved commit range");
    Ok(range)
}
