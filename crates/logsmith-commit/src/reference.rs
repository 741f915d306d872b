//! Commit references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of artifact a [`Reference`] points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceKind {
    /// The commit's own short hash.
    Hash,
    /// A bare issue number such as `#42`.
    Issue,
    /// A pull request marker such as `(#42)`.
    PullRequest,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash => write!(f, "hash"),
            Self::Issue => write!(f, "issue"),
            Self::PullRequest => write!(f, "pull-request"),
        }
    }
}

/// A typed pointer from a commit to an issue, a pull request or itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    /// The reference kind.
    #[serde(rename = "type")]
    pub kind: ReferenceKind,

    /// The referenced value (`#42`, `abc1234`).
    pub value: String,
}

impl Reference {
    /// Creates a hash reference.
    #[must_use]
    pub fn hash(value: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Hash,
            value: value.into(),
        }
    }

    /// Creates an issue reference.
    #[must_use]
    pub fn issue(value: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::Issue,
            value: value.into(),
        }
    }

    /// Creates a pull request reference.
    #[must_use]
    pub fn pull_request(value: impl Into<String>) -> Self {
        Self {
            kind: ReferenceKind::PullRequest,
            value: value.into(),
        }
    }
}
