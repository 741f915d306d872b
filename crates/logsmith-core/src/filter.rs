//! Commit selection.

use std::collections::BTreeSet;

use logsmith_commit::ParsedCommit;
use logsmith_config::Config;
use tracing::debug;

const RELEASE_PREFIX: &str = "release ";
const DEPENDENCY_SCOPE: &str = "deps";

/// Selects the parsed commits a changelog keeps.
#[derive(Debug, Clone)]
pub struct CommitFilter {
    types: BTreeSet<String>,
    exclude_releases: bool,
    exclude_dependency_updates: bool,
}

impl CommitFilter {
    /// Creates a filter keeping the given types, with both exclusion rules
    /// enabled. Type names are compared case-insensitively.
    #[must_use]
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types
                .into_iter()
                .map(|t| Into::<String>::into(t).to_lowercase())
                .collect(),
            exclude_releases: true,
            exclude_dependency_updates: true,
        }
    }

    /// Creates a filter from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            types: config.types.keys().map(|t| t.to_lowercase()).collect(),
            exclude_releases: config.filter.exclude_releases,
            exclude_dependency_updates: config.filter.exclude_dependency_updates,
        }
    }

    /// Returns true if the commit should be kept.
    pub fn accepts(&self, commit: &ParsedCommit) -> bool {
        let is_release = commit.description.starts_with(RELEASE_PREFIX);
        if self.exclude_releases && is_release {
            return false;
        }

        let commit_type = commit.normalized_type();
        if !self.types.contains(&commit_type) {
            return false;
        }

        let is_dependency_update = commit_type == "chore"
            && commit.scope == DEPENDENCY_SCOPE
            && !commit.is_breaking
            && !is_release;

        !(self.exclude_dependency_updates && is_dependency_update)
    }

    /// Keeps the accepted commits, in order.
    pub fn apply(&self, commits: Vec<ParsedCommit>) -> Vec<ParsedCommit> {
        let before = commits.len();
        let kept: Vec<_> = commits.into_iter().filter(|c| self.accepts(c)).collect();
        debug!(before, after = kept.len(), "filtered commits");
        kept
    }
}
