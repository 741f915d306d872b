//! Commit parser trait.

use logsmith_commit::{ParsedCommit, RawCommit};

/// Classifies raw commits into structured data.
pub trait CommitParser: Send + Sync {
    /// Returns the parser name.
    fn name(&self) -> &'static str;

    /// Parses a raw commit into a parsed commit.
    ///
    /// Returns `None` if the commit message doesn't match the expected format.
    /// A `None` is a filter decision, not an error.
    fn parse(&self, raw: &RawCommit) -> Option<ParsedCommit>;

    /// Returns whether this parser can handle the given commit.
    ///
    /// Default implementation just tries to parse and checks if it succeeds.
    fn can_parse(&self, raw: &RawCommit) -> bool {
        self.parse(raw).is_some()
    }
}
