//! Conventional Commits parser.
//!
//! Classifies a [`RawCommit`] by its subject line, normalizes the scope,
//! pulls references out of the description and collects co-authors from
//! the body. Subjects that are not conventional commits are rejected.

mod coauthors;
mod message;
mod references;
mod scope;

pub use coauthors::extract_co_authors;
pub use message::{ConventionalMessage, parse_message};
pub use references::{ExtractedReferences, extract_references, strip_pull_requests};
pub use scope::ScopeAliasTable;

use logsmith_commit::{ParsedCommit, RawCommit};
use logsmith_core::CommitParser;

/// Conventional Commits parser.
#[derive(Debug, Clone, Default)]
pub struct ConventionalParser {
    scopes: ScopeAliasTable,
}

impl ConventionalParser {
    /// Creates a new conventional parser without scope aliases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser that rewrites scopes through the given table.
    #[must_use]
    pub fn with_scope_map(scopes: ScopeAliasTable) -> Self {
        Self { scopes }
    }
}

impl CommitParser for ConventionalParser {
    fn name(&self) -> &'static str {
        "conventional"
    }

    fn parse(&self, raw: &RawCommit) -> Option<ParsedCommit> {
        let message = parse_message(raw.subject())?;
        let scope = self
            .scopes
            .normalize(message.scope.as_deref().unwrap_or_default())
            .to_string();
        let extracted = extract_references(&message.description, &raw.short_hash);

        Some(
            ParsedCommit::builder(raw, message.r#type)
                .scope(scope)
                .description(extracted.description)
                .breaking(message.breaking)
                .references(extracted.references)
                .co_authors(extract_co_authors(&raw.body))
                .build(),
        )
    }
}
