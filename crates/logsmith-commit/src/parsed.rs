//! Parsed commit type after classification.

use serde::{Deserialize, Serialize};

use crate::{Author, RawCommit, Reference};

/// A commit after classification by a parser.
///
/// Carries every [`RawCommit`] field alongside the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    /// The subject line, exactly as authored.
    pub message: String,

    /// The short commit hash.
    pub short_hash: String,

    /// The primary author.
    pub author: Author,

    /// The raw body.
    pub body: String,

    /// The commit type (feat, fix, docs, etc.), as matched.
    pub r#type: String,

    /// The normalized scope, empty when none was declared.
    pub scope: String,

    /// The subject without type, scope, breaking marker and pull request markers.
    pub description: String,

    /// Whether the subject declares a breaking change.
    pub is_breaking: bool,

    /// Pull requests, then issues, then the commit hash.
    pub references: Vec<Reference>,

    /// The primary author followed by co-authors in trailer order.
    pub authors: Vec<Author>,
}

impl ParsedCommit {
    /// Creates a new parsed commit builder from a raw commit.
    #[must_use]
    pub fn builder(raw: &RawCommit, r#type: impl Into<String>) -> ParsedCommitBuilder {
        ParsedCommitBuilder::new(raw, r#type)
    }

    /// Returns the lower-cased type, for comparisons.
    #[must_use]
    pub fn normalized_type(&self) -> String {
        self.r#type.to_lowercase()
    }

    /// Returns true if a scope was declared.
    #[must_use]
    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty()
    }
}

/// Builder for [`ParsedCommit`].
#[derive(Debug)]
pub struct ParsedCommitBuilder {
    raw: RawCommit,
    r#type: String,
    scope: String,
    description: String,
    is_breaking: bool,
    references: Vec<Reference>,
    co_authors: Vec<Author>,
}

impl ParsedCommitBuilder {
    fn new(raw: &RawCommit, r#type: impl Into<String>) -> Self {
        Self {
            raw: raw.clone(),
            r#type: r#type.into(),
            scope: String::new(),
            description: String::new(),
            is_breaking: false,
            references: Vec::new(),
            co_authors: Vec::new(),
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the breaking flag.
    #[must_use]
    pub fn breaking(mut self, is_breaking: bool) -> Self {
        self.is_breaking = is_breaking;
        self
    }

    /// Sets the references.
    #[must_use]
    pub fn references(mut self, references: Vec<Reference>) -> Self {
        self.references = references;
        self
    }

    /// Appends co-authors after the primary author.
    #[must_use]
    pub fn co_authors(mut self, co_authors: impl IntoIterator<Item = Author>) -> Self {
        self.co_authors.extend(co_authors);
        self
    }

    /// Builds the [`ParsedCommit`].
    #[must_use]
    pub fn build(self) -> ParsedCommit {
        let mut authors = Vec::with_capacity(1 + self.co_authors.len());
        authors.push(self.raw.author.clone());
        authors.extend(self.co_authors);

        ParsedCommit {
            message: self.raw.message,
            short_hash: self.raw.short_hash,
            author: self.raw.author,
            body: self.raw.body,
            r#type: self.r#type,
            scope: self.scope,
            description: self.description,
            is_breaking: self.is_breaking,
            references: self.references,
            authors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw() -> RawCommit {
        RawCommit::new(
            "feat(api): add new endpoint",
            "abc1234",
            Author::new("Jane", "jane@example.com"),
            "",
        )
    }

    #[test]
    fn test_builder() {
        let commit = ParsedCommit::builder(&make_raw(), "feat")
            .scope("api")
            .description("add new endpoint")
            .breaking(false)
            .references(vec![Reference::hash("abc1234")])
            .build();

        assert_eq!(commit.r#type, "feat");
        assert_eq!(commit.scope, "api");
        assert_eq!(commit.description, "add new endpoint");
        assert!(!commit.is_breaking);
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.message, "feat(api): add new endpoint");
        assert_eq!(commit.references, vec![Reference::hash("abc1234")]);
    }

    #[test]
    fn test_primary_author_comes_first() {
        let commit = ParsedCommit::builder(&make_raw(), "feat")
            .co_authors([Author::new("Bob", "bob@example.com")])
            .co_authors([Author::new("Eve", "")])
            .build();

        let names: Vec<_> = commit.authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Jane", "Bob", "Eve"]);
    }

    #[test]
    fn test_defaults() {
        let commit = ParsedCommit::builder(&make_raw(), "fix").build();
        assert!(commit.scope.is_empty());
        assert!(!commit.has_scope());
        assert!(commit.references.is_empty());
        assert_eq!(commit.authors.len(), 1);
    }

    #[test]
    fn test_normalized_type() {
        let feat = ParsedCommit::builder(&make_raw(), "Feat").build();
        assert_eq!(feat.r#type, "Feat");
        assert_eq!(feat.normalized_type(), "feat");
    }

    #[test]
    fn test_serialized_type_field() {
        let commit = ParsedCommit::builder(&make_raw(), "feat").build();
        let value = serde_json::to_value(&commit).unwrap();
        assert_eq!(value["type"], "feat");
        assert_eq!(value["is_breaking"], false);
    }
}
