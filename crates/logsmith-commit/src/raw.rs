//! Raw commit type as decoded from log text.

use serde::{Deserialize, Serialize};

/// A commit author identity.
///
/// The email may be empty, e.g. for co-authors whose trailer omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// The author name.
    pub name: String,

    /// The author email.
    pub email: String,
}

impl Author {
    /// Creates a new author identity.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A commit as decoded from the raw log text, before parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The subject line, exactly as authored.
    pub message: String,

    /// The short commit hash.
    pub short_hash: String,

    /// The primary author.
    pub author: Author,

    /// The remaining message lines, newline-joined. May be empty.
    pub body: String,
}

impl RawCommit {
    /// Creates a new raw commit.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        short_hash: impl Into<String>,
        author: Author,
        body: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            short_hash: short_hash.into(),
            author,
            body: body.into(),
        }
    }

    /// Returns the subject line.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(message: &str, body: &str) -> RawCommit {
        RawCommit::new(
            message,
            "abc1234",
            Author::new("Test Author", "test@example.com"),
            body,
        )
    }

    #[test]
    fn test_new() {
        let commit = make_commit("feat: add feature", "details");

        assert_eq!(commit.message, "feat: add feature");
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.author.name, "Test Author");
        assert_eq!(commit.author.email, "test@example.com");
        assert_eq!(commit.body, "details");
    }

    #[test]
    fn test_subject() {
        let commit = make_commit("fix: handle edge case", "");
        assert_eq!(commit.subject(), "fix: handle edge case");
    }

    #[test]
    fn test_author_default_is_empty() {
        let author = Author::default();
        assert!(author.name.is_empty());
        assert!(author.email.is_empty());
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = make_commit("feat: x", "body");
        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: RawCommit = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
