//! Conventional commit subject matching.

use std::sync::LazyLock;

use regex::Regex;

// Unanchored: the first `type(scope)!: ` occurrence in the subject wins.
static CONVENTIONAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?P<type>[a-z]+)(?:\((?P<scope>.+)\))?(?P<breaking>!)?: (?P<description>.+)")
        .expect("invalid regex")
});

/// The structural parts of a conventional commit subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalMessage {
    /// The type token, as matched.
    pub r#type: String,

    /// The raw scope, if one was declared.
    pub scope: Option<String>,

    /// Whether the `!` marker precedes the separator.
    pub breaking: bool,

    /// Everything after the `": "` separator.
    pub description: String,
}

/// Matches a subject against `type(scope)!: description`.
///
/// Returns `None` when the subject is not a conventional commit.
pub fn parse_message(subject: &str) -> Option<ConventionalMessage> {
    let captures = CONVENTIONAL_RE.captures(subject)?;

    Some(ConventionalMessage {
        r#type: captures.name("type")?.as_str().to_string(),
        scope: captures.name("scope").map(|m| m.as_str().to_string()),
        breaking: captures.name("breaking").is_some(),
        description: captures.name("description")?.as_str().to_string(),
    })
}
