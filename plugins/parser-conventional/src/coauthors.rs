//! Co-author trailer extraction.

use std::sync::LazyLock;

use logsmith_commit::Author;
use regex::Regex;

static CO_AUTHORED_BY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)co-authored-by:[ \t]*(?P<name>[^<\r\n]*?)[ \t]*(?:<(?P<email>[^>\r\n]*)>|[ \t\r]*$)",
    )
    .expect("invalid regex")
});

/// Extracts `Co-authored-by: Name <email>` trailers, in body order.
///
/// The label is case-insensitive and the email part is optional. Text after
/// the closing `>` is ignored.
pub fn extract_co_authors(body: &str) -> Vec<Author> {
    CO_AUTHORED_BY_RE
        .captures_iter(body)
        .filter_map(|captures| {
            let name = captures.name("name").map_or("", |m| m.as_str().trim());
            let email = captures.name("email").map_or("", |m| m.as_str().trim());
            if name.is_empty() && email.is_empty() {
                return None;
            }
            Some(Author::new(name, email))
        })
        .collect()
}
