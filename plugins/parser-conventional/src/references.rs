//! Reference extraction from commit descriptions.

use std::sync::LazyLock;

use logsmith_commit::Reference;
use regex::Regex;

// Lower-case words only, e.g. `(#12)` or `(closes #12 )`.
static PULL_REQUEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([ a-z]*(#[0-9]+)\s*\)").expect("invalid regex"));

static ISSUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9]+").expect("invalid regex"));

/// References found in a description, and the description without its
/// pull request markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReferences {
    /// Pull requests, then new issues, then the commit hash.
    pub references: Vec<Reference>,

    /// The trimmed description with pull request markers removed.
    pub description: String,
}

/// Extracts pull request, issue and hash references.
///
/// Pull requests and issues whose value was already seen are skipped. The
/// hash reference is always appended last.
pub fn extract_references(description: &str, short_hash: &str) -> ExtractedReferences {
    let mut references: Vec<Reference> = Vec::new();

    for m in PULL_REQUEST_RE
        .captures_iter(description)
        .filter_map(|captures| captures.get(1))
    {
        if !references.iter().any(|r| r.value == m.as_str()) {
            references.push(Reference::pull_request(m.as_str()));
        }
    }

    for m in ISSUE_RE.find_iter(description) {
        if !references.iter().any(|r| r.value == m.as_str()) {
            references.push(Reference::issue(m.as_str()));
        }
    }

    references.push(Reference::hash(short_hash));

    ExtractedReferences {
        references,
        description: strip_pull_requests(description),
    }
}

/// Removes every pull request marker and trims the result.
///
/// Removal repeats until no marker is left, so markers uncovered by a
/// removal (`((#1) #2)`) are removed too.
pub fn strip_pull_requests(description: &str) -> String {
    let mut stripped = description.to_string();
    while PULL_REQUEST_RE.is_match(&stripped) {
        stripped = PULL_REQUEST_RE.replace_all(&stripped, "").into_owned();
    }
    stripped.trim().to_string()
}
