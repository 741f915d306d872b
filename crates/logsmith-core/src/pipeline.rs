//! Commit pipeline execution.

use logsmith_commit::{ParsedCommit, RawCommit, decode_log};
use tracing::{debug, info};

use crate::CommitParser;

/// Runs a parser over decoded history.
///
/// Records the parser rejects are dropped; the survivors keep their input
/// order.
pub struct Pipeline {
    parser: Box<dyn CommitParser>,
}

impl Pipeline {
    /// Creates a new pipeline with the given parser.
    #[must_use]
    pub fn new(parser: Box<dyn CommitParser>) -> Self {
        Self { parser }
    }

    /// Returns the configured parser.
    pub fn parser(&self) -> &dyn CommitParser {
        self.parser.as_ref()
    }

    /// Parses raw commits using the configured parser.
    pub fn parse_commits(&self, raw_commits: &[RawCommit]) -> Vec<ParsedCommit> {
        raw_commits
            .iter()
            .filter_map(|raw| {
                let parsed = self.parser.parse(raw);
                if parsed.is_none() {
                    debug!(
                        hash = %raw.short_hash,
                        subject = %raw.subject(),
                        "skipping unparseable commit"
                    );
                }
                parsed
            })
            .collect()
    }

    /// Decodes raw log text and parses every record.
    pub fn parse_log(&self, text: &str) -> Vec<ParsedCommit> {
        let raw_commits = decode_log(text);
        let parsed = self.parse_commits(&raw_commits);
        info!(
            parser = self.parser.name(),
            total = raw_commits.len(),
            parsed = parsed.len(),
            "parsed history"
        );
        parsed
    }
}
