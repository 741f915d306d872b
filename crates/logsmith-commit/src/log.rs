//! Raw log text format.
//!
//! History arrives as one text blob in which every commit is introduced by
//! [`LOG_DELIMITER`]. The first line of each record holds
//! `subject|short hash|author name|author email`, the remaining lines are
//! the body. This is the output of
//! `git log --pretty="----%n%s|%h|%an|%ae%n%b"`.
//!
//! Decoding never fails: malformed records degrade to empty fields so one
//! bad entry cannot abort a batch.

use crate::{Author, RawCommit};

/// Prefix of every record in the raw log text.
pub const LOG_DELIMITER: &str = "----\n";

/// Separator between the fields of a record's first line.
pub const FIELD_SEPARATOR: char = '|';

const FIELD_COUNT: usize = 4;

/// Decodes raw log text into one [`RawCommit`] per record.
///
/// Everything up to and including the first delimiter is discarded, so
/// text without any delimiter yields no records. Every later segment
/// yields exactly one record, in input order.
pub fn decode_log(text: &str) -> Vec<RawCommit> {
    text.split(LOG_DELIMITER).skip(1).map(decode_record).collect()
}

/// Decodes a single record (the text between two delimiters).
pub fn decode_record(segment: &str) -> RawCommit {
    let (first_line, body) = segment.split_once('\n').unwrap_or((segment, ""));
    let [message, short_hash, name, email] = split_fields(first_line);

    RawCommit::new(message, short_hash, Author::new(name, email), body)
}

/// Renders a record in the format [`decode_record`] reads back.
pub fn format_record(
    subject: &str,
    short_hash: &str,
    author: &Author,
    body: &str,
) -> String {
    format!(
        "{LOG_DELIMITER}{subject}{FIELD_SEPARATOR}{short_hash}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}\n{body}",
        author.name, author.email
    )
}

/// Splits the first line into subject, hash, author name and author email.
///
/// The trailing three fields are taken from the right so that a `|` in the
/// subject stays part of the subject. Lines with fewer fields fill from the
/// left and leave the rest empty.
fn split_fields(line: &str) -> [&str; FIELD_COUNT] {
    let separators = line.matches(FIELD_SEPARATOR).count();

    if separators >= FIELD_COUNT - 1 {
        let mut fields = line.rsplitn(FIELD_COUNT, FIELD_SEPARATOR);
        let email = fields.next().unwrap_or_default();
        let name = fields.next().unwrap_or_default();
        let hash = fields.next().unwrap_or_default();
        let subject = fields.next().unwrap_or_default();
        return [subject, hash, name, email];
    }

    let mut out = [""; FIELD_COUNT];
    for (slot, field) in out.iter_mut().zip(line.split(FIELD_SEPARATOR)) {
        *slot = field;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_single_record() {
        let text = "----\nfeat: add x|abc1234|Jane|jane@x.com\nsome body\n";
        let commits = decode_log(text);

        assert_eq!(commits.len(), 1);
        let commit = &commits[0];
        assert_eq!(commit.message, "feat: add x");
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.author, Author::new("Jane", "jane@x.com"));
        assert_eq!(commit.body, "some body\n");
    }

    #[test]
    fn test_decode_preserves_order() {
        let text = "----\nfirst|a1|A|a@x\n\n----\nsecond|b2|B|b@x\n\n----\nthird|c3|C|c@x\n";
        let subjects: Vec<_> = decode_log(text).into_iter().map(|c| c.message).collect();
        assert_eq!(subjects, ["first", "second", "third"]);
    }

    #[test]
    fn test_decode_discards_preamble() {
        let text = "garbage before\n----\nfix: y|def5678|Bob|bob@x.com\n";
        let commits = decode_log(text);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "fix: y");
    }

    #[test]
    fn test_decode_empty_input() {
        assert!(decode_log("").is_empty());
        assert!(decode_log("no delimiter here\n").is_empty());
    }

    #[test]
    fn test_decode_multiline_body() {
        let text = "----\nfeat: z|abc|Jane|j@x\nline 1\n\nCo-authored-by: Bob <b@x>\n";
        let commits = decode_log(text);
        assert_eq!(commits[0].body, "line 1\n\nCo-authored-by: Bob <b@x>\n");
    }

    #[test]
    fn test_decode_record_without_body() {
        let commit = decode_record("feat: z|abc|Jane|j@x");
        assert_eq!(commit.message, "feat: z");
        assert_eq!(commit.author.email, "j@x");
        assert_eq!(commit.body, "");
    }

    #[test]
    fn test_malformed_record_yields_empty_fields() {
        let commit = decode_record("only a subject\n");
        assert_eq!(commit.message, "only a subject");
        assert_eq!(commit.short_hash, "");
        assert_eq!(commit.author, Author::default());

        let commit = decode_record("subject|hash\n");
        assert_eq!(commit.message, "subject");
        assert_eq!(commit.short_hash, "hash");
        assert_eq!(commit.author.name, "");
    }

    #[test]
    fn test_malformed_record_does_not_abort_batch() {
        let text = "----\nbroken\n----\nfeat: ok|abc|Jane|j@x\n";
        let commits = decode_log(text);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[1].message, "feat: ok");
    }

    #[test]
    fn test_pipe_in_subject_stays_in_subject() {
        let commit = decode_record("feat: a | b | c|abc1234|Jane|jane@x.com\n");
        assert_eq!(commit.message, "feat: a | b | c");
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.author, Author::new("Jane", "jane@x.com"));
    }

    #[test]
    fn test_empty_segment_yields_empty_record() {
        let commits = decode_log("----\n----\nfeat: x|a|b|c\n");
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0], RawCommit::default());
    }

    #[test]
    fn test_format_record_decodes_back() {
        let author = Author::new("Jane", "jane@x.com");
        let text = format_record("feat: x", "abc1234", &author, "body\n");
        assert_eq!(text, "----\nfeat: x|abc1234|Jane|jane@x.com\nbody\n");

        let commits = decode_log(&text);
        assert_eq!(commits[0].author, author);
        assert_eq!(commits[0].body, "body\n");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn record_count_matches_delimiter_count(
                segments in proptest::collection::vec("[a-z0-9|:() !#]{0,30}(\n[a-z0-9 <>@.:]{0,30}){0,3}", 0..20),
            ) {
                let text: String = segments.iter().map(|s| format!("{LOG_DELIMITER}{s}")).collect();
                prop_assert_eq!(decode_log(&text).len(), segments.len());
            }

            #[test]
            fn decoding_is_deterministic(text in "(----\n)?[a-z|\n-]{0,80}") {
                prop_assert_eq!(decode_log(&text), decode_log(&text));
            }
        }
    }
}
