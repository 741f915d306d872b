//! Commit types for Logsmith.
//!
//! This crate provides the core commit types used throughout Logsmith:
//! - [`RawCommit`]: A commit as decoded from raw log text
//! - [`ParsedCommit`]: A commit after classification by a parser
//! - [`Reference`]: A typed pointer to a hash, issue or pull request
//!
//! It also owns the raw log text format shared by the git layer and the
//! decoder, see [`decode_log`].

mod log;
mod parsed;
mod raw;
mod reference;

pub use log::{FIELD_SEPARATOR, LOG_DELIMITER, decode_log, decode_record, format_record};
pub use parsed::{ParsedCommit, ParsedCommitBuilder};
pub use raw::{Author, RawCommit};
pub use reference::{Reference, ReferenceKind};
