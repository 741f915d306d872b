//! Core library for Logsmith.
//!
//! This crate provides the orchestration logic that turns raw history into
//! classified commits:
//! - [`CommitParser`]: the seam parsers plug into
//! - [`Pipeline`]: decoding plus order-preserving classification
//! - [`CommitFilter`]: selection of the commits a changelog keeps
//! - [`resolve_range`]: default `from`/`to` revisions

mod error;
mod filter;
mod parser;
mod pipeline;
mod range;

pub use error::{CoreError, CoreResult};
pub use filter::CommitFilter;
pub use parser::CommitParser;
pub use pipeline::Pipeline;
pub use range::{CommitRange, resolve_range};
