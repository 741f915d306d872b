//! Git abstraction layer for Logsmith.
//!
//! This crate provides Git operations:
//! - Repository discovery and status
//! - Tag and ref lookup for range defaults
//! - History rendering in the raw log text format

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;
