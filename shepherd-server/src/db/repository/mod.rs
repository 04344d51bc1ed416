//! Repository Module
//!
//! CRUD operations over the in-process store, one module per entity.
//! Functions take the [`Database`](crate::db::Database) handle and return
//! [`RepoResult`]; list results are sorted deterministically.

pub mod attendance;
pub mod gdi;
pub mod meeting;
pub mod meeting_series;
pub mod member;
pub mod ministry_area;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
