//! Shared types for the Shepherd membership server
//!
//! Data models, write payloads, validation, and the pagination envelope
//! used by both the server and API consumers.

pub mod models;
pub mod query;
pub mod util;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use query::PaginatedResponse;
pub use validate::{ValidationError, ValidationIssue};
