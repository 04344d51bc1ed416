//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`members`] - member records and list query
//! - [`gdis`] - small-group management
//! - [`ministry_areas`] - ministry-area management
//! - [`meeting_series`] - recurrence templates and occurrence generation
//! - [`meetings`] - concrete meetings and attendance

pub mod gdis;
pub mod health;
pub mod meeting_series;
pub mod meetings;
pub mod members;
pub mod ministry_areas;

// Re-export common types for handlers
pub use crate::utils::error::{AppError, AppResponse, AppResult};
