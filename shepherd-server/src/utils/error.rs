//! Unified error handling
//!
//! [`AppError`] is the application-level error returned by every handler;
//! it maps onto an HTTP status plus the JSON envelope [`AppResponse`].
//!
//! # Error codes
//!
//! | Code | Category |
//! |------|----------|
//! | E0002 | Validation failed |
//! | E0003 | Resource not found |
//! | E0006 | Invalid request |
//! | E9001 | Internal error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use shared::validate::{ValidationError, ValidationIssue};

use crate::db::repository::RepoError;

/// Error response envelope
///
/// ```json
/// { "code": "E0003", "message": "Resource not found: Member m-1 not found" }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field-level validation issues, when the error is a rejected write
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<ValidationIssue>>,
}

/// Application error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rejected write with field-level issues (400)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request outside payload validation (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Internal error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(ValidationError::single(field, message))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, issues) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None),
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                "E0002",
                "Validation failed".to_string(),
                Some(err.0),
            ),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg, None),
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message,
            data: None,
            issues,
        });

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type AppResult<T> = Result<T, AppError>;
