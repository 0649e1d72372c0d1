//! # Service Errors
//!
//! Crate-wide error taxonomy for the student records service.
//!
//! Every operation returns a typed failure from this enum; the axum boundary
//! translates it into a structured `{"detail": ...}` response. Nothing in the
//! service layer panics across a request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    // ==================
    // Validation (400)
    // ==================
    /// A field failed its format rule
    #[error("{message}")]
    InvalidFieldFormat {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable rejection reason
        message: String,
    },

    /// A required field was absent from a non-partial payload
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Malformed search / pagination / sort input
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // ==================
    // Lookup (404)
    // ==================
    /// No student with the given id
    #[error("Student with ID {0} does not exist.")]
    NotFound(i64),

    // ==================
    // Server (5xx)
    // ==================
    /// Persistence layer unreachable or timed out
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Unexpected store failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidFieldFormat { .. } => StatusCode::BAD_REQUEST,
            ServiceError::MissingField(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidParameter(_) => StatusCode::BAD_REQUEST,

            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,

            ServiceError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                ServiceError::StoreUnavailable("connection pool timed out".to_string())
            }
            sqlx::Error::Io(e) => ServiceError::StoreUnavailable(e.to_string()),
            sqlx::Error::PoolClosed => {
                ServiceError::StoreUnavailable("connection pool closed".to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl From<&ServiceError> for ErrorDetail {
    fn from(err: &ServiceError) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorDetail::from(&self));
        (status, body).into_response()
    }
}
