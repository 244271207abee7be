//! Error type system for the myFlix backend
//!
//! This module provides a single error type with:
//! - Hierarchical error classification
//! - HTTP status code mapping
//! - Sanitized API responses with trace IDs
//!
//! Every handler returns `Result<T>`; the `IntoResponse` impl at the bottom
//! is the one place where errors are logged and translated for the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Main error type for the myFlix system
#[derive(Debug, thiserror::Error)]
pub enum MyflixError {
    // System-level errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    #[error("Dependency error: {0}")]
    DependencyError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    // API-related errors
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl MyflixError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            MyflixError::InvalidRequest(_) | MyflixError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }

            // 401 Unauthorized
            MyflixError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            MyflixError::PermissionDenied(_) => StatusCode::FORBIDDEN,

            // 404 Not Found
            MyflixError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            MyflixError::Conflict(_) => StatusCode::CONFLICT,

            // 422 Unprocessable Entity
            MyflixError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            MyflixError::DatabaseError(_)
            | MyflixError::DependencyError(_)
            | MyflixError::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type name for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            MyflixError::DatabaseError(_) => "DatabaseError",
            MyflixError::DependencyError(_) => "DependencyError",
            MyflixError::IoError(_) => "IoError",
            MyflixError::InvalidRequest(_) => "InvalidRequest",
            MyflixError::InvalidCredentials => "InvalidCredentials",
            MyflixError::AuthenticationError(_) => "AuthenticationError",
            MyflixError::PermissionDenied(_) => "PermissionDenied",
            MyflixError::NotFound(_) => "NotFound",
            MyflixError::Conflict(_) => "Conflict",
            MyflixError::ValidationError(_) => "ValidationError",
        }
    }

    /// Message safe to return to the client.
    ///
    /// 500-class errors carry internal detail (SQL text, pool state) that must
    /// never cross the API boundary; clients get a generic message and the
    /// trace ID, the full error goes to the server log.
    pub fn public_message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Error response structure for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error type identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Unique trace ID for this error
    pub trace_id: String,
}

impl ErrorResponse {
    /// Create a new error response with a generated trace ID
    pub fn new(error: String, message: String) -> Self {
        Self {
            error,
            message,
            details: None,
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an error response with additional details
    pub fn with_details(error: String, message: String, details: serde_json::Value) -> Self {
        Self {
            error,
            message,
            details: Some(details),
            trace_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an error response from a MyflixError
    pub fn from_error(error: &MyflixError) -> Self {
        Self::new(error.error_type().to_string(), error.public_message())
    }
}

/// Implement IntoResponse for MyflixError to enable automatic error handling in Axum
impl IntoResponse for MyflixError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let error_response = ErrorResponse::from_error(&self);

        // Log the full error with trace ID; the response body may be sanitized
        tracing::error!(
            error_type = self.error_type(),
            trace_id = %error_response.trace_id,
            status_code = %status_code,
            "Request failed: {}",
            self
        );

        (status_code, Json(error_response)).into_response()
    }
}

/// Result type alias for operations that can fail with MyflixError
pub type Result<T> = std::result::Result<T, MyflixError>;
