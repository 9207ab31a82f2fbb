//! Unified error handling
//!
//! [`AppError`] is the primary error type across API handlers and
//! repositories. Every error carries an [`ErrorCode`] which maps to an HTTP
//! status, and a human-readable message.
//!
//! Error responses follow a single shape:
//!
//! ```json
//! { "error": "Không tìm thấy địa chỉ" }
//! ```
//!
//! with an HTTP status from {400, 401, 403, 404, 500}. Server-side failures
//! (5xx) are logged with their cause and rendered with a generic message so
//! internal detail never reaches the caller.

mod codes;
mod http;

pub use codes::ErrorCode;

use crate::response::ErrorBody;
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Application error with a structured code and message
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error (400)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error (404)
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    /// Create an in-use error (400) for usage-guarded deletion
    pub fn in_use(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InUse, msg)
    }

    /// Create an insufficient stock error (400)
    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InsufficientStock, msg)
    }

    /// Create a not authenticated error (401)
    pub fn unauthorized() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    /// Invalid credentials with a unified message (prevents email enumeration)
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    /// Create an invalid token error (401)
    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    /// Create a token expired error (401)
    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    /// Create a permission denied error (403)
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::PermissionDenied, msg)
    }

    /// Create an already exists error (400)
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Create an invalid request error (400)
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create a database error (500)
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an internal error (500)
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> ::http::StatusCode {
        self.code.http_status()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();

        // 5xx: log the cause, never expose internal detail
        let message = if status.is_server_error() {
            error!(code = %self.code, error = %self.message, "Server error");
            self.code.message().to_string()
        } else {
            self.message
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_codes() {
        assert_eq!(AppError::not_found("x").code, ErrorCode::NotFound);
        assert_eq!(AppError::in_use("x").code, ErrorCode::InUse);
        assert_eq!(
            AppError::insufficient_stock("x").code,
            ErrorCode::InsufficientStock
        );
        assert_eq!(AppError::unauthorized().code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_message_preserved() {
        let err = AppError::validation("quantity must be positive");
        assert_eq!(err.to_string(), "quantity must be positive");
    }
}
