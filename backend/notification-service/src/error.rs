/// Error types for Notification Service
///
/// Two kinds cross the request boundary: invalid-argument (bad input,
/// caught before any external call) and internal (a downstream service
/// failed; the original message rides along).
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for notification-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Required input missing or malformed
    InvalidArgument(String),

    /// Downstream service failure
    Internal(String),
}

/// Tagged error body returned to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub kind: String,
    pub status: u16,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let (error, kind) = match self {
            AppError::InvalidArgument(_) => ("Bad Request", "invalid-argument"),
            AppError::Internal(_) => ("Internal Server Error", "internal"),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error.to_string(),
            message: self.to_string(),
            kind: kind.to_string(),
            status: status.as_u16(),
        })
    }
}
