use gcp_auth_shared::AuthError;
use thiserror::Error;

/// Storage Client Error Types
#[derive(Error, Debug)]
pub enum GcsError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage request failed: {0}")]
    RequestError(String),

    #[error("Failed to parse storage response: {0}")]
    ResponseParseError(String),

    #[error("Storage API error: {0} - {1}")]
    ApiError(String, String),
}
