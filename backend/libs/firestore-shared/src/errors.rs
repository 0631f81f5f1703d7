use gcp_auth_shared::AuthError;
use thiserror::Error;

/// Firestore Client Error Types
#[derive(Error, Debug)]
pub enum FirestoreError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Firestore request failed: {0}")]
    RequestError(String),

    #[error("Firestore API error: {0} - {1}")]
    ApiError(String, String),
}
