use thiserror::Error;

/// Auth error types
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Failed to read service account key file: {0}")]
    KeyFileRead(String),

    #[error("Failed to parse service account key: {0}")]
    KeyFileParse(String),

    #[error("Missing credential environment variable: {0}")]
    MissingEnv(String),

    #[error("Failed to parse private key: {0}")]
    KeyParseError(String),

    #[error("Failed to encode JWT: {0}")]
    JwtEncodeError(String),

    #[error("Failed to get access token: {0}")]
    TokenError(String),

    #[error("Token request failed with status: {0}")]
    TokenRequestFailed(String),

    #[error("Failed to parse token response: {0}")]
    TokenParseError(String),
}
