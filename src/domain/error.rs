//! Errors raised while talking to the assistant backend

use thiserror::Error;

/// Errors that can occur when calling the backend API
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Backend request timed out")]
    Timeout,

    /// Response body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),
}

impl BackendError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::Api { status, .. } if (400..500).contains(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::Parse(err.to_string())
        } else if err.is_connect() {
            BackendError::Network(format!("Connection error: {}", err))
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::Parse(err.to_string())
    }
}

/// Result type alias for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
