use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Timeout exceeded: {0}")]
    TimeoutExceeded(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Proxy pool exhausted: {0}")]
    ProxyPoolExhausted(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TimeoutExceeded("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError("Failed to connect to upstream".to_string())
        } else if let Some(status) = err.status() {
            AppError::TransportError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl AppError {
    /// Whether the failure came from the caller giving up rather than the upstream.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, AppError::Cancelled(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
