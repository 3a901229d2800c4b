//! Error types for the Together client.

use thiserror::Error;

/// Result type for Together client operations.
pub type Result<T> = std::result::Result<T, TogetherError>;

/// Together client errors.
#[derive(Debug, Error)]
pub enum TogetherError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response, rate limit, invalid request)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, response does not match the schema)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl TogetherError {
    /// Whether a failed request may be reissued.
    ///
    /// Network and API failures are transient; config and parse failures
    /// would fail identically on a second attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TogetherError::Network(_) | TogetherError::Api(_))
    }
}
