//! Typed errors for the post generation pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Error policy differs per stage and is part of the pipeline contract:
//! content acquisition absorbs fetch failures, insight generation degrades
//! to fallback values, post drafting fails fast, and best-post selection
//! recovers with a default selection.

use thiserror::Error;

/// Errors that can occur during post generation.
#[derive(Debug, Error)]
pub enum PostGenError {
    /// Model invocation failed (provider error, timeout, schema mismatch)
    #[error("model invocation failed: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Content fetch failed
    #[error("content fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The selection references a post index outside the drafted list
    #[error("selected post id {id} out of range for {post_count} posts")]
    InvalidSelection { id: usize, post_count: usize },

    /// Configuration error (missing API key, invalid settings)
    #[error("config error: {0}")]
    Config(String),
}

impl PostGenError {
    /// Wrap a collaborator error as a model invocation failure.
    pub fn model(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        PostGenError::Model(Box::new(err))
    }
}

/// Errors that can occur while fetching website content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL failed the shape check
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response carried no usable text
    #[error("no content at: {url}")]
    NoContent { url: String },
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, PostGenError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
