//! ContentFetcher trait for website text retrieval.

use async_trait::async_trait;

use crate::error::FetchResult;

/// ContentFetcher turns an already-validated URL into extracted page text.
///
/// The pipeline validates and normalizes URLs before calling `fetch`, and
/// applies its own length cap to whatever comes back. Implementations only
/// retrieve the page and reduce it to visible text.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch the page at `url` and return its visible text.
    async fn fetch(&self, url: &str) -> FetchResult<String>;

    /// Name of this fetcher (for logging).
    fn name(&self) -> &str {
        "fetcher"
    }
}
