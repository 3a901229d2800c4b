//! Content acquisition - the first pipeline stage.
//!
//! Merges fetched website text and user-supplied text into one grounding
//! blob. Fetch failures of any kind degrade to "no web content"; this
//! stage never fails the pipeline.

use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::ContentFetcher;
use crate::types::{GeneratorConfig, WorkflowState};

/// Normalize and validate a URL string.
///
/// Prefixes `http://` when no scheme is given, then checks the result
/// against a general URL shape (host with optional TLD, port, and path).
pub fn ensure_url(raw: &str) -> FetchResult<String> {
    let normalized = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("http://{}", raw)
    };

    let shape = Regex::new(
        r"^(?i)(https?://)?(www\.)?([a-zA-Z0-9.-]+)(\.[a-zA-Z]{2,})?(:\d+)?(/\S*)?$",
    )
    .unwrap();

    if !shape.is_match(&normalized) || Url::parse(&normalized).is_err() {
        return Err(FetchError::InvalidUrl {
            url: raw.to_string(),
        });
    }

    Ok(normalized)
}

/// Stage 1: fill `state.website_content` with the merged grounding blob.
///
/// Web content comes first, then the user-supplied content, separated by a
/// blank line. Either part may be absent; with neither, the blob is empty
/// and downstream stages run ungrounded.
pub async fn acquire_content<F: ContentFetcher>(
    fetcher: &F,
    config: &GeneratorConfig,
    state: &mut WorkflowState,
) {
    let mut parts: Vec<String> = Vec::new();

    if let Some(raw_url) = state.website_url.as_deref() {
        match fetch_website_content(fetcher, raw_url, config.max_content_chars).await {
            Ok(text) if !text.is_empty() => {
                debug!(
                    url = %raw_url,
                    chars = text.len(),
                    fetcher = fetcher.name(),
                    "website content acquired"
                );
                parts.push(text);
            }
            Ok(_) => {
                debug!(url = %raw_url, "website returned no visible text");
            }
            Err(e) => {
                warn!(url = %raw_url, error = %e, "website fetch failed, continuing without web content");
            }
        }
    }

    if let Some(given) = state.given_content.as_deref() {
        if !given.is_empty() {
            parts.push(given.to_string());
        }
    }

    state.website_content = parts.join("\n\n");
}

/// Validate the URL, fetch the page, and cap the extracted text.
async fn fetch_website_content<F: ContentFetcher>(
    fetcher: &F,
    raw_url: &str,
    max_chars: usize,
) -> FetchResult<String> {
    let url = ensure_url(raw_url)?;
    let text = fetcher.fetch(&url).await?;
    Ok(truncate_chars(text.trim(), max_chars))
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
