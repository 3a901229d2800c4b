//! HTTP-based content fetcher implementation.
//!
//! Fetches a single page and reduces it to visible text. Suitable for
//! server-rendered sites; JavaScript-heavy pages will come back mostly
//! empty.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::ContentFetcher;

/// HTTP fetcher that retrieves a page and extracts its visible text.
///
/// # Example
///
/// ```rust,ignore
/// use postgen::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new().with_user_agent("MyBot/1.0");
/// let text = fetcher.fetch("http://example.com").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "PostGenBot/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Reduce an HTML document to its visible text.
    fn html_to_text(&self, html: &str) -> String {
        let mut text = html.to_string();

        // Remove scripts and styles
        let script_pattern = regex::Regex::new(r"(?s)<script[^>]*>.*?</script>").unwrap();
        let style_pattern = regex::Regex::new(r"(?s)<style[^>]*>.*?</style>").unwrap();
        text = script_pattern.replace_all(&text, "").to_string();
        text = style_pattern.replace_all(&text, "").to_string();

        // Keep block boundaries as line breaks
        let block_pattern =
            regex::Regex::new(r"</(p|div|li|h1|h2|h3|h4|h5|h6|tr)>|<br\s*/?>").unwrap();
        text = block_pattern.replace_all(&text, "\n").to_string();

        // Remove remaining tags
        let tag_pattern = regex::Regex::new(r"<[^>]+>").unwrap();
        text = tag_pattern.replace_all(&text, " ").to_string();

        // Decode HTML entities
        text = text
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        // Clean up whitespace
        let spaces = regex::Regex::new(r"[ \t]+").unwrap();
        text = spaces.replace_all(&text, " ").to_string();
        let multi_newline = regex::Regex::new(r"\s*\n\s*").unwrap();
        text = multi_newline.replace_all(&text, "\n").to_string();

        text.trim().to_string()
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                FetchError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {}", status),
            ))));
        }

        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let text = self.html_to_text(&html);
        if text.is_empty() {
            return Err(FetchError::NoContent {
                url: url.to_string(),
            });
        }

        debug!(url = %url, chars = text.len(), "page text extracted");
        Ok(text)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text() {
        let fetcher = HttpFetcher::new();

        let html = r#"
            <html><head><style>body { color: red; }</style></head>
            <body>
                <h1>Title</h1>
                <p>First paragraph.</p>
                <p>Second &amp; third.</p>
                <script>console.log("hidden");</script>
            </body></html>
        "#;

        let text = fetcher.html_to_text(html);

        assert!(text.contains("Title"));
        assert!(text.contains("First paragraph."));
        assert!(text.contains("Second & third."));
        assert!(!text.contains("console.log"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains('<'));
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        let fetcher = HttpFetcher::new();

        let text = fetcher.html_to_text("<p>a   b</p>\n\n\n<p>c</p>");
        assert_eq!(text, "a b\nc");
    }
}
