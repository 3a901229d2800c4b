//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the pipeline without
//! making real model or network calls.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult, PostGenError, Result};
use crate::traits::{ContentFetcher, LanguageModel};
use crate::types::{ContentInsight, GeneratedPost, SelectedBest};

fn mock_failure(what: &str) -> PostGenError {
    PostGenError::model(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("mock {} failure", what),
    ))
}

/// A mock language model for testing.
///
/// Scripted responses are consumed in call order; once a script runs out,
/// deterministic defaults derived from the prompt are returned, so an
/// unscripted mock behaves like a fixed model that echoes structured
/// output for a known prompt.
#[derive(Default)]
pub struct MockModel {
    /// Scripted insights, consumed in call order
    insights: Arc<RwLock<VecDeque<ContentInsight>>>,

    /// Scripted posts, consumed in call order
    posts: Arc<RwLock<VecDeque<GeneratedPost>>>,

    /// Scripted selection
    selection: Arc<RwLock<Option<SelectedBest>>>,

    /// 1-based insight-call indexes that fail
    fail_insights: Arc<RwLock<HashSet<usize>>>,

    /// 1-based draft-call indexes that fail
    fail_draft_calls: Arc<RwLock<HashSet<usize>>>,

    /// Fail every draft call
    fail_all_drafts: Arc<RwLock<bool>>,

    /// Fail the selection call
    fail_selection: Arc<RwLock<bool>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub enum MockModelCall {
    GenerateInsight { prompt: String },
    DraftPost { prompt: String },
    SelectBest { prompt: String },
}

impl MockModelCall {
    /// The prompt this call carried, whatever its kind.
    pub fn prompt(&self) -> &str {
        match self {
            MockModelCall::GenerateInsight { prompt }
            | MockModelCall::DraftPost { prompt }
            | MockModelCall::SelectBest { prompt } => prompt,
        }
    }
}

impl MockModel {
    /// Create a new mock model with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the insights returned by successive `generate_insight` calls.
    pub fn with_insights(self, insights: Vec<ContentInsight>) -> Self {
        self.insights.write().unwrap().extend(insights);
        self
    }

    /// Script the posts returned by successive `draft_post` calls.
    pub fn with_posts(self, posts: Vec<GeneratedPost>) -> Self {
        self.posts.write().unwrap().extend(posts);
        self
    }

    /// Script the selection returned by `select_best`.
    pub fn with_selection(self, selection: SelectedBest) -> Self {
        *self.selection.write().unwrap() = Some(selection);
        self
    }

    /// Make the `index`-th (1-based) `generate_insight` call fail.
    pub fn fail_insight(self, index: usize) -> Self {
        self.fail_insights.write().unwrap().insert(index);
        self
    }

    /// Make the `index`-th (1-based) `draft_post` call fail.
    pub fn fail_draft(self, index: usize) -> Self {
        self.fail_draft_calls.write().unwrap().insert(index);
        self
    }

    /// Make every `draft_post` call fail.
    pub fn fail_drafts(self) -> Self {
        *self.fail_all_drafts.write().unwrap() = true;
        self
    }

    /// Make the `select_best` call fail.
    pub fn fail_selection(self) -> Self {
        *self.fail_selection.write().unwrap() = true;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, call: MockModelCall) -> usize {
        let mut calls = self.calls.write().unwrap();
        let kind = std::mem::discriminant(&call);
        calls.push(call);
        calls
            .iter()
            .filter(|c| std::mem::discriminant(*c) == kind)
            .count()
    }

    /// Deterministic default insight for an unscripted prompt.
    fn default_insight(prompt: &str) -> ContentInsight {
        ContentInsight {
            title: format!("Mock insight ({} chars)", prompt.len()),
            description: "A deterministic mock insight.".to_string(),
            audience_relevance: "Relevant to the mock audience.".to_string(),
            value_alignment: "Aligned with the mock value proposition.".to_string(),
        }
    }

    /// Deterministic default post, echoing the insight title from the prompt.
    fn default_post(prompt: &str) -> GeneratedPost {
        let insight_title = prompt
            .lines()
            .find_map(|line| line.strip_prefix("Insight Title: "))
            .unwrap_or("untitled");

        GeneratedPost {
            title: format!("Post: {}", insight_title),
            hook: "A deterministic mock hook.".to_string(),
            body: "A deterministic mock body.".to_string(),
            call_to_action: "Follow for more.".to_string(),
            hashtags: None,
        }
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn generate_insight(&self, prompt: &str) -> Result<ContentInsight> {
        let call_index = self.record(MockModelCall::GenerateInsight {
            prompt: prompt.to_string(),
        });

        if self.fail_insights.read().unwrap().contains(&call_index) {
            return Err(mock_failure("insight"));
        }

        if let Some(next) = self.insights.write().unwrap().pop_front() {
            return Ok(next);
        }
        Ok(Self::default_insight(prompt))
    }

    async fn draft_post(&self, prompt: &str) -> Result<GeneratedPost> {
        let call_index = self.record(MockModelCall::DraftPost {
            prompt: prompt.to_string(),
        });

        if *self.fail_all_drafts.read().unwrap()
            || self.fail_draft_calls.read().unwrap().contains(&call_index)
        {
            return Err(mock_failure("draft"));
        }

        if let Some(next) = self.posts.write().unwrap().pop_front() {
            return Ok(next);
        }
        Ok(Self::default_post(prompt))
    }

    async fn select_best(&self, prompt: &str) -> Result<SelectedBest> {
        self.record(MockModelCall::SelectBest {
            prompt: prompt.to_string(),
        });

        if *self.fail_selection.read().unwrap() {
            return Err(mock_failure("selection"));
        }

        Ok(self
            .selection
            .read()
            .unwrap()
            .clone()
            .unwrap_or(SelectedBest {
                id: 1,
                reason: "Mock selection".to_string(),
            }))
    }
}

/// A mock content fetcher for testing.
///
/// Returns scripted text without making network requests.
#[derive(Default)]
pub struct MockFetcher {
    /// Scripted text by URL
    pages: Arc<RwLock<HashMap<String, String>>>,

    /// URLs that should fail
    fail_urls: Arc<RwLock<HashSet<String>>>,

    /// Fetched URLs, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the text returned for a URL.
    pub fn with_page(self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), text.into());
        self
    }

    /// Mark a URL as failing.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().insert(url.into());
        self
    }

    /// Get all URLs fetched from this mock.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if self.fail_urls.read().unwrap().contains(url) {
            return Err(FetchError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock connection refused",
            ))));
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NoContent {
                url: url.to_string(),
            })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_model_defaults_are_deterministic() {
        let model = MockModel::new();

        let a = model.generate_insight("same prompt").await.unwrap();
        let b = model.generate_insight("same prompt").await.unwrap();
        assert_eq!(a, b);

        let post = model
            .draft_post("Generate...\nInsight Title: growth loops\n...")
            .await
            .unwrap();
        assert_eq!(post.title, "Post: growth loops");
    }

    #[tokio::test]
    async fn test_mock_model_scripts_consumed_in_order() {
        let model = MockModel::new().with_insights(vec![
            ContentInsight {
                title: "first".into(),
                description: "d".into(),
                audience_relevance: "a".into(),
                value_alignment: "v".into(),
            },
        ]);

        let first = model.generate_insight("p").await.unwrap();
        assert_eq!(first.title, "first");

        // Script exhausted, defaults take over
        let second = model.generate_insight("p").await.unwrap();
        assert!(second.title.starts_with("Mock insight"));
    }

    #[tokio::test]
    async fn test_mock_model_failure_injection() {
        let model = MockModel::new().fail_insight(2).fail_selection();

        assert!(model.generate_insight("p").await.is_ok());
        assert!(model.generate_insight("p").await.is_err());
        assert!(model.generate_insight("p").await.is_ok());
        assert!(model.select_best("p").await.is_err());

        assert_eq!(model.calls().len(), 4);
    }

    #[tokio::test]
    async fn test_mock_fetcher() {
        let fetcher = MockFetcher::new()
            .with_page("http://example.com", "page text")
            .fail_url("http://down.example.com");

        assert_eq!(
            fetcher.fetch("http://example.com").await.unwrap(),
            "page text"
        );
        assert!(fetcher.fetch("http://down.example.com").await.is_err());
        assert!(matches!(
            fetcher.fetch("http://unknown.example.com").await,
            Err(FetchError::NoContent { .. })
        ));
        assert_eq!(fetcher.calls().len(), 3);
    }
}
