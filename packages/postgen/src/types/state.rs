//! Workflow state threaded through the pipeline.

use serde::{Deserialize, Serialize};

use crate::types::{ContentInsight, GeneratedPost, SelectedBest};

/// User-supplied configuration for one generation run.
///
/// `website_url` and `given_content` are both optional; callers are
/// expected to supply at least one, but the pipeline tolerates neither
/// (insights are then generated without a grounding source).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Website to fetch grounding content from (scheme optional)
    pub website_url: Option<String>,

    /// Literal grounding content supplied by the user
    pub given_content: Option<String>,

    /// Tone of the generated posts (e.g. "professional", "conversational")
    pub tone: String,

    /// Who the posts should speak to
    pub target_audience: String,

    /// The value proposition the posts should reinforce
    pub value_proposition: String,

    /// The brand voice the posts should be written in
    pub brand_persona: String,
}

impl GenerationRequest {
    /// Create a request with the four required configuration strings.
    pub fn new(
        tone: impl Into<String>,
        target_audience: impl Into<String>,
        value_proposition: impl Into<String>,
        brand_persona: impl Into<String>,
    ) -> Self {
        Self {
            website_url: None,
            given_content: None,
            tone: tone.into(),
            target_audience: target_audience.into(),
            value_proposition: value_proposition.into(),
            brand_persona: brand_persona.into(),
        }
    }

    /// Set the website URL to fetch content from.
    pub fn with_website_url(mut self, url: impl Into<String>) -> Self {
        self.website_url = Some(url.into());
        self
    }

    /// Set literal content to ground the posts in.
    pub fn with_given_content(mut self, content: impl Into<String>) -> Self {
        self.given_content = Some(content.into());
        self
    }
}

/// The accumulating record threaded through every pipeline stage.
///
/// Created once per invocation from a [`GenerationRequest`]; each stage
/// only ever adds to it (acquisition fills `website_content`, insight
/// generation fills `content_insights`, drafting fills `linkedin_posts`,
/// selection fills `best_selected`). Nothing persists across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Website to fetch grounding content from
    pub website_url: Option<String>,

    /// Literal grounding content supplied by the user
    pub given_content: Option<String>,

    /// Tone of the generated posts
    pub tone: String,

    /// Who the posts should speak to
    pub target_audience: String,

    /// The value proposition the posts should reinforce
    pub value_proposition: String,

    /// The brand voice the posts should be written in
    pub brand_persona: String,

    /// Merged grounding text (web content first, then given content)
    pub website_content: String,

    /// Content insights, one per drafting branch (real or fallback)
    pub content_insights: Vec<ContentInsight>,

    /// Drafted posts, in insight order
    pub linkedin_posts: Vec<GeneratedPost>,

    /// The model's choice of best post, if any posts were drafted
    pub best_selected: Option<SelectedBest>,
}

impl WorkflowState {
    /// Create the initial state from a request. All derived fields start
    /// empty; stages fill them as control flows forward.
    pub fn from_request(request: GenerationRequest) -> Self {
        Self {
            website_url: request.website_url,
            given_content: request.given_content,
            tone: request.tone,
            target_audience: request.target_audience,
            value_proposition: request.value_proposition,
            brand_persona: request.brand_persona,
            website_content: String::new(),
            content_insights: Vec::new(),
            linkedin_posts: Vec::new(),
            best_selected: None,
        }
    }

    /// Look up the post the selection points at.
    ///
    /// Returns `None` when no selection was made. The selection id is
    /// validated at selection time, so a `Some` selection always resolves.
    pub fn best_post(&self) -> Option<&GeneratedPost> {
        let selected = self.best_selected.as_ref()?;
        self.linkedin_posts.get(selected.id - 1)
    }
}

impl From<GenerationRequest> for WorkflowState {
    fn from(request: GenerationRequest) -> Self {
        Self::from_request(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::new(
            "professional",
            "startup founders",
            "ship faster with less risk",
            "pragmatic engineer",
        )
    }

    #[test]
    fn test_request_builder() {
        let req = request()
            .with_website_url("example.com")
            .with_given_content("release notes");

        assert_eq!(req.website_url.as_deref(), Some("example.com"));
        assert_eq!(req.given_content.as_deref(), Some("release notes"));
        assert_eq!(req.tone, "professional");
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = WorkflowState::from_request(request());

        assert!(state.website_content.is_empty());
        assert!(state.content_insights.is_empty());
        assert!(state.linkedin_posts.is_empty());
        assert!(state.best_selected.is_none());
        assert!(state.best_post().is_none());
    }

    #[test]
    fn test_best_post_lookup() {
        let mut state = WorkflowState::from_request(request());
        state.linkedin_posts = vec![
            GeneratedPost {
                title: "first".into(),
                hook: "h".into(),
                body: "b".into(),
                call_to_action: "c".into(),
                hashtags: None,
            },
            GeneratedPost {
                title: "second".into(),
                hook: "h".into(),
                body: "b".into(),
                call_to_action: "c".into(),
                hashtags: None,
            },
        ];
        state.best_selected = Some(SelectedBest {
            id: 2,
            reason: "stronger hook".into(),
        });

        assert_eq!(state.best_post().unwrap().title, "second");
    }
}
