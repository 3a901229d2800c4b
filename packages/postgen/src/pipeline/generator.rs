//! The Generator - main entry point for the post generation pipeline.
//!
//! Drives the four stages as a strictly forward task graph:
//!
//! ```text
//! Start -> ContentAcquired -> InsightsReady -> PostsReady -> Selected -> End
//! ```
//!
//! `PostsReady` is reached through one fan-out/fan-in point: one drafting
//! branch per insight, joined before selection. Acquisition and insight
//! generation absorb their own failures; drafting is fail-fast; selection
//! recovers with a default. The caller either gets a complete
//! [`WorkflowState`] or the drafting error.

use tracing::{debug, info};

use crate::error::Result;
use crate::pipeline::{acquire, drafts, insights, select};
use crate::traits::{ContentFetcher, LanguageModel};
use crate::types::{GenerationRequest, GeneratorConfig, WorkflowState};

/// The main entry point - orchestrates fetching, insight generation, post
/// drafting, and best-post selection over one mutable state record.
///
/// # Example
///
/// ```rust,ignore
/// let generator = Generator::new(HttpFetcher::new(), TogetherModel::from_env()?);
///
/// let request = GenerationRequest::new(
///     "professional", "startup founders", "ship faster", "pragmatic engineer",
/// )
/// .with_website_url("example.com");
///
/// let state = generator.run(request).await?;
/// println!("{:?}", state.best_post());
/// ```
pub struct Generator<F: ContentFetcher, M: LanguageModel> {
    fetcher: F,
    model: M,
    config: GeneratorConfig,
}

impl<F: ContentFetcher, M: LanguageModel> Generator<F, M> {
    /// Create a generator with the default configuration.
    pub fn new(fetcher: F, model: M) -> Self {
        Self {
            fetcher,
            model,
            config: GeneratorConfig::default(),
        }
    }

    /// Create with custom configuration.
    pub fn with_config(fetcher: F, model: M, config: GeneratorConfig) -> Self {
        Self {
            fetcher,
            model,
            config,
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the full pipeline for one request.
    ///
    /// Returns the final state, or the drafting-stage error - the only
    /// error this pipeline propagates. State is per-invocation; nothing is
    /// shared between runs.
    pub async fn run(&self, request: GenerationRequest) -> Result<WorkflowState> {
        let mut state = WorkflowState::from_request(request);

        acquire::acquire_content(&self.fetcher, &self.config, &mut state).await;
        debug!(
            content_chars = state.website_content.len(),
            "content acquired"
        );

        insights::generate_insights(&self.model, &self.config, &mut state).await;
        debug!(insights = state.content_insights.len(), "insights ready");

        drafts::draft_posts(&self.model, &mut state).await?;

        select::select_best(&self.model, &mut state).await;

        info!(
            posts = state.linkedin_posts.len(),
            best = state.best_selected.as_ref().map(|s| s.id),
            "generation complete"
        );
        Ok(state)
    }

    /// Get a reference to the fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the model.
    pub fn model(&self) -> &M {
        &self.model
    }
}
