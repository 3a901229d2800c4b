//! LinkedIn Post Generation Pipeline
//!
//! Orchestrates multiple LLM calls into a single forward pipeline: acquire
//! grounding content, generate three distinct content insights, draft one
//! post per insight, then have the model pick the best draft.
//!
//! # Design
//!
//! - One accumulating [`WorkflowState`] record threaded through every
//!   stage; each stage only adds fields.
//! - Collaborators behind traits: [`LanguageModel`] for structured model
//!   output, [`ContentFetcher`] for website text. Both have mock
//!   implementations in [`testing`].
//! - Error policy is per-stage: acquisition absorbs fetch failures, insight
//!   generation degrades to fixed fallbacks, drafting fails fast, selection
//!   recovers with a default. The entry point either returns a complete
//!   state or the drafting error.
//!
//! # Usage
//!
//! ```rust,ignore
//! use postgen::{Generator, GenerationRequest};
//! use postgen::fetchers::HttpFetcher;
//! use postgen::models::TogetherModel;
//!
//! let generator = Generator::new(HttpFetcher::new(), TogetherModel::from_env()?);
//!
//! let state = generator
//!     .run(
//!         GenerationRequest::new(
//!             "professional",
//!             "startup founders",
//!             "ship faster with less risk",
//!             "pragmatic engineer",
//!         )
//!         .with_website_url("example.com"),
//!     )
//!     .await?;
//!
//! if let Some(best) = state.best_post() {
//!     println!("{}\n{}", best.title, best.body);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (LanguageModel, ContentFetcher)
//! - [`types`] - Data model (insights, posts, request, state, config)
//! - [`pipeline`] - The four stages and the Generator facade
//! - [`fetchers`] - Reference HTTP fetcher
//! - [`testing`] - Mock collaborators for testing

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "providers")]
pub mod models;

// Re-export core types at crate root
pub use error::{FetchError, PostGenError};
pub use traits::{ContentFetcher, LanguageModel};
pub use types::{
    ContentInsight, GeneratedPost, GenerationRequest, GeneratorConfig, SelectedBest,
    WorkflowState,
};

// Re-export the pipeline entry points
pub use pipeline::{
    acquire_content, draft_posts, ensure_url, generate_insights, select_best, Generator,
};

// Re-export fetchers
pub use fetchers::HttpFetcher;

// Re-export testing utilities
pub use testing::{MockFetcher, MockModel, MockModelCall};
