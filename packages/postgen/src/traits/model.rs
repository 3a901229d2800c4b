//! LanguageModel trait for structured model invocations.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ContentInsight, GeneratedPost, SelectedBest};

/// LanguageModel abstracts the hosted model endpoint behind one method per
/// structured operation the pipeline performs.
///
/// Implementations wrap a specific provider (Together, OpenAI, ...) and
/// handle prompting mechanics and response validation. Each method issues
/// exactly one invocation; the provider client owns timeout and retry
/// configuration. A returned error means the invocation failed after the
/// client's bounded retries; how that error is handled (fallback vs.
/// abort) is the calling stage's decision, not the model's.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Produce one content insight from the given prompt.
    async fn generate_insight(&self, prompt: &str) -> Result<ContentInsight>;

    /// Draft one LinkedIn post from the given prompt.
    async fn draft_post(&self, prompt: &str) -> Result<GeneratedPost>;

    /// Choose the best post from the numbered list in the given prompt.
    async fn select_best(&self, prompt: &str) -> Result<SelectedBest>;
}
