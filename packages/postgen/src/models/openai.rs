//! OpenAI implementation of the LanguageModel trait.
//!
//! OpenAI serves the same chat-completions wire format, so this reuses the
//! Together client pointed at the OpenAI base URL.

use async_trait::async_trait;
use together_client::{StructuredOutput, TogetherClient};
use tracing::debug;

use crate::error::{PostGenError, Result};
use crate::traits::LanguageModel;
use crate::types::{ContentInsight, GeneratedPost, SelectedBest};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// OpenAI-backed language model, interchangeable with [`TogetherModel`].
///
/// [`TogetherModel`]: crate::models::TogetherModel
#[derive(Clone)]
pub struct OpenAiModel {
    client: TogetherClient,
    model: String,
    temperature: f32,
}

impl OpenAiModel {
    /// Create a model with the given OpenAI API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: TogetherClient::new(api_key).with_base_url(OPENAI_BASE_URL),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| PostGenError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn invoke<T: StructuredOutput>(&self, prompt: &str) -> Result<T> {
        debug!(model = %self.model, type_name = T::type_name(), "invoking OpenAI");
        self.client
            .extract_with_temperature::<T>(&self.model, SYSTEM_PROMPT, prompt, Some(self.temperature))
            .await
            .map_err(PostGenError::model)
    }
}

#[async_trait]
impl LanguageModel for OpenAiModel {
    async fn generate_insight(&self, prompt: &str) -> Result<ContentInsight> {
        self.invoke(prompt).await
    }

    async fn draft_post(&self, prompt: &str) -> Result<GeneratedPost> {
        self.invoke(prompt).await
    }

    async fn select_best(&self, prompt: &str) -> Result<SelectedBest> {
        self.invoke(prompt).await
    }
}
