//! Together implementation of the LanguageModel trait.

use async_trait::async_trait;
use together_client::{StructuredOutput, TogetherClient};
use tracing::debug;

use crate::error::{PostGenError, Result};
use crate::traits::LanguageModel;
use crate::types::{ContentInsight, GeneratedPost, SelectedBest};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Default sampling temperature for generation.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Together-backed language model.
///
/// Uses the free Llama 3.3 70B turbo endpoint by default. Timeout and
/// retry behavior belong to the wrapped [`TogetherClient`].
///
/// # Example
///
/// ```rust,ignore
/// use postgen::models::TogetherModel;
///
/// let model = TogetherModel::from_env()?.with_temperature(0.4);
/// let generator = Generator::new(fetcher, model);
/// ```
#[derive(Clone)]
pub struct TogetherModel {
    client: TogetherClient,
    model: String,
    temperature: f32,
}

impl TogetherModel {
    /// Create a model over an existing client.
    pub fn new(client: TogetherClient) -> Self {
        Self {
            client,
            model: together_client::DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Create from environment variable `TOGETHER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = TogetherClient::from_env()
            .map_err(|e| PostGenError::Config(e.to_string()))?;
        Ok(Self::new(client))
    }

    /// Set the chat model.
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
        debug!(model = %self.model, type_name = T::type_name(), "invoking Together");
        self.client
            .extract_with_temperature::<T>(&self.model, SYSTEM_PROMPT, prompt, Some(self.temperature))
            .await
            .map_err(PostGenError::model)
    }
}

#[async_trait]
impl LanguageModel for TogetherModel {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_together_model_builder() {
        let model = TogetherModel::new(TogetherClient::new("tk-test"))
            .with_model("meta-llama/Llama-3.1-8B-Instruct-Turbo")
            .with_temperature(0.2);

        assert_eq!(model.model(), "meta-llama/Llama-3.1-8B-Instruct-Turbo");
        assert_eq!(model.temperature, 0.2);
    }

    #[test]
    fn test_defaults() {
        let model = TogetherModel::new(TogetherClient::new("tk-test"));

        assert_eq!(model.model(), together_client::DEFAULT_MODEL);
        assert_eq!(model.temperature, DEFAULT_TEMPERATURE);
    }
}
