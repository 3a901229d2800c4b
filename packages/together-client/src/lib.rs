//! Pure Together AI REST API client
//!
//! A clean, minimal client for Together's OpenAI-compatible chat-completions
//! API with no domain-specific logic. Supports chat completions and
//! schema-validated structured outputs.
//!
//! The client carries a bounded request timeout and a bounded retry count,
//! both configured once at construction; callers never retry themselves.
//!
//! # Example
//!
//! ```rust,ignore
//! use together_client::{TogetherClient, ChatRequest, Message};
//!
//! let client = TogetherClient::from_env()?;
//!
//! let response = client.chat_completion(ChatRequest {
//!     model: together_client::DEFAULT_MODEL.into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Insight {
//!     title: String,
//!     description: String,
//! }
//!
//! // Schema generated automatically from the type
//! let insight: Insight = client
//!     .extract::<Insight>(model, system_prompt, user_prompt)
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{Result, TogetherError};
pub use schema::StructuredOutput;
pub use types::*;

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Default chat model (the free Llama 3.3 70B turbo endpoint).
pub const DEFAULT_MODEL: &str = "meta-llama/Llama-3.3-70B-Instruct-Turbo-Free";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retries after a failed request.
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Pure Together API client.
#[derive(Clone)]
pub struct TogetherClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl TogetherClient {
    /// Create a new Together client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        Self {
            http_client: build_http_client(timeout),
            api_key: api_key.into(),
            base_url: "https://api.together.xyz/v1".to_string(),
            timeout,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create from environment variable `TOGETHER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TOGETHER_API_KEY")
            .map_err(|_| TogetherError::Config("TOGETHER_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies or other OpenAI-compatible hosts).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.http_client = build_http_client(timeout);
        self
    }

    /// Set the number of retries after a failed request.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Type-safe structured output extraction.
    ///
    /// Generates a strict JSON schema from the type `T` via `schemars`,
    /// requests schema-conformant output, and deserializes the response. If
    /// the raw response does not parse, one reparse is attempted with
    /// markdown code fences stripped before failing with a `Parse` error.
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Result<T> {
        self.extract_with_temperature(model, system_prompt, user_prompt, None)
            .await
    }

    /// Structured extraction with an explicit sampling temperature.
    pub async fn extract_with_temperature<T: StructuredOutput>(
        &self,
        model: &str,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        temperature: Option<f32>,
    ) -> Result<T> {
        let schema = T::strict_schema();

        debug!(
            type_name = T::type_name(),
            model = model,
            "requesting structured output"
        );

        let mut request = StructuredRequest::new(model, system_prompt, user_prompt, schema);
        request.temperature = temperature;

        let json_str = self.structured_output(request).await?;

        serde_json::from_str(&json_str)
            .or_else(|_| serde_json::from_str(strip_code_blocks(&json_str)))
            .map_err(|e| TogetherError::Parse(format!("Failed to deserialize response: {}", e)))
    }

    /// Chat completion.
    ///
    /// Send messages to the chat completion API and get a response.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();
        let model = request.model.clone();

        let raw = self.post_chat(&request).await?;

        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| TogetherError::Api("No response from Together".into()))?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(ChatResponse {
            content,
            usage: raw.usage,
        })
    }

    /// Structured output with JSON schema.
    ///
    /// Uses the `json_schema` response format for schema-conformant JSON.
    pub async fn structured_output(&self, request: StructuredRequest) -> Result<String> {
        let raw = self.post_chat(&request).await?;

        raw.choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| TogetherError::Api("No response from Together".into()))
    }

    /// POST a chat-completions request, retrying transient failures up to
    /// the configured count.
    async fn post_chat<B: Serialize>(&self, body: &B) -> Result<types::ChatResponseRaw> {
        let mut attempt: u32 = 0;
        loop {
            match self.post_chat_once(body).await {
                Ok(raw) => return Ok(raw),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(attempt, max_retries = self.max_retries, error = %e, "retrying request");
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn post_chat_once<B: Serialize>(&self, body: &B) -> Result<types::ChatResponseRaw> {
        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Together request failed");
                TogetherError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Together API error");
            return Err(TogetherError::Api(format!(
                "Together API error: {}",
                error_text
            )));
        }

        response
            .json()
            .await
            .map_err(|e| TogetherError::Parse(e.to_string()))
    }
}

fn build_http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}
