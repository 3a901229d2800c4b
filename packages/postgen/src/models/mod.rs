//! Hosted model providers.
//!
//! Two interchangeable [`LanguageModel`](crate::traits::LanguageModel)
//! implementations over the same OpenAI-compatible chat-completions wire
//! format: Together (the default) and OpenAI (by pointing the client at a
//! different base URL and model).

mod openai;
mod together;

pub use openai::OpenAiModel;
pub use together::TogetherModel;
