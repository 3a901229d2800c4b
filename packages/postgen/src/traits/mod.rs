//! Core trait abstractions.
//!
//! The pipeline talks to its two external collaborators through these
//! seams: a language model that returns schema-conformant structured
//! output, and a fetcher that turns a URL into plain text.

pub mod fetcher;
pub mod model;

pub use fetcher::ContentFetcher;
pub use model::LanguageModel;
