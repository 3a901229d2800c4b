//! Configuration for the generation pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the generation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// How many insights (and so drafting branches) to generate.
    ///
    /// Default: 3.
    pub insight_count: usize,

    /// Character cap applied to fetched website text before it enters the
    /// merged content blob. User-supplied content is never capped.
    ///
    /// Default: 10_000.
    pub max_content_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            insight_count: 3,
            max_content_chars: 10_000,
        }
    }
}

impl GeneratorConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of insights to generate.
    pub fn with_insight_count(mut self, count: usize) -> Self {
        self.insight_count = count;
        self
    }

    /// Set the fetched-content character cap.
    pub fn with_max_content_chars(mut self, cap: usize) -> Self {
        self.max_content_chars = cap;
        self
    }
}
