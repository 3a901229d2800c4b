//! Content insight type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A structured content insight: one angle on the source material that a
/// single post can be drafted from.
///
/// Doc comments on the fields become schema descriptions, so the model sees
/// the same field contracts the code does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContentInsight {
    /// Creative title of the insight (max 10 words)
    pub title: String,

    /// Detailed explanation of the insight (2-3 sentences)
    pub description: String,

    /// How the insight relates to the target audience
    pub audience_relevance: String,

    /// How the insight aligns with the value proposition
    pub value_alignment: String,
}

impl ContentInsight {
    /// Fixed substitute used when the model call for insight `index`
    /// (1-based) fails. Keeps the pipeline progressing with exactly the
    /// expected number of insights.
    pub fn fallback(index: usize) -> Self {
        Self {
            title: format!("Insight {}", index),
            description: "Unable to generate insight. Please try again.".to_string(),
            audience_relevance: "N/A".to_string(),
            value_alignment: "N/A".to_string(),
        }
    }

    /// Whether this insight is the fixed fallback rather than model output.
    pub fn is_fallback(&self) -> bool {
        self.audience_relevance == "N/A" && self.value_alignment == "N/A"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_insight() {
        let insight = ContentInsight::fallback(2);

        assert_eq!(insight.title, "Insight 2");
        assert_eq!(
            insight.description,
            "Unable to generate insight. Please try again."
        );
        assert_eq!(insight.audience_relevance, "N/A");
        assert_eq!(insight.value_alignment, "N/A");
        assert!(insight.is_fallback());
    }

    #[test]
    fn test_insight_roundtrip() {
        let insight = ContentInsight {
            title: "Remote work reshapes hiring".to_string(),
            description: "Distributed teams widen the talent pool.".to_string(),
            audience_relevance: "Recruiters compete globally now.".to_string(),
            value_alignment: "Supports the flexible-hiring pitch.".to_string(),
        };

        let json = serde_json::to_string(&insight).unwrap();
        let back: ContentInsight = serde_json::from_str(&json).unwrap();
        assert_eq!(insight, back);
        assert!(!back.is_fallback());
    }
}
