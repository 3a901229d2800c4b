//! Generated post and selection types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A structured LinkedIn post drafted from one content insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedPost {
    /// Attention-grabbing title for the LinkedIn post
    pub title: String,

    /// Strong, engaging opening line to capture the reader's attention
    pub hook: String,

    /// Substantive content that provides value and elaborates on the insight
    pub body: String,

    /// Compelling call to action that encourages reader engagement
    pub call_to_action: String,

    /// Relevant hashtags to increase post visibility
    pub hashtags: Option<Vec<String>>,
}

/// The model's choice of the best drafted post.
///
/// `id` is a 1-based index into the drafted post list; the pipeline rejects
/// out-of-range ids and substitutes the default selection instead of
/// letting a downstream lookup go undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SelectedBest {
    /// 1-based index of the chosen post in the drafted list
    pub id: usize,

    /// Why this post was chosen
    pub reason: String,
}

impl SelectedBest {
    /// Fixed substitute used when the selection call fails: the first post.
    pub fn fallback() -> Self {
        Self {
            id: 1,
            reason: "default selection due to error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_selection() {
        let selected = SelectedBest::fallback();

        assert_eq!(selected.id, 1);
        assert_eq!(selected.reason, "default selection due to error");
    }

    #[test]
    fn test_post_hashtags_optional() {
        let json = r#"{
            "title": "T",
            "hook": "H",
            "body": "B",
            "call_to_action": "C",
            "hashtags": null
        }"#;

        let post: GeneratedPost = serde_json::from_str(json).unwrap();
        assert!(post.hashtags.is_none());

        let json = r##"{
            "title": "T",
            "hook": "H",
            "body": "B",
            "call_to_action": "C",
            "hashtags": ["#rust", "#linkedin"]
        }"##;

        let post: GeneratedPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.hashtags.as_deref().unwrap().len(), 2);
    }
}
