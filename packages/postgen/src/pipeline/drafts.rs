//! Post drafting - the third pipeline stage.
//!
//! Fans out one branch per insight; all branches run concurrently and join
//! before selection. This is the one fail-fast stage: a single failed
//! branch aborts the whole invocation.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::error::Result;
use crate::pipeline::prompts;
use crate::traits::LanguageModel;
use crate::types::WorkflowState;

/// Stage 3: fill `state.linkedin_posts`, one post per insight, in insight
/// order. Propagates the first branch error.
pub async fn draft_posts<M: LanguageModel>(model: &M, state: &mut WorkflowState) -> Result<()> {
    let branches = state.content_insights.iter().enumerate().map(|(i, insight)| {
        let prompt = prompts::format_draft_prompt(
            insight,
            &state.tone,
            &state.target_audience,
            &state.value_proposition,
            &state.brand_persona,
        );
        async move {
            debug!(branch = i + 1, insight = %insight.title, "drafting post");
            model.draft_post(&prompt).await
        }
    });

    let posts = try_join_all(branches).await?;

    info!(posts = posts.len(), "post drafting complete");
    state.linkedin_posts = posts;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostGenError;
    use crate::testing::MockModel;
    use crate::types::{ContentInsight, GeneratedPost, GenerationRequest};

    fn state_with_insights(n: usize) -> WorkflowState {
        let mut state = WorkflowState::from_request(GenerationRequest::new(
            "tone", "audience", "value", "persona",
        ));
        state.content_insights = (1..=n)
            .map(|i| ContentInsight {
                title: format!("angle {}", i),
                description: "d".into(),
                audience_relevance: "a".into(),
                value_alignment: "v".into(),
            })
            .collect();
        state
    }

    fn post(title: &str) -> GeneratedPost {
        GeneratedPost {
            title: title.into(),
            hook: "h".into(),
            body: "b".into(),
            call_to_action: "c".into(),
            hashtags: None,
        }
    }

    #[tokio::test]
    async fn test_one_post_per_insight_in_order() {
        let model = MockModel::new().with_posts(vec![post("p1"), post("p2"), post("p3")]);
        let mut state = state_with_insights(3);

        draft_posts(&model, &mut state).await.unwrap();

        assert_eq!(state.linkedin_posts.len(), 3);
        let titles: Vec<_> = state.linkedin_posts.iter().map(|p| &p.title).collect();
        assert_eq!(titles, ["p1", "p2", "p3"]);
    }

    #[tokio::test]
    async fn test_single_branch_failure_aborts() {
        let model = MockModel::new()
            .with_posts(vec![post("p1"), post("p2"), post("p3")])
            .fail_drafts();
        let mut state = state_with_insights(3);

        let err = draft_posts(&model, &mut state).await.unwrap_err();

        assert!(matches!(err, PostGenError::Model(_)));
        assert!(state.linkedin_posts.is_empty(), "no partial results on abort");
    }

    #[tokio::test]
    async fn test_draft_prompt_embeds_insight_and_config() {
        let model = MockModel::new();
        let mut state = state_with_insights(1);

        draft_posts(&model, &mut state).await.unwrap();

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        let prompt = calls[0].prompt();
        assert!(prompt.contains("Insight Title: angle 1"));
        assert!(prompt.contains("Tone: tone"));
        assert!(prompt.contains("Brand Persona: persona"));
    }
}
