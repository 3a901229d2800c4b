//! Insight generation - the second pipeline stage.
//!
//! Issues one sequential model call per insight. A failed call substitutes
//! the fixed fallback insight; this stage always produces exactly the
//! configured number of insights and never fails the pipeline.

use tracing::{debug, error};

use crate::pipeline::prompts;
use crate::traits::LanguageModel;
use crate::types::{ContentInsight, GeneratorConfig, WorkflowState};

/// Stage 2: fill `state.content_insights`.
pub async fn generate_insights<M: LanguageModel>(
    model: &M,
    config: &GeneratorConfig,
    state: &mut WorkflowState,
) {
    let total = config.insight_count;
    let mut insights: Vec<ContentInsight> = Vec::with_capacity(total);

    for index in 1..=total {
        let prompt = prompts::format_insight_prompt(
            &state.website_content,
            &state.target_audience,
            &state.value_proposition,
            index,
            total,
        );

        match model.generate_insight(&prompt).await {
            Ok(insight) => {
                debug!(index, title = %insight.title, "insight generated");
                insights.push(insight);
            }
            Err(e) => {
                error!(index, error = %e, "insight generation failed, substituting fallback");
                insights.push(ContentInsight::fallback(index));
            }
        }
    }

    state.content_insights = insights;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockModel, MockModelCall};
    use crate::types::GenerationRequest;

    fn state() -> WorkflowState {
        WorkflowState::from_request(
            GenerationRequest::new("tone", "audience", "value", "persona")
                .with_given_content("grounding text"),
        )
    }

    fn insight(title: &str) -> ContentInsight {
        ContentInsight {
            title: title.into(),
            description: "d".into(),
            audience_relevance: "a".into(),
            value_alignment: "v".into(),
        }
    }

    #[tokio::test]
    async fn test_three_insights_generated() {
        let model = MockModel::new()
            .with_insights(vec![insight("one"), insight("two"), insight("three")]);
        let mut state = state();

        generate_insights(&model, &GeneratorConfig::default(), &mut state).await;

        assert_eq!(state.content_insights.len(), 3);
        assert_eq!(state.content_insights[1].title, "two");
    }

    #[tokio::test]
    async fn test_failed_call_substitutes_fallback() {
        let model = MockModel::new()
            .with_insights(vec![insight("one"), insight("two"), insight("three")])
            .fail_insight(2);
        let mut state = state();

        generate_insights(&model, &GeneratorConfig::default(), &mut state).await;

        assert_eq!(state.content_insights.len(), 3);
        assert!(!state.content_insights[0].is_fallback());
        assert_eq!(state.content_insights[1], ContentInsight::fallback(2));
        assert!(!state.content_insights[2].is_fallback());
    }

    #[tokio::test]
    async fn test_all_calls_failing_still_yields_three() {
        let model = MockModel::new()
            .fail_insight(1)
            .fail_insight(2)
            .fail_insight(3);
        let mut state = state();

        generate_insights(&model, &GeneratorConfig::default(), &mut state).await;

        assert_eq!(state.content_insights.len(), 3);
        for (i, insight) in state.content_insights.iter().enumerate() {
            assert_eq!(*insight, ContentInsight::fallback(i + 1));
        }
    }

    #[tokio::test]
    async fn test_prompt_carries_index_and_grounding() {
        let model = MockModel::new();
        let mut state = state();

        generate_insights(&model, &GeneratorConfig::default(), &mut state).await;

        let calls = model.calls();
        assert_eq!(calls.len(), 3);
        match &calls[2] {
            MockModelCall::GenerateInsight { prompt } => {
                assert!(prompt.contains("insight #3 of 3"));
                assert!(prompt.contains("grounding text"));
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }
}
