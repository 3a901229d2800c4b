//! Best-post selection - the final pipeline stage.
//!
//! One model call over the numbered post list. Failures never propagate:
//! the fixed default selection (post 1) is substituted instead. With no
//! drafted posts the stage is a no-op.

use tracing::{debug, warn};

use crate::error::PostGenError;
use crate::pipeline::prompts;
use crate::traits::LanguageModel;
use crate::types::{SelectedBest, WorkflowState};

/// Stage 4: fill `state.best_selected`.
pub async fn select_best<M: LanguageModel>(model: &M, state: &mut WorkflowState) {
    if state.linkedin_posts.is_empty() {
        debug!("no drafted posts, skipping selection");
        return;
    }

    let post_count = state.linkedin_posts.len();
    let prompt = prompts::format_select_prompt(&state.linkedin_posts);

    let selected = match model.select_best(&prompt).await {
        Ok(selected) if (1..=post_count).contains(&selected.id) => {
            debug!(id = selected.id, "best post selected");
            selected
        }
        Ok(selected) => {
            let err = PostGenError::InvalidSelection {
                id: selected.id,
                post_count,
            };
            warn!(error = %err, "selection out of range, using default");
            SelectedBest::fallback()
        }
        Err(e) => {
            warn!(error = %e, "best-post selection failed, using default");
            SelectedBest::fallback()
        }
    };

    state.best_selected = Some(selected);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockModel;
    use crate::types::{GeneratedPost, GenerationRequest};

    fn state_with_posts(n: usize) -> WorkflowState {
        let mut state = WorkflowState::from_request(GenerationRequest::new(
            "tone", "audience", "value", "persona",
        ));
        state.linkedin_posts = (1..=n)
            .map(|i| GeneratedPost {
                title: format!("post {}", i),
                hook: "h".into(),
                body: "b".into(),
                call_to_action: "c".into(),
                hashtags: None,
            })
            .collect();
        state
    }

    #[tokio::test]
    async fn test_empty_post_list_is_noop() {
        let model = MockModel::new();
        let mut state = state_with_posts(0);

        select_best(&model, &mut state).await;

        assert!(state.best_selected.is_none());
        assert!(model.calls().is_empty());
    }

    #[tokio::test]
    async fn test_selection_recorded() {
        let model = MockModel::new().with_selection(SelectedBest {
            id: 3,
            reason: "clearest call to action".into(),
        });
        let mut state = state_with_posts(3);

        select_best(&model, &mut state).await;

        let selected = state.best_selected.as_ref().unwrap();
        assert_eq!(selected.id, 3);
        assert_eq!(state.best_post().unwrap().title, "post 3");
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_first_post() {
        let model = MockModel::new().fail_selection();
        let mut state = state_with_posts(2);

        select_best(&model, &mut state).await;

        assert_eq!(state.best_selected, Some(SelectedBest::fallback()));
        assert_eq!(state.best_post().unwrap().title, "post 1");
    }

    #[tokio::test]
    async fn test_out_of_range_id_falls_back() {
        let model = MockModel::new().with_selection(SelectedBest {
            id: 7,
            reason: "hallucinated".into(),
        });
        let mut state = state_with_posts(2);

        select_best(&model, &mut state).await;

        assert_eq!(state.best_selected, Some(SelectedBest::fallback()));
    }

    #[tokio::test]
    async fn test_zero_id_falls_back() {
        let model = MockModel::new().with_selection(SelectedBest {
            id: 0,
            reason: "off by one".into(),
        });
        let mut state = state_with_posts(2);

        select_best(&model, &mut state).await;

        assert_eq!(state.best_selected, Some(SelectedBest::fallback()));
    }
}
