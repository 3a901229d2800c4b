//! LLM prompts for the generation pipeline.
//!
//! Insight distinctness is enforced by prompting only: each insight call
//! carries an "insight {index} of {total}, different from the others"
//! instruction, and the model receives no other memory of prior insights.

use crate::types::{ContentInsight, GeneratedPost};

/// Prompt for generating one content insight.
pub const INSIGHT_PROMPT: &str = r#"You are a creative content strategist. Generate one unique content insight for creating a LinkedIn post, based on:

Content Source:
{content}

Target Audience: {target_audience}
Value Proposition: {value_proposition}

Format your response as a single insight with:
1. A creative TITLE (max 10 words)
2. A DESCRIPTION (1-2 sentences explaining the insight)
3. AUDIENCE RELEVANCE (1-2 sentences explaining how this insight specifically connects with the target audience)
4. VALUE ALIGNMENT (1-2 sentences explaining how this insight aligns with the value proposition)

This should be insight #{index} of {total}. Make sure it comes from a unique angle, different from the other insights, and do not repeat any previous insight."#;

/// Prompt for drafting one LinkedIn post from an insight.
pub const DRAFT_PROMPT: &str = r#"Generate a compelling LinkedIn post based on the following insight:

Insight Title: {insight_title}
Insight Description: {insight_description}
Audience Relevance: {audience_relevance}
Value Alignment: {value_alignment}

Post Generation Guidelines:
- Tone: {tone}
- Target Audience: {target_audience}
- Value Proposition: {value_proposition}
- Brand Persona: {brand_persona}

Craft a LinkedIn post with:
1. An attention-grabbing TITLE
2. A strong HOOK that immediately engages the reader
3. A substantive BODY that provides real value
4. A clear CALL TO ACTION
5. Relevant HASHTAGS to increase post visibility"#;

/// Prompt for choosing the best drafted post.
pub const SELECT_PROMPT: &str = r#"You are an experienced LinkedIn content editor. Below are {post_count} drafted posts, numbered from 1.

{posts}

Pick the single best post, judged by:
1. Engagement potential
2. Audience alignment
3. Clarity
4. Uniqueness

Respond with the 1-based number of the winning post and a short justification for the choice."#;

/// Format the insight prompt for insight `index` (1-based) of `total`.
pub fn format_insight_prompt(
    content: &str,
    target_audience: &str,
    value_proposition: &str,
    index: usize,
    total: usize,
) -> String {
    INSIGHT_PROMPT
        .replace("{content}", content)
        .replace("{target_audience}", target_audience)
        .replace("{value_proposition}", value_proposition)
        .replace("{index}", &index.to_string())
        .replace("{total}", &total.to_string())
}

/// Format the drafting prompt for one insight.
pub fn format_draft_prompt(
    insight: &ContentInsight,
    tone: &str,
    target_audience: &str,
    value_proposition: &str,
    brand_persona: &str,
) -> String {
    DRAFT_PROMPT
        .replace("{insight_title}", &insight.title)
        .replace("{insight_description}", &insight.description)
        .replace("{audience_relevance}", &insight.audience_relevance)
        .replace("{value_alignment}", &insight.value_alignment)
        .replace("{tone}", tone)
        .replace("{target_audience}", target_audience)
        .replace("{value_proposition}", value_proposition)
        .replace("{brand_persona}", brand_persona)
}

/// Format the selection prompt over the numbered post list.
pub fn format_select_prompt(posts: &[GeneratedPost]) -> String {
    let posts_text = posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            format!(
                "=== POST {} ===\nTitle: {}\nHook: {}\nBody: {}\nCall to Action: {}\nHashtags: {}",
                i + 1,
                post.title,
                post.hook,
                post.body,
                post.call_to_action,
                post.hashtags
                    .as_deref()
                    .map(|tags| tags.join(" "))
                    .unwrap_or_else(|| "(none)".to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    SELECT_PROMPT
        .replace("{post_count}", &posts.len().to_string())
        .replace("{posts}", &posts_text)
}
