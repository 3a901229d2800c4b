//! Generation pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Content acquisition (fetch + merge, failures absorbed)
//! - Insight generation (3 sequential calls, per-call fallback)
//! - Post drafting (one concurrent branch per insight, fail-fast join)
//! - Best-post selection (one call, default selection on failure)

pub mod acquire;
pub mod drafts;
pub mod generator;
pub mod insights;
pub mod prompts;
pub mod select;

pub use acquire::{acquire_content, ensure_url};
pub use drafts::draft_posts;
pub use generator::Generator;
pub use insights::generate_insights;
pub use prompts::{
    format_draft_prompt, format_insight_prompt, format_select_prompt, DRAFT_PROMPT,
    INSIGHT_PROMPT, SELECT_PROMPT,
};
pub use select::select_best;
