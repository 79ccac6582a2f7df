//! Profile extraction — resume text to a structured `ResumeProfile` via the model.

use tracing::warn;

use crate::llm_client::{strip_code_fences, LlmClient};
use crate::resume::prompts::{PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM};
use crate::resume::ResumeProfile;

/// Character budget for resume text submitted to the model.
pub const RESUME_TEXT_BUDGET: usize = 10_000;

/// Extracts a structured profile from resume text.
///
/// Fallback policy: on any transport error or malformed reply this returns
/// the zeroed default profile instead of failing. The caller must always
/// have a well-formed profile to render, even an empty one.
pub async fn extract_profile(resume_text: &str, llm: &LlmClient) -> ResumeProfile {
    let prompt =
        PROFILE_PROMPT_TEMPLATE.replace("{resume_text}", truncate_chars(resume_text, RESUME_TEXT_BUDGET));

    match llm.complete(&prompt, PROFILE_SYSTEM).await {
        Ok(reply) => parse_profile_reply(&reply),
        Err(e) => {
            warn!("Profile extraction call failed, using empty profile: {e}");
            ResumeProfile::default()
        }
    }
}

/// Strict JSON parse of the model reply; any mismatch degrades to the
/// default profile with a logged warning.
pub fn parse_profile_reply(reply: &str) -> ResumeProfile {
    match serde_json::from_str(strip_code_fences(reply)) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Model reply was not valid profile JSON, using empty profile: {e}");
            ResumeProfile::default()
        }
    }
}

/// Truncates to at most `max_chars` characters, respecting char boundaries.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
