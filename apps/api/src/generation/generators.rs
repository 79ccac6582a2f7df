//! The content generators: stateless functions, each one prompt template
//! plus a single model completion. They share one error policy — a failed
//! call maps to `AppError::Llm`, the caller keeps its previous state, and
//! the user retries by re-invoking the action.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::*;
use crate::llm_client::prompts::{CAREER_COACH_SYSTEM, COMMA_LIST_SYSTEM};
use crate::llm_client::LlmClient;
use crate::search::synthesizer::JobListing;

/// Candidate facts forwarded to the job-fit analysis prompt.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub resume_titles: Vec<String>,
    pub resume_skills: Vec<String>,
}

/// Who an outreach message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    HiringManager,
    TeamMember,
    Recruiter,
    Alumni,
    IndustryPeer,
}

impl ConnectionType {
    pub const ALL: [ConnectionType; 5] = [
        ConnectionType::HiringManager,
        ConnectionType::TeamMember,
        ConnectionType::Recruiter,
        ConnectionType::Alumni,
        ConnectionType::IndustryPeer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConnectionType::HiringManager => "Hiring Manager",
            ConnectionType::TeamMember => "Team Member",
            ConnectionType::Recruiter => "Recruiter",
            ConnectionType::Alumni => "Alumni",
            ConnectionType::IndustryPeer => "Industry Peer",
        }
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Generators
// ────────────────────────────────────────────────────────────────────────────

/// Markdown fit report for one listing against the candidate.
pub async fn analyze_job_fit(
    listing: &JobListing,
    candidate: &CandidateSummary,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let listing_json = to_pretty_json(listing)?;
    let candidate_json = to_pretty_json(candidate)?;
    let prompt = JOB_FIT_PROMPT_TEMPLATE
        .replace("{listing_json}", &listing_json)
        .replace("{candidate_json}", &candidate_json);
    complete(llm, &prompt, "job-fit analysis").await
}

/// ATS-optimized markdown rendition of the resume.
pub async fn optimize_resume(
    resume_text: &str,
    job_description: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = OPTIMIZE_RESUME_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text);
    complete(llm, &prompt, "resume optimization").await
}

/// ATS keywords as a list. An empty or malformed reply yields an empty list,
/// never an error — the UI renders "no keywords" and the user retries.
pub async fn extract_ats_keywords(
    job_description: &str,
    llm: &LlmClient,
) -> Result<Vec<String>, AppError> {
    let prompt = ATS_KEYWORDS_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    let reply = llm
        .complete(&prompt, COMMA_LIST_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("ATS keyword extraction failed: {e}")))?;
    Ok(parse_keyword_reply(&reply))
}

/// Splits a comma-separated model reply into trimmed, non-empty keywords.
pub fn parse_keyword_reply(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(String::from)
        .collect()
}

/// Tailored cover letter.
pub async fn draft_cover_letter(
    resume_text: &str,
    job_description: &str,
    company_name: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{company_name}", company_name)
        .replace("{resume_text}", resume_text);
    complete(llm, &prompt, "cover letter").await
}

/// Ten likely interview questions, numbered, typed technical/behavioral.
pub async fn generate_interview_questions(
    job_description: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = INTERVIEW_QUESTIONS_PROMPT_TEMPLATE.replace("{job_description}", job_description);
    complete(llm, &prompt, "interview questions").await
}

/// Opening of a mock-interview dialogue seeded with the generated questions.
pub async fn conduct_mock_interview(
    questions: &str,
    resume_text: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = MOCK_INTERVIEW_PROMPT_TEMPLATE
        .replace("{questions}", questions)
        .replace("{resume_text}", resume_text);
    complete(llm, &prompt, "mock interview").await
}

/// Interview-prep research report on one company.
pub async fn research_company(company_name: &str, llm: &LlmClient) -> Result<String, AppError> {
    let prompt = COMPANY_RESEARCH_PROMPT_TEMPLATE.replace("{company_name}", company_name);
    complete(llm, &prompt, "company research").await
}

/// Suggested connection types and outreach approach for a company/role.
pub async fn suggest_connections(
    company_name: &str,
    job_title: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = CONNECTIONS_PROMPT_TEMPLATE
        .replace("{company_name}", company_name)
        .replace("{job_title}", job_title);
    complete(llm, &prompt, "connection suggestions").await
}

/// Personalized outreach message for one connection type.
pub async fn draft_outreach_message(
    connection_type: ConnectionType,
    company_name: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = OUTREACH_PROMPT_TEMPLATE
        .replace("{connection_type}", connection_type.label())
        .replace("{company_name}", company_name);
    complete(llm, &prompt, "outreach message").await
}

/// Market-intelligence report for an industry in a location.
pub async fn report_industry_trends(
    industry: &str,
    location: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = INDUSTRY_TRENDS_PROMPT_TEMPLATE
        .replace("{industry}", industry)
        .replace("{location}", location);
    complete(llm, &prompt, "industry trends").await
}

async fn complete(llm: &LlmClient, prompt: &str, what: &str) -> Result<String, AppError> {
    llm.complete(prompt, CAREER_COACH_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("{what} generation failed: {e}")))
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt input: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_reply_splits_and_trims() {
        let keywords = parse_keyword_reply("Python,  SQL , distributed systems,");
        assert_eq!(keywords, vec!["Python", "SQL", "distributed systems"]);
    }

    #[test]
    fn test_parse_keyword_reply_empty_reply_is_empty_list() {
        assert!(parse_keyword_reply("").is_empty());
        assert!(parse_keyword_reply("   ").is_empty());
        assert!(parse_keyword_reply(",,,").is_empty());
    }

    #[test]
    fn test_connection_type_labels() {
        assert_eq!(ConnectionType::HiringManager.label(), "Hiring Manager");
        assert_eq!(ConnectionType::IndustryPeer.to_string(), "Industry Peer");
    }

    #[test]
    fn test_connection_type_deserializes_snake_case() {
        let ct: ConnectionType = serde_json::from_str("\"hiring_manager\"").unwrap();
        assert_eq!(ct, ConnectionType::HiringManager);
    }

    #[test]
    fn test_outreach_prompt_substitution() {
        let prompt = OUTREACH_PROMPT_TEMPLATE
            .replace("{connection_type}", ConnectionType::Recruiter.label())
            .replace("{company_name}", "Acme Corp");
        assert!(prompt.contains("connecting with Recruiter at Acme Corp"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_trends_prompt_substitution() {
        let prompt = INDUSTRY_TRENDS_PROMPT_TEMPLATE
            .replace("{industry}", "Data")
            .replace("{location}", "Bangalore");
        assert!(prompt.contains("Data professionals in Bangalore"));
    }

    #[test]
    fn test_candidate_summary_serializes_for_prompt() {
        let candidate = CandidateSummary {
            experience_years: 3,
            skills: vec!["Python".to_string()],
            resume_titles: vec!["Engineer".to_string()],
            resume_skills: vec!["Python".to_string(), "SQL".to_string()],
        };
        let json = to_pretty_json(&candidate).unwrap();
        assert!(json.contains("\"experience_years\": 3"));
        assert!(json.contains("\"resume_titles\""));
    }
}
