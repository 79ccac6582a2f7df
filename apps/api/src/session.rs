//! Interaction state for the single active session.
//!
//! `Session` is a flat value: handlers take a snapshot, build a NEW value
//! with struct-update syntax, and swap it in via `AppState::replace`. Fields
//! are never mutated in place, so every state transition is explicit in the
//! handler that performs it.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::ResumeProfile;
use crate::search::synthesizer::{JobListing, SearchCriteria};
use crate::state::AppState;

pub const DEFAULT_JOB_TITLE: &str = "Software Engineer";

/// Skills offered when no resume has been analyzed yet.
pub const FALLBACK_SKILLS: &[&str] = &["Python", "Java", "SQL", "Machine Learning"];

/// Outcome of the most recent listing search. The resolved criteria are kept
/// so follow-up actions (job-fit analysis, market trends) reuse what the
/// user actually searched with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub criteria: SearchCriteria,
    pub listings: Vec<JobListing>,
    pub searched_at: DateTime<Utc>,
}

/// All interaction state for one session. Initialized with defaults at
/// startup, replaced wholesale by handlers, gone when the process exits.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,

    // Resume upload
    pub resume_file_name: Option<String>,
    pub resume_text: String,
    pub profile: ResumeProfile,

    // Free-text inputs
    pub job_title: String,
    pub job_description: String,
    pub target_company: String,
    pub custom_skills: Vec<String>,

    // Search
    pub search: Option<SearchOutcome>,
    /// Job-fit analyses keyed by listing URL.
    pub job_analyses: BTreeMap<String, String>,

    // Generated artifacts
    pub ats_keywords: Vec<String>,
    pub optimized_resume: Option<String>,
    pub cover_letter: Option<String>,
    pub interview_questions: Option<String>,
    pub mock_interview: Option<String>,
    pub company_research: Option<String>,
    pub connection_suggestions: Option<String>,
    pub outreach_message: Option<String>,
    pub industry_trends: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            resume_file_name: None,
            resume_text: String::new(),
            profile: ResumeProfile::default(),
            job_title: DEFAULT_JOB_TITLE.to_string(),
            job_description: String::new(),
            target_company: String::new(),
            custom_skills: Vec::new(),
            search: None,
            job_analyses: BTreeMap::new(),
            ats_keywords: Vec::new(),
            optimized_resume: None,
            cover_letter: None,
            interview_questions: None,
            mock_interview: None,
            company_research: None,
            connection_suggestions: None,
            outreach_message: None,
            industry_trends: None,
        }
    }

    pub fn has_resume(&self) -> bool {
        !self.resume_text.trim().is_empty()
    }

    /// Skills offered to the search form: profile skills when a resume has
    /// been analyzed, the fallback set otherwise, plus any custom skills.
    pub fn candidate_skills(&self) -> Vec<String> {
        let mut skills = self.profile.all_skills();
        if skills.is_empty() {
            skills = FALLBACK_SKILLS.iter().map(|s| s.to_string()).collect();
        }
        for custom in &self.custom_skills {
            if !skills.contains(custom) {
                skills.push(custom.clone());
            }
        }
        skills
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSessionRequest {
    pub job_title: Option<String>,
    pub job_description: Option<String>,
    pub target_company: Option<String>,
    pub custom_skills: Option<Vec<String>>,
}

/// GET /api/v1/session
///
/// Renders the current session, artifacts included.
pub async fn handle_get_session(State(state): State<AppState>) -> Json<Session> {
    Json(state.snapshot().await)
}

/// PATCH /api/v1/session
///
/// Updates the free-text inputs. Omitted fields keep their current value.
pub async fn handle_update_session(
    State(state): State<AppState>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<Session>, AppError> {
    let session = state.snapshot().await;

    let next = Session {
        job_title: request.job_title.unwrap_or(session.job_title.clone()),
        job_description: request
            .job_description
            .unwrap_or(session.job_description.clone()),
        target_company: request
            .target_company
            .unwrap_or(session.target_company.clone()),
        custom_skills: dedup_preserving_order(
            request.custom_skills.unwrap_or(session.custom_skills.clone()),
        ),
        ..session
    };

    if next.job_title.trim().is_empty() {
        return Err(AppError::Validation(
            "job_title cannot be blank".to_string(),
        ));
    }

    state.replace(next.clone()).await;
    Ok(Json(next))
}

fn dedup_preserving_order(skills: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(skills.len());
    for skill in skills {
        if !seen.contains(&skill) {
            seen.push(skill);
        }
    }
    seen
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_defaults() {
        let session = Session::new();
        assert_eq!(session.job_title, "Software Engineer");
        assert!(!session.has_resume());
        assert!(session.profile.is_empty());
        assert!(session.search.is_none());
        assert!(session.optimized_resume.is_none());
        assert!(session.ats_keywords.is_empty());
    }

    #[test]
    fn test_candidate_skills_fall_back_when_no_resume() {
        let session = Session::new();
        assert_eq!(
            session.candidate_skills(),
            vec!["Python", "Java", "SQL", "Machine Learning"]
        );
    }

    #[test]
    fn test_candidate_skills_include_customs_once() {
        let session = Session {
            custom_skills: vec!["Kubernetes".to_string(), "Python".to_string()],
            ..Session::new()
        };
        let skills = session.candidate_skills();
        assert!(skills.contains(&"Kubernetes".to_string()));
        assert_eq!(
            skills.iter().filter(|s| s.as_str() == "Python").count(),
            1,
            "custom skill already in the base set must not duplicate"
        );
    }

    #[test]
    fn test_candidate_skills_prefer_profile_over_fallback() {
        let mut profile = ResumeProfile::default();
        profile.technical_skills.insert("Rust".to_string());
        let session = Session {
            profile,
            ..Session::new()
        };
        let skills = session.candidate_skills();
        assert!(skills.contains(&"Rust".to_string()));
        assert!(!skills.contains(&"Machine Learning".to_string()));
    }

    #[test]
    fn test_struct_update_replaces_profile_wholesale() {
        let mut first = ResumeProfile::default();
        first.technical_skills.insert("Rust".to_string());
        first.years_experience = 4.0;

        let mut second = ResumeProfile::default();
        second.soft_skills.insert("Communication".to_string());

        let session = Session {
            profile: first,
            ..Session::new()
        };
        let session = Session {
            profile: second.clone(),
            ..session
        };

        assert_eq!(session.profile, second);
        assert!(session.profile.technical_skills.is_empty());
        assert_eq!(session.profile.years_experience, 0.0);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let deduped = dedup_preserving_order(vec![
            "Rust".to_string(),
            "Go".to_string(),
            "Rust".to_string(),
        ]);
        assert_eq!(deduped, vec!["Rust".to_string(), "Go".to_string()]);
    }
}
