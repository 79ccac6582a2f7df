//! Axum route handlers for the artifact-generation API.
//!
//! Every handler follows the same dispatch shape: check preconditions
//! (before any model call), run one generator, store the artifact in a new
//! session value, render the result. A generation failure leaves the
//! previous artifact in place so the client can simply re-invoke.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generators;
use crate::generation::generators::ConnectionType;
use crate::session::Session;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A generated artifact slot, addressable for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    OptimizedResume,
    CoverLetter,
    InterviewQuestions,
    MockInterview,
    CompanyResearch,
    ConnectionSuggestions,
    OutreachMessage,
    IndustryTrends,
}

impl ArtifactKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::OptimizedResume => "optimized_resume.md",
            ArtifactKind::CoverLetter => "cover_letter.md",
            ArtifactKind::InterviewQuestions => "interview_questions.md",
            ArtifactKind::MockInterview => "mock_interview.md",
            ArtifactKind::CompanyResearch => "company_research.md",
            ArtifactKind::ConnectionSuggestions => "connection_suggestions.md",
            ArtifactKind::OutreachMessage => "outreach_message.md",
            ArtifactKind::IndustryTrends => "industry_trends.md",
        }
    }

    fn slot(self, session: &Session) -> Option<&String> {
        match self {
            ArtifactKind::OptimizedResume => session.optimized_resume.as_ref(),
            ArtifactKind::CoverLetter => session.cover_letter.as_ref(),
            ArtifactKind::InterviewQuestions => session.interview_questions.as_ref(),
            ArtifactKind::MockInterview => session.mock_interview.as_ref(),
            ArtifactKind::CompanyResearch => session.company_research.as_ref(),
            ArtifactKind::ConnectionSuggestions => session.connection_suggestions.as_ref(),
            ArtifactKind::OutreachMessage => session.outreach_message.as_ref(),
            ArtifactKind::IndustryTrends => session.industry_trends.as_ref(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArtifactResponse {
    pub kind: ArtifactKind,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutreachRequest {
    pub connection_type: ConnectionType,
}

#[derive(Debug, Default, Deserialize)]
pub struct TrendsRequest {
    pub location: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Resume tools
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/optimize
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    require_job_description(&session)?;

    let content =
        generators::optimize_resume(&session.resume_text, &session.job_description, &state.llm)
            .await?;

    state
        .replace(Session {
            optimized_resume: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::OptimizedResume,
        content,
    }))
}

/// POST /api/v1/resume/keywords
pub async fn handle_ats_keywords(
    State(state): State<AppState>,
) -> Result<Json<KeywordsResponse>, AppError> {
    let session = state.snapshot().await;
    require_job_description(&session)?;

    let keywords = generators::extract_ats_keywords(&session.job_description, &state.llm).await?;

    state
        .replace(Session {
            ats_keywords: keywords.clone(),
            ..session
        })
        .await;

    Ok(Json(KeywordsResponse { keywords }))
}

/// POST /api/v1/resume/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    require_target_company(&session)?;

    let content = generators::draft_cover_letter(
        &session.resume_text,
        &session.job_description,
        &session.target_company,
        &state.llm,
    )
    .await?;

    state
        .replace(Session {
            cover_letter: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::CoverLetter,
        content,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Interview prep
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    require_job_description(&session)?;

    let content =
        generators::generate_interview_questions(&session.job_description, &state.llm).await?;

    state
        .replace(Session {
            interview_questions: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::InterviewQuestions,
        content,
    }))
}

/// POST /api/v1/interview/mock
pub async fn handle_mock_interview(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    let Some(questions) = session.interview_questions.clone() else {
        return Err(AppError::Validation(
            "Generate interview questions before starting a mock interview".to_string(),
        ));
    };

    let content =
        generators::conduct_mock_interview(&questions, &session.resume_text, &state.llm).await?;

    state
        .replace(Session {
            mock_interview: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::MockInterview,
        content,
    }))
}

/// POST /api/v1/company/research
pub async fn handle_company_research(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_target_company(&session)?;

    let content = generators::research_company(&session.target_company, &state.llm).await?;

    state
        .replace(Session {
            company_research: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::CompanyResearch,
        content,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Networking
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/network/connections
pub async fn handle_connection_suggestions(
    State(state): State<AppState>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    require_target_company(&session)?;

    let content =
        generators::suggest_connections(&session.target_company, &session.job_title, &state.llm)
            .await?;

    state
        .replace(Session {
            connection_suggestions: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::ConnectionSuggestions,
        content,
    }))
}

/// POST /api/v1/network/outreach
pub async fn handle_outreach_message(
    State(state): State<AppState>,
    Json(request): Json<OutreachRequest>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;
    require_resume(&session)?;
    require_target_company(&session)?;

    let content = generators::draft_outreach_message(
        request.connection_type,
        &session.target_company,
        &state.llm,
    )
    .await?;

    state
        .replace(Session {
            outreach_message: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::OutreachMessage,
        content,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Market intelligence
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/market/trends
///
/// Industry is the first word of the session job title; location comes from
/// the request, falling back to the last search and then to "Remote".
pub async fn handle_industry_trends(
    State(state): State<AppState>,
    Json(request): Json<TrendsRequest>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let session = state.snapshot().await;

    let industry = session
        .job_title
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Set a job title first".to_string()))?;

    let location = request
        .location
        .or_else(|| {
            session
                .search
                .as_ref()
                .and_then(|outcome| outcome.criteria.locations.first().cloned())
        })
        .unwrap_or_else(|| "Remote".to_string());

    let content = generators::report_industry_trends(&industry, &location, &state.llm).await?;

    state
        .replace(Session {
            industry_trends: Some(content.clone()),
            ..session
        })
        .await;

    Ok(Json(ArtifactResponse {
        kind: ArtifactKind::IndustryTrends,
        content,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Artifact download
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/artifacts/:kind
///
/// Serves a generated artifact as a markdown attachment.
pub async fn handle_download_artifact(
    State(state): State<AppState>,
    Path(kind): Path<ArtifactKind>,
) -> Result<impl IntoResponse, AppError> {
    let session = state.snapshot().await;

    let content = kind.slot(&session).cloned().ok_or_else(|| {
        AppError::NotFound(format!(
            "Artifact '{}' has not been generated yet",
            kind.file_name()
        ))
    })?;

    let headers = [
        (
            header::CONTENT_TYPE,
            "text/markdown; charset=utf-8".to_string(),
        ),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", kind.file_name()),
        ),
    ];

    Ok((headers, content))
}

// ────────────────────────────────────────────────────────────────────────────
// Precondition checks
// ────────────────────────────────────────────────────────────────────────────

fn require_resume(session: &Session) -> Result<(), AppError> {
    if session.has_resume() {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Upload your resume before using this tool".to_string(),
        ))
    }
}

fn require_job_description(session: &Session) -> Result<(), AppError> {
    if session.job_description.trim().is_empty() {
        Err(AppError::Validation(
            "Enter a job description in the session first".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn require_target_company(session: &Session) -> Result<(), AppError> {
    if session.target_company.trim().is_empty() {
        Err(AppError::Validation(
            "Enter a target company in the session first".to_string(),
        ))
    } else {
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_kind_kebab_case_serde() {
        let kind: ArtifactKind = serde_json::from_str("\"optimized-resume\"").unwrap();
        assert_eq!(kind, ArtifactKind::OptimizedResume);
        assert_eq!(
            serde_json::to_string(&ArtifactKind::CoverLetter).unwrap(),
            "\"cover-letter\""
        );
    }

    #[test]
    fn test_artifact_slot_lookup() {
        let session = Session {
            cover_letter: Some("Dear team".to_string()),
            ..Session::new()
        };
        assert_eq!(
            ArtifactKind::CoverLetter.slot(&session),
            Some(&"Dear team".to_string())
        );
        assert!(ArtifactKind::MockInterview.slot(&session).is_none());
    }

    #[test]
    fn test_preconditions_reject_empty_session() {
        let session = Session::new();
        assert!(require_resume(&session).is_err());
        assert!(require_job_description(&session).is_err());
        assert!(require_target_company(&session).is_err());
    }

    #[test]
    fn test_preconditions_accept_filled_session() {
        let session = Session {
            resume_text: "Experienced engineer".to_string(),
            job_description: "We need a Rust engineer".to_string(),
            target_company: "Acme".to_string(),
            ..Session::new()
        };
        assert!(require_resume(&session).is_ok());
        assert!(require_job_description(&session).is_ok());
        assert!(require_target_company(&session).is_ok());
    }
}
