//! Axum route handlers for the search API.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generators::{analyze_job_fit, CandidateSummary, ConnectionType};
use crate::search::platforms::{
    Platform, CITY_CHOICES, DEFAULT_EXPERIENCE_YEARS, DEFAULT_LOCATIONS, DEFAULT_PLATFORMS,
};
use crate::search::synthesizer::{synthesize_listings, JobListing, SearchCriteria};
use crate::session::{SearchOutcome, Session};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Search form fields. Every field is optional; omitted ones resolve against
/// the session, the way the original form pre-fills from the analyzed resume.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub job_title: Option<String>,
    pub locations: Option<Vec<String>>,
    pub experience_years: Option<u32>,
    pub skills: Option<Vec<String>>,
    pub platforms: Option<Vec<Platform>>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub criteria: SearchCriteria,
    pub listings: Vec<JobListing>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeListingRequest {
    pub listing_url: String,
}

/// Choices the search and networking forms offer.
#[derive(Debug, Serialize)]
pub struct SearchOptionsResponse {
    pub cities: Vec<&'static str>,
    pub platforms: Vec<&'static str>,
    pub connection_types: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeListingResponse {
    pub listing_url: String,
    pub analysis: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/search/options
///
/// Widget choices for the search and networking forms.
pub async fn handle_search_options() -> Json<SearchOptionsResponse> {
    Json(SearchOptionsResponse {
        cities: CITY_CHOICES.to_vec(),
        platforms: Platform::ALL.iter().map(Platform::name).collect(),
        connection_types: ConnectionType::ALL
            .iter()
            .map(ConnectionType::label)
            .collect(),
    })
}

/// POST /api/v1/search
///
/// Synthesizes listings for the resolved criteria, stores the outcome in the
/// session (replacing any previous search), and returns the ranked listings.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let session = state.snapshot().await;
    let criteria = resolve_criteria(request, &session)?;

    let listings = synthesize_listings(&criteria, Utc::now().date_naive());
    info!(
        "Search produced {} listings across {} platforms",
        listings.len(),
        criteria.platforms.len()
    );

    let outcome = SearchOutcome {
        criteria: criteria.clone(),
        listings: listings.clone(),
        searched_at: Utc::now(),
    };
    state
        .replace(Session {
            job_title: criteria.job_title.clone(),
            search: Some(outcome),
            ..session
        })
        .await;

    Ok(Json(SearchResponse {
        count: listings.len(),
        criteria,
        listings,
    }))
}

/// POST /api/v1/search/analyze
///
/// Runs the job-fit analysis for one stored listing, identified by URL, and
/// caches the result in the session's per-listing analysis map.
pub async fn handle_analyze_listing(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeListingRequest>,
) -> Result<Json<AnalyzeListingResponse>, AppError> {
    let session = state.snapshot().await;

    let Some(outcome) = session.search.clone() else {
        return Err(AppError::Validation(
            "Run a search before requesting an analysis".to_string(),
        ));
    };

    let listing = outcome
        .listings
        .iter()
        .find(|l| l.url == request.listing_url)
        .cloned()
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No listing with URL '{}' in the last search",
                request.listing_url
            ))
        })?;

    let candidate = CandidateSummary {
        experience_years: outcome.criteria.experience_years,
        skills: outcome.criteria.skills.clone(),
        resume_titles: session.profile.job_titles.clone(),
        resume_skills: session.profile.all_skills(),
    };

    let analysis = analyze_job_fit(&listing, &candidate, &state.llm).await?;

    let mut job_analyses = session.job_analyses.clone();
    job_analyses.insert(listing.url.clone(), analysis.clone());
    state
        .replace(Session {
            job_analyses,
            ..session
        })
        .await;

    Ok(Json(AnalyzeListingResponse {
        listing_url: listing.url,
        analysis,
    }))
}

/// Fills omitted form fields from the session and validates the result.
fn resolve_criteria(request: SearchRequest, session: &Session) -> Result<SearchCriteria, AppError> {
    let criteria = SearchCriteria {
        job_title: request.job_title.unwrap_or_else(|| session.job_title.clone()),
        locations: request.locations.unwrap_or_else(|| {
            DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()
        }),
        experience_years: request.experience_years.unwrap_or_else(|| {
            if session.profile.years_experience > 0.0 {
                session.profile.years_experience as u32
            } else {
                DEFAULT_EXPERIENCE_YEARS
            }
        }),
        skills: request.skills.unwrap_or_else(|| session.candidate_skills()),
        platforms: request.platforms.unwrap_or_else(|| DEFAULT_PLATFORMS.to_vec()),
    };

    if criteria.job_title.trim().is_empty() {
        return Err(AppError::Validation("job_title cannot be blank".to_string()));
    }
    if criteria.locations.is_empty() {
        return Err(AppError::Validation(
            "Select at least one location".to_string(),
        ));
    }
    if criteria.platforms.is_empty() {
        return Err(AppError::Validation(
            "Select at least one platform".to_string(),
        ));
    }

    Ok(criteria)
}
