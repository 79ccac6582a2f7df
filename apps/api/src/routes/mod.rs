pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::resume::handlers as resume;
use crate::search::handlers as search;
use crate::session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route(
            "/api/v1/session",
            get(session::handle_get_session).patch(session::handle_update_session),
        )
        // Resume upload + tools
        .route("/api/v1/resume", post(resume::handle_upload_resume))
        .route("/api/v1/resume/optimize", post(generation::handle_optimize_resume))
        .route("/api/v1/resume/keywords", post(generation::handle_ats_keywords))
        .route("/api/v1/resume/cover-letter", post(generation::handle_cover_letter))
        // Job search
        .route("/api/v1/search", post(search::handle_search))
        .route("/api/v1/search/options", get(search::handle_search_options))
        .route("/api/v1/search/analyze", post(search::handle_analyze_listing))
        // Interview prep
        .route(
            "/api/v1/interview/questions",
            post(generation::handle_interview_questions),
        )
        .route("/api/v1/interview/mock", post(generation::handle_mock_interview))
        .route("/api/v1/company/research", post(generation::handle_company_research))
        // Networking
        .route(
            "/api/v1/network/connections",
            post(generation::handle_connection_suggestions),
        )
        .route("/api/v1/network/outreach", post(generation::handle_outreach_message))
        // Market intelligence
        .route("/api/v1/market/trends", post(generation::handle_industry_trends))
        // Artifact download
        .route(
            "/api/v1/artifacts/:kind",
            get(generation::handle_download_artifact),
        )
        .with_state(state)
}
