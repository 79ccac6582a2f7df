//! Axum route handlers for resume upload.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::resume::extract::extract_pdf_text;
use crate::resume::profile::extract_profile;
use crate::resume::ResumeProfile;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResumeResponse {
    pub file_name: Option<String>,
    pub extracted_chars: usize,
    pub profile: ResumeProfile,
}

/// POST /api/v1/resume
///
/// Multipart PDF upload. Extracts the text, asks the model for a structured
/// profile, and replaces the session's resume state wholesale. A document
/// with no extractable text is rejected before any model call; a profile
/// extraction failure still succeeds with the empty profile.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let (file_name, data) = read_file_field(&mut multipart).await?;

    let resume_text = extract_pdf_text(&data)?;
    if resume_text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "The PDF contains no extractable text".to_string(),
        ));
    }

    info!(
        "Resume uploaded: {} ({} chars extracted)",
        file_name.as_deref().unwrap_or("<unnamed>"),
        resume_text.len()
    );

    let profile = extract_profile(&resume_text, &state.llm).await;

    let session = state.snapshot().await;
    state
        .replace(Session {
            resume_file_name: file_name.clone(),
            resume_text: resume_text.clone(),
            profile: profile.clone(),
            ..session
        })
        .await;

    Ok(Json(UploadResumeResponse {
        file_name,
        extracted_chars: resume_text.len(),
        profile,
    }))
}

/// Pulls the `file` field out of the multipart body.
async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<(Option<String>, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().map(str::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            return Ok((file_name, data));
        }
    }

    Err(AppError::Validation(
        "Upload must contain a 'file' field".to_string(),
    ))
}
