//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::resume::generator::{enhance_section, generate_resume, EnhanceRequest, EnhanceResponse};
use crate::resume::models::{GeneratedResume, ResumeForm};
use crate::state::AppState;

/// POST /api/v1/resumes/generate
///
/// Validates the builder form and returns LLM-written resume text with a
/// heuristic ATS preview.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<Json<GeneratedResume>, AppError> {
    let generated = generate_resume(&state.llm, &form).await?;
    Ok(Json(generated))
}

/// POST /api/v1/resumes/enhance
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    Ok(Json(enhance_section(&state.llm, &request).await?))
}
