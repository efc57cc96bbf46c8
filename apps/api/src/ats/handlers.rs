//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::ats::heuristic::calculate_ats_score;
use crate::ats::report::AtsReport;
use crate::errors::AppError;
use crate::state::AppState;

/// Longest resume text accepted for scoring, in characters.
const MAX_RESUME_CHARS: usize = 50_000;

#[derive(Debug, Deserialize)]
pub struct AtsRequest {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

impl AtsRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.resume_text.trim().is_empty() {
            return Err(AppError::Validation("resume_text cannot be empty".to_string()));
        }
        if self.resume_text.chars().count() > MAX_RESUME_CHARS {
            return Err(AppError::Validation(format!(
                "resume_text exceeds {MAX_RESUME_CHARS} characters"
            )));
        }
        Ok(())
    }
}

/// POST /api/v1/ats/score
///
/// Deterministic heuristic score. Never calls the LLM.
pub async fn handle_ats_score(Json(request): Json<AtsRequest>) -> Result<Json<AtsReport>, AppError> {
    request.validate()?;
    Ok(Json(calculate_ats_score(
        &request.resume_text,
        request.job_description.as_deref(),
    )))
}

/// POST /api/v1/ats/analyze
///
/// Runs the configured analyzer (LLM with heuristic fallback by default).
pub async fn handle_ats_analyze(
    State(state): State<AppState>,
    Json(request): Json<AtsRequest>,
) -> Result<Json<AtsReport>, AppError> {
    request.validate()?;
    let report = state
        .ats_analyzer
        .analyze(&request.resume_text, request.job_description.as_deref())
        .await?;
    Ok(Json(report))
}
