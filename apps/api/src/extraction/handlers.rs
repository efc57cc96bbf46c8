//! Axum route handler for resume uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, ExtractedDocument};

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// POST /api/v1/resumes/extract
///
/// Accepts a multipart upload with a `file` field and returns its text.
/// PDF parsing is CPU-bound, so extraction runs on the blocking pool.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractedDocument>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.txt").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(multipart_error)?;
        info!("Extracting text from upload '{}' ({} bytes)", file_name, bytes.len());

        let document = tokio::task::spawn_blocking(move || extract_text(&file_name, &bytes))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::UnprocessableEntity("the file could not be parsed".to_string())
                } else {
                    AppError::Internal(anyhow::anyhow!("extraction task failed: {e}"))
                }
            })??;
        return Ok(Json(document));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

/// Uploads over the body limit surface here as 413; anything else is a malformed request.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("the uploaded file exceeds the size limit".to_string())
    } else {
        AppError::Validation(format!("invalid multipart body: {}", err.body_text()))
    }
}
