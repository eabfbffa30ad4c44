//! Axum route handlers for document parsing.
//!
//! Both endpoints take a `multipart/form-data` upload with a single `file` field.
//! The format comes from the uploaded file name; parsing runs on the blocking pool.

use axum::{extract::Multipart, Json};
use tracing::info;

use crate::documents::cv_parser::parse_cv;
use crate::documents::jd_parser::parse_job_description;
use crate::documents::models::{
    DocumentFormat, ParsedDocument, ParsedJobDescription, SourceDocument,
};
use crate::documents::ParseError;
use crate::errors::AppError;

const FILE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/cv
pub async fn handle_parse_cv(multipart: Multipart) -> Result<Json<ParsedDocument>, AppError> {
    let doc = read_upload(multipart).await?;
    info!("Parsing CV upload ({}, {} bytes)", doc.format, doc.bytes.len());

    let parsed = run_blocking(move || parse_cv(&doc)).await?;
    Ok(Json(parsed))
}

/// POST /api/v1/documents/jd
pub async fn handle_parse_jd(
    multipart: Multipart,
) -> Result<Json<ParsedJobDescription>, AppError> {
    let doc = read_upload(multipart).await?;
    info!("Parsing JD upload ({}, {} bytes)", doc.format, doc.bytes.len());

    let parsed = run_blocking(move || parse_job_description(&doc)).await?;
    Ok(Json(parsed))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// Reads the `file` field. The format is checked before the body is buffered.
async fn read_upload(mut multipart: Multipart) -> Result<SourceDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let format = DocumentFormat::from_file_name(&file_name)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {}", e.body_text())))?;

        return Ok(SourceDocument::new(format, bytes));
    }

    Err(AppError::Validation(format!(
        "multipart field '{FILE_FIELD}' is required"
    )))
}

async fn run_blocking<T, F>(parse: F) -> Result<T, AppError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ParseError> + Send + 'static,
{
    let parsed = tokio::task::spawn_blocking(parse)
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    Ok(parsed)
}
