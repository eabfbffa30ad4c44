// Document parsing: résumé and job-description files to structured facts.
// Pipeline: raw bytes -> NormalizedText -> section spans -> typed fields -> aggregated record.
// Everything here is synchronous and pure apart from reading the input bytes.

pub mod additional;
pub mod contact;
pub mod cv_parser;
pub mod docx;
pub mod education;
pub mod experience;
pub mod extraction;
pub mod handlers;
pub mod jd_parser;
pub mod models;
pub mod sections;
pub mod skills;

use thiserror::Error;

use crate::documents::models::DocumentFormat;

/// Fatal document parsing errors. Per-field misses are never errors.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("No text could be extracted from the file")]
    EmptyDocument,

    #[error("Failed to extract text from {format} document: {source}")]
    ExtractionFailure {
        format: DocumentFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn extraction(
        format: DocumentFormat,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ParseError::ExtractionFailure {
            format,
            source: source.into(),
        }
    }
}

/// Runs one best-effort field extractor. A panic inside the heuristic is logged and
/// replaced with the field's empty default so the remaining fields still get parsed.
pub(crate) fn best_effort<T, F>(field: &'static str, extract: F) -> T
where
    T: Default,
    F: FnOnce() -> T,
{
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(extract)) {
        Ok(value) => value,
        Err(payload) => {
            tracing::warn!(
                "Extractor '{field}' failed ({}); using empty default",
                panic_message(payload.as_ref())
            );
            T::default()
        }
    }
}

/// Message carried by a caught panic, if it was a string.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
