//! Text extraction layer — turns a `SourceDocument` into `NormalizedText`.

use std::panic;

use tracing::debug;

use crate::documents::docx;
use crate::documents::models::{DocumentFormat, NormalizedText, SourceDocument};
use crate::documents::{panic_message, ParseError};

/// Formats accepted for résumés.
pub const CV_FORMATS: &[DocumentFormat] = &[DocumentFormat::Pdf, DocumentFormat::Docx];

/// Formats accepted for job descriptions.
pub const JD_FORMATS: &[DocumentFormat] = &[
    DocumentFormat::Pdf,
    DocumentFormat::Docx,
    DocumentFormat::Plaintext,
];

/// Extracts text from `doc`. Fails fast with `UnsupportedFormat` when the format is not in
/// `accepted`, before any decoding is attempted.
pub fn extract_text(
    doc: &SourceDocument,
    accepted: &[DocumentFormat],
) -> Result<NormalizedText, ParseError> {
    if !accepted.contains(&doc.format) {
        return Err(ParseError::UnsupportedFormat(doc.format.to_string()));
    }

    let text = match doc.format {
        DocumentFormat::Pdf => extract_pdf_text(&doc.bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(&doc.bytes)?,
        DocumentFormat::Plaintext => String::from_utf8(doc.bytes.to_vec())
            .map_err(|e| ParseError::extraction(DocumentFormat::Plaintext, e))?
            .replace("\r\n", "\n"),
    };

    debug!(
        "Extracted {} chars from {} document",
        text.chars().count(),
        doc.format
    );

    NormalizedText::new(text)
}

/// pdf-extract panics on some malformed font resources; those surface as
/// `ExtractionFailure` like any other decoder error.
fn extract_pdf_text(bytes: &[u8]) -> Result<String, ParseError> {
    match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(result) => result.map_err(|e| ParseError::extraction(DocumentFormat::Pdf, e)),
        Err(payload) => Err(ParseError::extraction(
            DocumentFormat::Pdf,
            format!("pdf decoder panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}
