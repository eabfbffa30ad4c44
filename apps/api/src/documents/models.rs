use std::fmt;
use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::documents::ParseError;

/// Declared format of an uploaded document, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Plaintext,
}

impl DocumentFormat {
    /// Maps a file extension (with or without the leading dot) to a format.
    pub fn from_extension(ext: &str) -> Result<Self, ParseError> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "text" => Ok(DocumentFormat::Plaintext),
            _ => Err(ParseError::UnsupportedFormat(format!(".{ext}"))),
        }
    }

    /// Derives the format from a file name such as `resume.PDF`.
    pub fn from_file_name(name: &str) -> Result<Self, ParseError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Plaintext => "plaintext",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw document bytes plus their declared format. Consumed once per parse.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub format: DocumentFormat,
    pub bytes: Bytes,
}

impl SourceDocument {
    pub fn new(format: DocumentFormat, bytes: impl Into<Bytes>) -> Self {
        Self {
            format,
            bytes: bytes.into(),
        }
    }

    /// Reads a document from disk. The extension is checked before the file is touched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let format = DocumentFormat::from_extension(ext)?;
        let bytes = std::fs::read(path)?;
        Ok(Self::new(format, bytes))
    }
}

/// Text extracted from a `SourceDocument`. Never empty or all-whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wraps extracted text, rejecting blank output with `EmptyDocument`.
    pub fn new(text: String) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Text following a section heading, up to the next blank line or end of document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan<'a> {
    pub section: &'static str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub dates: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
}

/// Structured facts extracted from a résumé. Every field is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedDocument {
    /// Distinct, alphabetically sorted.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub contact: ContactInfo,
    pub additional: AdditionalInfo,
}

/// Structured facts extracted from a job description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedJobDescription {
    pub role: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
}
