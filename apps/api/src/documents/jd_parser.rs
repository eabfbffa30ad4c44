//! JD Parser — extracts the role title, requirements, and responsibilities from a job description.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::documents::best_effort;
use crate::documents::extraction::{extract_text, JD_FORMATS};
use crate::documents::models::{NormalizedText, ParsedJobDescription, SourceDocument};
use crate::documents::sections::{locate_section, split_items, Section};
use crate::documents::ParseError;

const ITEM_SEPARATORS: &[char] = &['\n', '•'];
const MAX_TITLE_CHARS: usize = 80;

static ROLE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:job title|position|role)[ \t]*:[ \t]*(\S[^\n]*?)[ \t]*$")
        .expect("role pattern is valid")
});

/// Parses a job description (PDF, DOCX, or plain text).
pub fn parse_job_description(doc: &SourceDocument) -> Result<ParsedJobDescription, ParseError> {
    let text = extract_text(doc, JD_FORMATS)?;
    Ok(parse_job_description_text(&text))
}

/// Runs the job-description extractors over already-extracted text. Never fails.
pub fn parse_job_description_text(text: &NormalizedText) -> ParsedJobDescription {
    let text = text.as_str();
    let items = |section: Section| {
        locate_section(text, section)
            .map(|span| split_items(span, ITEM_SEPARATORS))
            .unwrap_or_default()
    };

    let parsed = ParsedJobDescription {
        role: best_effort("role", || extract_role(text)),
        requirements: best_effort("requirements", || items(Section::Requirements)),
        responsibilities: best_effort("responsibilities", || items(Section::Responsibilities)),
    };

    debug!(
        "Parsed JD '{}': {} requirements, {} responsibilities",
        parsed.role,
        parsed.requirements.len(),
        parsed.responsibilities.len()
    );

    parsed
}

/// An explicit `Job Title:` / `Position:` / `Role:` line, else a short title-like first line.
fn extract_role(text: &str) -> String {
    if let Some(role) = ROLE_LINE.captures(text).and_then(|caps| caps.get(1)) {
        return role.as_str().to_string();
    }

    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .filter(|line| looks_like_title(line))
        .map(String::from)
        .unwrap_or_default()
}

fn looks_like_title(line: &str) -> bool {
    line.chars().count() <= MAX_TITLE_CHARS && !line.contains(['.', '!', '?', ':'])
}
