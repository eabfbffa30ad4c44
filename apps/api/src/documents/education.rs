use std::sync::LazyLock;

use regex::Regex;

use crate::documents::models::EducationEntry;
use crate::documents::sections::{locate_section, Section};

/// Degree vocabulary, anchored on a word boundary, captured to the end of the line.
static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:B\.S\.?|BS\b|M\.S\.?|MS\b|Ph\.?D\.?|Bachelor'?s?\b|Master'?s?\b|Doctorate\b|MBA\b|BE\b|ME\b|MTech\b|BTech\b)[^\n]*",
    )
    .expect("degree pattern is valid")
});

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:19|20)\d{2}(?:\s*-\s*(?:19|20)\d{2})?").expect("year pattern is valid")
});

/// A year on the final line of an entry, plus everything after it on that line.
static TRAILING_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}[^\n]*$").expect("year pattern is valid"));

/// Extracts education entries. Each line starting with an upper-case letter begins a new entry.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let Some(section) = locate_section(text, Section::Education) else {
        return Vec::new();
    };

    split_entries(section)
        .iter()
        .map(|entry| parse_entry(entry))
        .collect()
}

fn split_entries(section: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, line) in section.split('\n').enumerate() {
        if i > 0 && line.starts_with(|c: char| c.is_ascii_uppercase()) {
            entries.push(std::mem::take(&mut current));
        } else if i > 0 {
            current.push('\n');
        }
        current.push_str(line);
    }
    entries.push(current);

    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

fn parse_entry(entry: &str) -> EducationEntry {
    let degree = DEGREE
        .find(entry)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let year = YEAR
        .find(entry)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let institution = TRAILING_YEAR.replace(entry, "").trim().to_string();

    EducationEntry {
        degree,
        institution,
        year,
    }
}
