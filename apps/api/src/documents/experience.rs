use std::sync::LazyLock;

use regex::Regex;

use crate::documents::models::ExperienceEntry;
use crate::documents::sections::{locate_section, Section};

/// A line opening with a capitalised word and a 4-digit year, e.g. `Jan 2020 - Present`.
/// Numeric dates such as `03/2020` are not recognised.
static DATE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+ \d{4}").expect("date line pattern is valid"));

static COMPANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^,\n]+").expect("company pattern is valid"));

static POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s([^,\n]+)").expect("position pattern is valid"));

static DATES: LazyLock<Regex> = LazyLock::new(|| {
    let month = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*";
    let year = r"(?:19|20)\d{2}";
    Regex::new(&format!(
        r"{month} {year}\s*(?:-|–|to)\s*(?:{month} {year}|Present)|Present"
    ))
    .expect("date range pattern is valid")
});

/// Extracts work experience entries.
///
/// A date line opens a new entry together with the header line right before it
/// (typically `Company, Position`).
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(section) = locate_section(text, Section::Experience) else {
        return Vec::new();
    };

    split_entries(section)
        .iter()
        .map(|entry| parse_entry(entry))
        .collect()
}

fn split_entries(section: &str) -> Vec<String> {
    let mut entries: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in section.trim().split('\n') {
        if DATE_LINE.is_match(line) && current.len() >= 2 {
            let header = current.pop();
            entries.push(std::mem::take(&mut current));
            current.extend(header);
        }
        current.push(line);
    }
    entries.push(current);

    entries
        .into_iter()
        .map(|lines| lines.join("\n").trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

fn parse_entry(entry: &str) -> ExperienceEntry {
    let company = COMPANY
        .find(entry)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let position = POSITION
        .captures(entry)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();
    let dates = DATES
        .find(entry)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let description = entry
        .split_once('\n')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default();

    ExperienceEntry {
        company,
        position,
        dates,
        description,
    }
}
