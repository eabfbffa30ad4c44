use std::collections::BTreeSet;

use crate::documents::sections::{section_spans, split_items, Section};

const SKILL_SEPARATORS: &[char] = &[',', '•', '|', '/', '\n'];

/// Extracts distinct skills from every skills-like section, sorted alphabetically.
/// Single-character fragments are dropped. Deduplication is case-sensitive.
pub fn extract_skills(text: &str) -> Vec<String> {
    let skills: BTreeSet<String> = section_spans(text, Section::Skills)
        .iter()
        .flat_map(|span| split_items(span.text, SKILL_SEPARATORS))
        .filter(|skill| skill.chars().count() > 1)
        .collect();

    skills.into_iter().collect()
}
