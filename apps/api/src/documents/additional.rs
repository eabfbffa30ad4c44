use crate::documents::models::AdditionalInfo;
use crate::documents::sections::{locate_section, split_items, Section};

const CERTIFICATION_SEPARATORS: &[char] = &['\n', '•'];
const LANGUAGE_SEPARATORS: &[char] = &[',', '\n', '•'];

/// Extracts certifications and spoken languages, each in first-seen order.
pub fn extract_additional_info(text: &str) -> AdditionalInfo {
    let items = |section: Section, separators: &[char]| {
        locate_section(text, section)
            .map(|span| split_items(span, separators))
            .unwrap_or_default()
    };

    AdditionalInfo {
        certifications: items(Section::Certifications, CERTIFICATION_SEPARATORS),
        languages: items(Section::Languages, LANGUAGE_SEPARATORS),
    }
}
