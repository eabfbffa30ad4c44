//! Section locator — finds the text belonging to a named section by heading synonyms.
//!
//! Headings live in `SECTION_RULES`, an ordered table of named rules. Adding a synonym is
//! a table edit; no control flow changes.

use std::sync::LazyLock;

use regex::Regex;

use crate::documents::models::SectionSpan;

/// Canonical section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Skills,
    Education,
    Experience,
    Certifications,
    Languages,
    Requirements,
    Responsibilities,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Certifications => "certifications",
            Section::Languages => "languages",
            Section::Requirements => "requirements",
            Section::Responsibilities => "responsibilities",
        }
    }
}

/// A canonical section and the heading-synonym families that introduce it.
/// Each family yields at most one span; spans from several families are unioned.
pub struct SectionRule {
    pub section: Section,
    pub families: &'static [&'static [&'static str]],
}

pub const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        section: Section::Skills,
        families: &[
            &[
                "SKILLS",
                "TECHNICAL SKILLS",
                "CORE COMPETENCIES",
                "EXPERTISE",
                "QUALIFICATIONS",
            ],
            &["TECHNOLOGIES", "TOOLS", "SOFTWARE"],
        ],
    },
    SectionRule {
        section: Section::Education,
        families: &[&["EDUCATION", "ACADEMIC", "QUALIFICATIONS"]],
    },
    SectionRule {
        section: Section::Experience,
        families: &[&[
            "EXPERIENCE",
            "WORK EXPERIENCE",
            "EMPLOYMENT",
            "PROFESSIONAL EXPERIENCE",
        ]],
    },
    SectionRule {
        section: Section::Certifications,
        families: &[&[
            "CERTIFICATIONS",
            "CERTIFICATION",
            "CERTIFICATES",
            "CERTIFICATE",
        ]],
    },
    SectionRule {
        section: Section::Languages,
        families: &[&["LANGUAGES", "LANGUAGE"]],
    },
    SectionRule {
        section: Section::Requirements,
        families: &[&[
            "REQUIREMENTS",
            "REQUIRED SKILLS",
            "MINIMUM QUALIFICATIONS",
            "WHAT YOU NEED",
            "MUST HAVE",
        ]],
    },
    SectionRule {
        section: Section::Responsibilities,
        families: &[&[
            "RESPONSIBILITIES",
            "KEY RESPONSIBILITIES",
            "DUTIES",
            "WHAT YOU WILL DO",
        ]],
    },
];

struct CompiledRule {
    section: Section,
    patterns: Vec<Regex>,
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    SECTION_RULES
        .iter()
        .map(|rule| CompiledRule {
            section: rule.section,
            patterns: rule.families.iter().map(|f| family_pattern(f)).collect(),
        })
        .collect()
});

/// `<heading>[:\n]` then the shortest run of text up to a blank line or end of text.
fn family_pattern(headings: &[&str]) -> Regex {
    let alternatives = headings
        .iter()
        .map(|h| regex::escape(h))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?is)(?:{alternatives})[:\n](.*?)(?:\n\n|\z)"))
        .expect("section heading pattern is valid")
}

/// Returns one span per heading family that matches, in table order.
pub fn section_spans<'a>(text: &'a str, section: Section) -> Vec<SectionSpan<'a>> {
    let Some(rule) = COMPILED_RULES.iter().find(|r| r.section == section) else {
        return Vec::new();
    };

    rule.patterns
        .iter()
        .filter_map(|pattern| pattern.captures(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| SectionSpan {
            section: section.as_str(),
            text: m.as_str(),
        })
        .collect()
}

/// Returns the text of the first matching span, if any.
pub fn locate_section(text: &str, section: Section) -> Option<&str> {
    section_spans(text, section).first().map(|span| span.text)
}

/// Splits section text into items on any of `separators`, trimming and dropping empties.
/// Order is preserved and duplicates are kept.
pub fn split_items(text: &str, separators: &[char]) -> Vec<String> {
    text.split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_a_rule() {
        for section in [
            Section::Skills,
            Section::Education,
            Section::Experience,
            Section::Certifications,
            Section::Languages,
            Section::Requirements,
            Section::Responsibilities,
        ] {
            assert!(
                SECTION_RULES.iter().any(|r| r.section == section),
                "no rule for {}",
                section.as_str()
            );
        }
    }

    #[test]
    fn test_locate_with_colon() {
        let text = "Jane Doe\nEDUCATION: MIT 2020\n\nOther";
        assert_eq!(locate_section(text, Section::Education), Some(" MIT 2020"));
    }

    #[test]
    fn test_locate_with_line_break_and_end_of_text() {
        let text = "Languages\nEnglish\nFrench";
        assert_eq!(
            locate_section(text, Section::Languages),
            Some("English\nFrench")
        );
    }

    #[test]
    fn test_locate_is_case_insensitive() {
        let text = "technical skills:\nRust\n\nEDUCATION:\nMIT";
        let span = locate_section(text, Section::Skills).unwrap();
        assert_eq!(span, "\nRust");
    }

    #[test]
    fn test_heading_needs_separator() {
        assert_eq!(locate_section("EDUCATION - none", Section::Education), None);
    }

    #[test]
    fn test_missing_section_is_none() {
        assert_eq!(locate_section("nothing to see", Section::Experience), None);
        assert!(section_spans("nothing to see", Section::Skills).is_empty());
    }

    #[test]
    fn test_skills_unions_both_families() {
        let text = "SKILLS:\nRust\n\nTOOLS:\nGit, Docker";
        let spans = section_spans(text, Section::Skills);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "\nRust");
        assert_eq!(spans[1].text, "\nGit, Docker");
        assert!(spans.iter().all(|s| s.section == "skills"));
    }

    #[test]
    fn test_first_match_wins_within_family() {
        let text = "EDUCATION:\nMIT\n\nACADEMIC:\nHarvard";
        assert_eq!(locate_section(text, Section::Education), Some("\nMIT"));
    }

    #[test]
    fn test_split_items_keeps_order_and_duplicates() {
        let items = split_items("\n• AWS SAA\n• CKA\n\n• AWS SAA", &['\n', '•']);
        assert_eq!(items, vec!["AWS SAA", "CKA", "AWS SAA"]);
    }
}
