//! CV Parser — assembles the five field extractors into one `ParsedDocument`.

use std::path::Path;

use tracing::debug;

use crate::documents::additional::extract_additional_info;
use crate::documents::best_effort;
use crate::documents::contact::extract_contact_info;
use crate::documents::education::extract_education;
use crate::documents::experience::extract_experience;
use crate::documents::extraction::{extract_text, CV_FORMATS};
use crate::documents::models::{NormalizedText, ParsedDocument, SourceDocument};
use crate::documents::skills::extract_skills;
use crate::documents::ParseError;

/// Parses a résumé (PDF or DOCX).
///
/// Fails only for unsupported formats, undecodable files, or documents without text.
/// Sections that cannot be found come back empty.
pub fn parse_cv(doc: &SourceDocument) -> Result<ParsedDocument, ParseError> {
    let text = extract_text(doc, CV_FORMATS)?;
    Ok(parse_cv_text(&text))
}

/// Reads and parses a résumé from disk.
pub fn parse_cv_file(path: impl AsRef<Path>) -> Result<ParsedDocument, ParseError> {
    let doc = SourceDocument::open(path)?;
    parse_cv(&doc)
}

/// Runs every field extractor over already-extracted text. Never fails.
pub fn parse_cv_text(text: &NormalizedText) -> ParsedDocument {
    let text = text.as_str();

    let parsed = ParsedDocument {
        skills: best_effort("skills", || extract_skills(text)),
        education: best_effort("education", || extract_education(text)),
        experience: best_effort("experience", || extract_experience(text)),
        contact: best_effort("contact", || extract_contact_info(text)),
        additional: best_effort("additional", || extract_additional_info(text)),
    };

    debug!(
        "Parsed CV: {} skills, {} education, {} experience, {} certifications, {} languages",
        parsed.skills.len(),
        parsed.education.len(),
        parsed.experience.len(),
        parsed.additional.certifications.len(),
        parsed.additional.languages.len()
    );

    parsed
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::documents::docx::tests::build_docx;
    use crate::documents::models::DocumentFormat;

    const PLAIN_CV: &str = "Jane Doe\n\
        jane.doe@example.com\n\
        555-123-4567\n\
        \n\
        SKILLS:\nRust, Python\nSQL\n\
        \n\
        EDUCATION:\nMIT\nB.S. Computer Science\n2018-2022\n\
        \n\
        CERTIFICATIONS:\n• CKA\n\
        \n\
        LANGUAGES: English, French\n\
        \n\
        WORK EXPERIENCE:\nAcme Corp, Engineer\nJan 2020 to Present\nBuilt systems.";

    fn paragraphs(lines: &[&str]) -> String {
        let body: String = lines
            .iter()
            .map(|l| format!(r#"<w:p><w:r><w:t xml:space="preserve">{l}</w:t></w:r></w:p>"#))
            .collect();
        format!("<w:body>{body}</w:body>")
    }

    #[test]
    fn test_parse_cv_text_fills_every_field() {
        let text = NormalizedText::new(PLAIN_CV.to_string()).unwrap();
        let parsed = parse_cv_text(&text);

        assert_eq!(parsed.skills, vec!["Python", "Rust", "SQL"]);
        assert!(parsed
            .education
            .iter()
            .any(|e| e.degree.contains("B.S.") && e.year == "2018-2022"));
        assert_eq!(parsed.experience.len(), 1);
        assert_eq!(parsed.experience[0].company, "Acme Corp");
        assert_eq!(parsed.experience[0].dates, "Jan 2020 to Present");
        assert_eq!(parsed.contact.email, "jane.doe@example.com");
        assert_eq!(parsed.contact.phone, "555-123-4567");
        assert_eq!(parsed.contact.linkedin, "");
        assert_eq!(parsed.additional.certifications, vec!["CKA"]);
        assert_eq!(parsed.additional.languages, vec!["English", "French"]);
    }

    #[test]
    fn test_no_headings_gives_empty_record() {
        let text = NormalizedText::new("just some words about nothing".to_string()).unwrap();
        assert_eq!(parse_cv_text(&text), ParsedDocument::default());
    }

    #[test]
    fn test_reparsing_is_identical() {
        let text = NormalizedText::new(PLAIN_CV.to_string()).unwrap();
        assert_eq!(parse_cv_text(&text), parse_cv_text(&text));
    }

    #[test]
    fn test_parse_docx_cv() {
        let body = paragraphs(&[
            "JANE DOE",
            "jane.doe@example.com | (555) 123-4567",
            "San Francisco, CA",
            "SKILLS",
            "Rust, Python, SQL",
            "EDUCATION",
            "MIT",
            "B.S. Computer Science 2014-2018",
            "WORK EXPERIENCE",
            "Acme Corp, Engineer",
            "Jan 2020 to Present",
            "Built systems.",
        ]);
        let doc = SourceDocument::new(DocumentFormat::Docx, build_docx(&body));
        let parsed = parse_cv(&doc).unwrap();

        for skill in ["Rust", "Python", "SQL"] {
            assert!(parsed.skills.iter().any(|s| s == skill), "missing {skill}");
        }
        assert_eq!(parsed.contact.email, "jane.doe@example.com");
        assert_eq!(parsed.contact.phone, "(555) 123-4567");
        assert_eq!(parsed.contact.location, "San Francisco, CA");
        assert!(parsed
            .education
            .iter()
            .any(|e| e.degree.starts_with("B.S.") && e.year == "2014-2018"));
        assert_eq!(parsed.experience[0].company, "Acme Corp");
        assert_eq!(parsed.experience[0].position, "Engineer");
        assert!(parsed.experience[0].description.contains("Built systems."));
    }

    #[test]
    fn test_parse_cv_file_from_disk() {
        let bytes = build_docx(&paragraphs(&["Skills:", "Go, Rust"]));
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(&bytes).unwrap();

        let parsed = parse_cv_file(file.path()).unwrap();
        assert_eq!(parsed.skills, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_empty_docx_cv_is_empty_document() {
        let doc = SourceDocument::new(DocumentFormat::Docx, build_docx("<w:body/>"));
        assert!(matches!(parse_cv(&doc), Err(ParseError::EmptyDocument)));
    }

    #[test]
    fn test_plaintext_cv_is_unsupported() {
        let doc = SourceDocument::new(DocumentFormat::Plaintext, PLAIN_CV);
        assert!(matches!(
            parse_cv(&doc),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_unknown_extension_fails_before_reading() {
        assert!(matches!(
            parse_cv_file("/nonexistent/cv.odt"),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }
}
