use std::sync::LazyLock;

use regex::Regex;

use crate::documents::models::ContactInfo;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        (?:\+\d{1,3}[-.\s]?)?       # country code
        \(?\d{3}\)?[-.\s]?          # area code
        \d{3}[-.\s]?\d{4}           # 3-3-4
        |
        \d{4}[-.\s]?\d{3}[-.\s]?\d{3}  # 4-3-3
        ",
    )
    .expect("phone pattern is valid")
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?:https?:)?//)?(?:\w+\.)?linkedin\.com/in/[\w%-]+/?")
        .expect("linkedin pattern is valid")
});

/// A line made only of capitalised words with one or two comma-joined groups,
/// e.g. `San Francisco, CA` or `Austin, Texas, USA`.
static LOCATION: LazyLock<Regex> = LazyLock::new(|| {
    let place = r"[A-Z][A-Za-z]*(?:[ \t]+[A-Z][A-Za-z]*)*";
    Regex::new(&format!(
        r"(?m)^[ \t]*({place}(?:,[ \t]*{place}){{1,2}})[ \t]*$"
    ))
    .expect("location pattern is valid")
});

/// Extracts contact details from the full document text. No heading is required.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let first = |re: &Regex| {
        re.find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };

    ContactInfo {
        email: first(&EMAIL),
        phone: first(&PHONE),
        linkedin: first(&LINKEDIN),
        location: LOCATION
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    }
}
