//! Phone numbers
//!
//! Candidates come from three regex shapes scanned over the full page text;
//! only numbers valid in the US numbering plan survive, in national format.

use phonenumber::{country, Mode};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("Invalid phone regex")
});
static SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("Invalid phone regex")
});
static COUNTRY_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+1[-.\s]?[0-9]{3}[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").expect("Invalid phone regex")
});

/// Scan order for phone candidates
static PHONE_PATTERNS: [&LazyLock<Regex>; 3] = [&PARENTHESIZED, &SEPARATED, &COUNTRY_CODE];

/// Distinct valid numbers in national format, discovery order, at most `max`
pub fn extract_phones(text: &str, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut phones = Vec::new();

    for pattern in PHONE_PATTERNS.iter() {
        for candidate in pattern.find_iter(text) {
            let Some(formatted) = normalize_phone(candidate.as_str()) else {
                debug!("Discarding phone candidate {:?}", candidate.as_str());
                continue;
            };
            if seen.insert(formatted.clone()) {
                phones.push(formatted);
            }
            if phones.len() == max {
                return phones;
            }
        }
    }

    phones
}

/// Parse as a US number, validate, and format nationally, e.g. `(415) 555-2671`
pub fn normalize_phone(raw: &str) -> Option<String> {
    let number = phonenumber::parse(Some(country::Id::US), raw).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    Some(number.format().mode(Mode::National).to_string())
}
