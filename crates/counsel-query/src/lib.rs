//! Counsel Query Parser
//!
//! Turns a free-text search string, as typed into a chat box, into a
//! structured [`Filter`].
//!
//! # Algorithm
//!
//! Three steps run left to right over a working copy of the text. Each step
//! removes what it recognized, so later steps only see what is left:
//!
//! 1. **Postal code**: the first standalone 5-digit token
//! 2. **Practice area**: the first vocabulary keyword, in vocabulary order
//! 3. **City**: whatever remains, minus filler words, a leading preposition
//!    and a trailing state code
//!
//! A city whose name contains a vocabulary keyword (a town containing "tax",
//! for instance) is read as a practice area. That ambiguity is accepted.
//!
//! # Examples
//!
//! ```
//! use counsel_query::parse_query;
//!
//! let filter = parse_query("94621 family law");
//! assert_eq!(filter.zip_code.as_deref(), Some("94621"));
//! assert_eq!(filter.practice_area.as_deref(), Some("family"));
//! assert_eq!(filter.city, None);
//! ```

#![warn(missing_docs)]

use counsel_domain::{Filter, PracticeArea};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{5})\b").expect("Invalid zip code regex"));

static TRAILING_STATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",?\s*[A-Z]{2}\s*$").expect("Invalid state regex"));

/// Words that accompany a practice area or location without naming either
const FILLER_WORDS: &[&str] = &["law", "laws", "lawyer", "lawyers", "attorney", "attorneys"];

/// Dropped only ahead of the city, so "Lake in the Hills" stays whole
const LEADING_PREPOSITIONS: &[&str] = &["in", "near"];

/// Parse a free-text search string into a filter
///
/// Never fails: any string, including an empty one, yields a filter. An
/// all-empty filter means "match everything".
pub fn parse_query(query: &str) -> Filter {
    let mut filter = Filter::default();
    let mut remaining = query.trim().to_string();

    if let Some(caps) = ZIP_CODE.captures(&remaining) {
        let matched = caps[0].to_string();
        filter.zip_code = Some(caps[1].to_string());
        remaining = remaining.replace(&matched, "").trim().to_string();
    }

    if let Some(area) = PracticeArea::first_in(&remaining) {
        filter.practice_area = Some(area.keyword().to_string());
        remaining = remaining
            .replace(area.keyword(), "")
            .replace(&area.label(), "")
            .trim()
            .to_string();
    }

    let without_filler = strip_filler_words(&remaining);
    let city = TRAILING_STATE.replace(&without_filler, "");
    let city = city.trim_matches(|c: char| c == ',' || c.is_whitespace());
    if !city.is_empty() {
        filter.city = Some(city.to_string());
    }

    debug!("Parsed query {:?} into {:?}", query, filter);
    filter
}

fn strip_filler_words(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !FILLER_WORDS.contains(&bare_word(token).as_str()))
        .skip_while(|token| LEADING_PREPOSITIONS.contains(&bare_word(token).as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bare_word(token: &str) -> String {
    token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}
