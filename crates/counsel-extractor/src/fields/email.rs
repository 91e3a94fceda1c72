//! Email address

use crate::document::full_text;
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use tracing::debug;

static EMAIL_IN_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});
static EMAIL_EXACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// A `mailto:` target if one validates, else the first valid address in the text
pub fn extract_email(document: &Html, anchors: &Selector, blocked_domains: &[String]) -> Option<String> {
    let from_link = document
        .select(anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(mailto_target)
        .find(|email| is_valid_email(email, blocked_domains));

    if from_link.is_some() {
        return from_link;
    }

    let text = full_text(document);
    EMAIL_IN_TEXT
        .find_iter(&text)
        .map(|m| m.as_str())
        .find(|email| is_valid_email(email, blocked_domains))
        .map(str::to_string)
}

/// The address part of a `mailto:` href, without any query string
fn mailto_target(href: &str) -> Option<String> {
    let href = href.trim();
    let prefix = href.get(..7)?;
    if !prefix.eq_ignore_ascii_case("mailto:") {
        return None;
    }
    let target = href[7..].split('?').next().unwrap_or("").trim();
    if target.is_empty() {
        None
    } else {
        Some(target.to_string())
    }
}

/// Full-shape match and a domain outside the placeholder blocklist
///
/// Subdomains of a blocked domain are blocked too.
pub fn is_valid_email(email: &str, blocked_domains: &[String]) -> bool {
    if !EMAIL_EXACT.is_match(email) {
        return false;
    }

    let domain = email
        .rsplit_once('@')
        .map(|(_, domain)| domain.to_lowercase())
        .unwrap_or_default();

    let blocked = blocked_domains.iter().any(|blocked| {
        let blocked = blocked.to_lowercase();
        domain == blocked || domain.ends_with(&format!(".{}", blocked))
    });

    if blocked {
        debug!("Rejecting placeholder email {:?}", email);
    }
    !blocked
}
