//! Postal address
//!
//! Structured `PostalAddress` markup is taken verbatim. Without it, the first
//! non-empty free-text address block is split heuristically.

use crate::document::{element_text, non_empty};
use crate::error::ExtractorError;
use crate::strategy::{parse_selector, SelectorChain};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static ZIP_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{5}(?:-[0-9]{4})?\b").expect("Invalid zip regex"));
static STATE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{2})\b").expect("Invalid state regex"));

/// The four coarse address fields; each is independent of the others
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParts {
    /// Street address, or the whole free-text block
    pub address: Option<String>,
    /// City / locality
    pub city: Option<String>,
    /// State / region
    pub state: Option<String>,
    /// Postal code
    pub zip_code: Option<String>,
}

/// Compiled selectors for schema.org `PostalAddress` markup
#[derive(Debug, Clone)]
pub struct PostalSelectors {
    container: Selector,
    street: Selector,
    locality: Selector,
    region: Selector,
    postal_code: Selector,
}

impl PostalSelectors {
    /// Compile the sub-field selectors under the given container selector
    pub fn new(container: &str) -> Result<Self, ExtractorError> {
        Ok(Self {
            container: parse_selector(container)?,
            street: parse_selector("[itemprop=\"streetAddress\"]")?,
            locality: parse_selector("[itemprop=\"addressLocality\"]")?,
            region: parse_selector("[itemprop=\"addressRegion\"]")?,
            postal_code: parse_selector("[itemprop=\"postalCode\"]")?,
        })
    }
}

/// Address fields from postal markup, else from the free-text chain
pub fn extract_address(document: &Html, postal: &PostalSelectors, chain: &SelectorChain) -> AddressParts {
    if let Some(container) = document.select(&postal.container).next() {
        return from_postal_markup(container, postal);
    }

    chain
        .first_text(document, |text| !text.is_empty())
        .map(|text| parse_address_text(&text))
        .unwrap_or_default()
}

fn from_postal_markup(container: ElementRef<'_>, postal: &PostalSelectors) -> AddressParts {
    let field = |selector: &Selector| {
        container
            .select(selector)
            .next()
            .map(element_text)
            .and_then(non_empty)
    };

    AddressParts {
        address: field(&postal.street),
        city: field(&postal.locality),
        state: field(&postal.region),
        zip_code: field(&postal.postal_code),
    }
}

/// Split a free-text address block into its coarse parts
///
/// `address` is always the whole text. The zip code is the first 5 or 5+4
/// digit group, the state the first bare two-capital token, and the city the
/// comma-delimited text right before that state token.
pub fn parse_address_text(text: &str) -> AddressParts {
    let zip_code = ZIP_CODE.find(text).map(|m| m.as_str().to_string());
    let state = STATE_CODE.captures(text).map(|caps| caps[1].to_string());
    let city = state.as_deref().and_then(|state| city_before_state(text, state));

    AddressParts {
        address: non_empty(text.to_string()),
        city,
        state,
        zip_code,
    }
}

/// The city right before the state token
///
/// The city must follow a comma (`street, City ST`). At the very start of the
/// text it is only taken in the `City, ST` form, so a comma-less street line
/// is never read as a city.
fn city_before_state(text: &str, state: &str) -> Option<String> {
    let state = regex::escape(state);
    let after_comma = format!(r",\s*([^,]+?)\s*,?\s+{}\b", state);
    let leading = format!(r"^\s*([^,]+?)\s*,\s*{}\b", state);

    [after_comma, leading].iter().find_map(|pattern| {
        let caps = Regex::new(pattern).ok()?.captures(text)?;
        non_empty(caps[1].to_string())
    })
}
