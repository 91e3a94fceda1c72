//! Core AttorneyExtractor implementation

use crate::config::ExtractorConfig;
use crate::document::full_text;
use crate::error::ExtractorError;
use crate::fields::address::extract_address;
use crate::fields::email::extract_email;
use crate::fields::name::extract_name;
use crate::fields::phone::extract_phones;
use crate::fields::practice::{extract_practice_areas, join_labels};
use crate::fields::website::extract_website;
use crate::fields::PostalSelectors;
use crate::strategy::{parse_selector, SelectorChain};
use counsel_domain::AttorneyDraft;
use scraper::{Html, Selector};
use tracing::{debug, info};

/// Turns one parsed page into zero or one attorney draft
///
/// All selectors are compiled once at construction; extraction itself never
/// fails. A page yielding neither a name nor a phone number yields nothing.
#[derive(Debug, Clone)]
pub struct AttorneyExtractor {
    config: ExtractorConfig,
    name_chain: SelectorChain,
    address_chain: SelectorChain,
    practice_chain: SelectorChain,
    postal: PostalSelectors,
    anchors: Selector,
    meta_description: Selector,
}

impl AttorneyExtractor {
    /// Create a new extractor, validating the configuration and compiling every selector
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        Ok(Self {
            name_chain: SelectorChain::parse(&config.name_selectors)?,
            address_chain: SelectorChain::parse(&config.address_selectors)?,
            practice_chain: SelectorChain::parse(&config.practice_selectors)?,
            postal: PostalSelectors::new(&config.postal_address_selector)?,
            anchors: parse_selector("a[href]")?,
            meta_description: parse_selector("meta[name=\"description\"]")?,
            config,
        })
    }

    /// Create an extractor with the built-in selector presets
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// The configuration this extractor was built from
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse raw HTML and extract from it
    pub fn extract_html(&self, html: &str, source_url: &str) -> Option<AttorneyDraft> {
        let document = Html::parse_document(html);
        self.extract(&document, source_url)
    }

    /// Extract a draft from a parsed page
    pub fn extract(&self, document: &Html, source_url: &str) -> Option<AttorneyDraft> {
        let text = full_text(document);

        let name = extract_name(
            document,
            &self.name_chain,
            &self.config.name_stop_words,
            self.config.max_name_length,
        );
        let phones = extract_phones(&text, self.config.max_phones);
        let address = extract_address(document, &self.postal, &self.address_chain);
        let practice_areas =
            extract_practice_areas(document, &self.practice_chain, &self.meta_description);

        let draft = AttorneyDraft {
            name,
            phone: (!phones.is_empty()).then(|| phones.join(", ")),
            email: extract_email(document, &self.anchors, &self.config.blocked_email_domains),
            website: extract_website(
                document,
                &self.anchors,
                source_url,
                &self.config.website_link_keywords,
            ),
            address: address.address,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
            practice_areas: join_labels(&practice_areas),
            source_url: source_url.to_string(),
        };

        if !draft.is_acceptable() {
            debug!("No name or phone found on {}, skipping", source_url);
            return None;
        }

        info!(
            "Extracted attorney {:?} from {} ({} phone(s), {} practice area(s))",
            draft.name.as_deref().unwrap_or("<unnamed>"),
            source_url,
            phones.len(),
            practice_areas.len()
        );
        Some(draft)
    }
}
