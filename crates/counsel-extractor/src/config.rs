//! Configuration for the Extractor
//!
//! Selector chains are data, not code order: each list is tried front to back
//! and the first usable match wins.

use serde::{Deserialize, Serialize};

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Name selectors, most specific profile markup first, generic heading last
    pub name_selectors: Vec<String>,

    /// A name starting with one of these (ignoring case) is navigation, not a name
    pub name_stop_words: Vec<String>,

    /// Names must be strictly shorter than this many characters
    pub max_name_length: usize,

    /// Maximum number of distinct phone numbers kept
    pub max_phones: usize,

    /// Placeholder domains whose addresses are never accepted
    pub blocked_email_domains: Vec<String>,

    /// Selector for structured postal-address markup
    pub postal_address_selector: String,

    /// Free-text address block selectors, tried when no postal markup exists
    pub address_selectors: Vec<String>,

    /// Selectors for practice / specialty sections
    pub practice_selectors: Vec<String>,

    /// Link text (lower-case) marking a link to the attorney's own website
    pub website_link_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            name_selectors: strings(&[
                "h1.attorney-name",
                "h1.profile-name",
                ".attorney-info h1",
                "h1",
                ".profile-header h1",
                "[itemprop=\"name\"]",
                ".lawyer-name",
            ]),
            name_stop_words: strings(&["search", "find", "contact"]),
            max_name_length: 100,
            max_phones: 5,
            blocked_email_domains: strings(&["example.com", "test.com", "email.com"]),
            postal_address_selector: "[itemtype*=\"PostalAddress\"]".to_string(),
            address_selectors: strings(&[
                ".address",
                ".location",
                ".contact-info",
                "[itemprop=\"address\"]",
            ]),
            practice_selectors: strings(&[
                ".practice-areas",
                ".areas-of-practice",
                ".specialties",
                "[class*=\"practice\"]",
            ]),
            website_link_keywords: strings(&["website", "visit"]),
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    ///
    /// Selector syntax is checked when an extractor is built from the config.
    pub fn validate(&self) -> Result<(), String> {
        if self.name_selectors.is_empty() {
            return Err("name_selectors must not be empty".to_string());
        }
        if self.address_selectors.is_empty() {
            return Err("address_selectors must not be empty".to_string());
        }
        if self.practice_selectors.is_empty() {
            return Err("practice_selectors must not be empty".to_string());
        }
        if self.postal_address_selector.trim().is_empty() {
            return Err("postal_address_selector must not be empty".to_string());
        }
        if self.max_name_length == 0 {
            return Err("max_name_length must be greater than 0".to_string());
        }
        if self.max_phones == 0 {
            return Err("max_phones must be greater than 0".to_string());
        }
        if self.website_link_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("website_link_keywords must not contain blank entries".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_name_chain_order() {
        let config = ExtractorConfig::default();
        assert_eq!(config.name_selectors.first().map(String::as_str), Some("h1.attorney-name"));
        assert_eq!(config.name_selectors.last().map(String::as_str), Some(".lawyer-name"));

        let generic = config.name_selectors.iter().position(|s| s == "h1").unwrap();
        let specific = config.name_selectors.iter().position(|s| s == "h1.profile-name").unwrap();
        assert!(specific < generic);
    }

    #[test]
    fn test_invalid_empty_chain() {
        let mut config = ExtractorConfig::default();
        config.name_selectors.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_zero_limits() {
        let mut config = ExtractorConfig::default();
        config.max_phones = 0;
        assert!(config.validate().is_err());

        let mut config = ExtractorConfig::default();
        config.max_name_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let parsed = ExtractorConfig::from_toml(
            r#"
            max_phones = 2
            blocked_email_domains = ["example.com", "placeholder.org"]
            "#,
        )
        .unwrap();

        assert_eq!(parsed.max_phones, 2);
        assert_eq!(parsed.blocked_email_domains.len(), 2);
        assert_eq!(parsed.name_selectors, ExtractorConfig::default().name_selectors);
    }
}
