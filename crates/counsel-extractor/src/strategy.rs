//! Ordered selector strategies
//!
//! A [`SelectorChain`] is an ordered list of extraction strategies, one per
//! CSS selector. Each strategy is a pure function of the document; the chain
//! combines them by "first non-empty wins".

use crate::document::element_text;
use crate::error::ExtractorError;
use scraper::{ElementRef, Html, Selector};

/// Parse one CSS selector, keeping its source text in the error
pub fn parse_selector(selector: &str) -> Result<Selector, ExtractorError> {
    Selector::parse(selector).map_err(|e| ExtractorError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// An ordered, compiled list of CSS selectors
#[derive(Debug, Clone)]
pub struct SelectorChain {
    entries: Vec<(String, Selector)>,
}

impl SelectorChain {
    /// Compile a chain, failing on the first invalid selector
    pub fn parse<S: AsRef<str>>(selectors: &[S]) -> Result<Self, ExtractorError> {
        let entries = selectors
            .iter()
            .map(|s| {
                let source = s.as_ref();
                parse_selector(source).map(|compiled| (source.to_string(), compiled))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Selector texts in evaluation order
    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(source, _)| source.as_str())
    }

    /// Text of the first element matched by the first selector whose text is accepted
    ///
    /// Only the first element of each selector is considered; if its text is
    /// rejected, evaluation moves on to the next selector.
    pub fn first_text<F>(&self, document: &Html, accept: F) -> Option<String>
    where
        F: Fn(&str) -> bool,
    {
        self.entries.iter().find_map(|(_, selector)| {
            let element = document.select(selector).next()?;
            let text = element_text(element);
            if accept(&text) {
                Some(text)
            } else {
                None
            }
        })
    }

    /// Every element matched by any selector, chain order then document order
    ///
    /// An element matched by several selectors is yielded once per selector.
    pub fn all_elements<'a>(&'a self, document: &'a Html) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.entries
            .iter()
            .flat_map(move |(_, selector)| document.select(selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_selector_is_reported() {
        let result = SelectorChain::parse(&["h1", "div[["]);
        match result {
            Err(ExtractorError::InvalidSelector { selector, .. }) => assert_eq!(selector, "div[["),
            other => panic!("expected InvalidSelector, got {:?}", other),
        }
    }

    #[test]
    fn test_selectors_keep_order() {
        let chain = SelectorChain::parse(&[".a", ".b", ".c"]).unwrap();
        assert_eq!(chain.selectors().collect::<Vec<_>>(), vec![".a", ".b", ".c"]);
    }

    #[test]
    fn test_first_text_falls_through_rejected_candidates() {
        let doc = Html::parse_document(
            "<div class='a'>Search our directory</div><div class='b'>Jane Doe</div>",
        );
        let chain = SelectorChain::parse(&[".missing", ".a", ".b"]).unwrap();

        let text = chain.first_text(&doc, |t| !t.to_lowercase().starts_with("search"));
        assert_eq!(text.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_first_text_only_looks_at_first_element_per_selector() {
        let doc = Html::parse_document("<p class='x'></p><p class='x'>second</p>");
        let chain = SelectorChain::parse(&[".x"]).unwrap();
        assert_eq!(chain.first_text(&doc, |t| !t.is_empty()), None);
    }

    #[test]
    fn test_all_elements_spans_every_selector() {
        let doc = Html::parse_document("<p class='a'>1</p><p class='b'>2</p><p class='a'>3</p>");
        let chain = SelectorChain::parse(&[".b", ".a"]).unwrap();
        let texts: Vec<_> = chain.all_elements(&doc).map(element_text).collect();
        assert_eq!(texts, vec!["2", "1", "3"]);
    }
}
