//! Practice areas

use crate::strategy::SelectorChain;
use counsel_domain::PracticeArea;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Every vocabulary keyword mentioned in a practice section or the meta description
///
/// Results are deduplicated and in vocabulary order, whatever order the page
/// mentions them in.
pub fn extract_practice_areas(
    document: &Html,
    chain: &SelectorChain,
    meta_description: &Selector,
) -> Vec<PracticeArea> {
    let mut found = HashSet::new();

    for element in chain.all_elements(document) {
        let text = element.text().collect::<String>();
        found.extend(PracticeArea::all_in(&text));
    }

    for meta in document.select(meta_description) {
        if let Some(content) = meta.value().attr("content") {
            found.extend(PracticeArea::all_in(content));
        }
    }

    counsel_domain::PRACTICE_AREAS
        .iter()
        .copied()
        .filter(|area| found.contains(area))
        .collect()
}

/// Comma-joined canonical labels, `None` when nothing was found
pub fn join_labels(areas: &[PracticeArea]) -> Option<String> {
    if areas.is_empty() {
        return None;
    }
    Some(areas.iter().map(PracticeArea::label).collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> SelectorChain {
        SelectorChain::parse(&[".practice-areas", ".areas-of-practice", ".specialties", "[class*=\"practice\"]"])
            .unwrap()
    }

    fn meta() -> Selector {
        Selector::parse("meta[name=\"description\"]").unwrap()
    }

    fn labels(doc: &str) -> Option<String> {
        let doc = Html::parse_document(doc);
        join_labels(&extract_practice_areas(&doc, &chain(), &meta()))
    }

    #[test]
    fn test_union_in_vocabulary_order() {
        let found = labels(
            r#"<ul class="practice-areas"><li>Tax disputes</li><li>Divorce</li></ul>
               <div class="specialties">Criminal defense, DUI</div>"#,
        );
        assert_eq!(found.as_deref(), Some("Criminal, Divorce, Dui, Tax"));
    }

    #[test]
    fn test_meta_description_contributes() {
        let found = labels(
            r#"<html><head><meta name="description" content="Oakland personal injury attorney"></head>
               <body><p>About us</p></body></html>"#,
        );
        assert_eq!(found.as_deref(), Some("Personal Injury"));
    }

    #[test]
    fn test_keyword_in_several_sections_is_reported_once() {
        let found = labels(
            r#"<div class="practice-areas">Family law</div>
               <div class="my-practice">Family mediation</div>"#,
        );
        assert_eq!(found.as_deref(), Some("Family"));
    }

    #[test]
    fn test_text_outside_practice_sections_is_ignored() {
        assert_eq!(labels("<p>We handle bankruptcy</p>"), None);
    }
}
