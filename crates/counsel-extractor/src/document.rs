//! Text access over a parsed document

use scraper::{ElementRef, Html};

/// Text of an element with whitespace runs collapsed to single spaces
pub fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Every text node of the document concatenated, as-is
///
/// Includes script, style and title text, like a plain "get text" over the
/// whole tree. Pattern scans (phones, emails) run over this.
pub fn full_text(document: &Html) -> String {
    document.root_element().text().collect()
}

/// Collapse whitespace runs to single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `Some(text)` unless the text is empty after trimming
pub fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == text.len() {
        Some(text)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_element_text_joins_nested_nodes() {
        let doc = Html::parse_fragment("<h1>  Jane\n   <span>Q.</span> Doe </h1>");
        let selector = Selector::parse("h1").unwrap();
        let h1 = doc.select(&selector).next().unwrap();
        assert_eq!(element_text(h1), "Jane Q. Doe");
    }

    #[test]
    fn test_full_text_includes_every_node() {
        let doc = Html::parse_document(
            "<html><head><title>Doe Law</title></head><body><p>Call <b>415</b>-555-2671</p></body></html>",
        );
        let text = full_text(&doc);
        assert!(text.contains("Doe Law"));
        assert!(text.contains("415-555-2671"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" CA ".to_string()).as_deref(), Some("CA"));
    }
}
