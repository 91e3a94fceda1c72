//! Attorney name

use crate::strategy::SelectorChain;
use scraper::Html;

/// First acceptable name from the selector chain
pub fn extract_name(
    document: &Html,
    chain: &SelectorChain,
    stop_words: &[String],
    max_length: usize,
) -> Option<String> {
    chain.first_text(document, |text| is_plausible_name(text, stop_words, max_length))
}

/// Non-empty, shorter than `max_length` characters, not navigation text
pub fn is_plausible_name(text: &str, stop_words: &[String], max_length: usize) -> bool {
    if text.is_empty() || text.chars().count() >= max_length {
        return false;
    }
    let lowered = text.to_lowercase();
    !stop_words
        .iter()
        .any(|word| lowered.starts_with(&word.to_lowercase()))
}
