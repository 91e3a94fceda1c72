//! Error types for the Extractor
//!
//! Field heuristics never produce errors; a miss is an absent field. These
//! variants cover construction (bad configuration) and the ingest boundary.

use thiserror::Error;

/// Errors that can occur while building an extractor or ingesting a page
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A configured CSS selector could not be parsed
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector text as configured
        selector: String,
        /// Parser message
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record store error
    #[error("Store error: {0}")]
    Store(String),
}
