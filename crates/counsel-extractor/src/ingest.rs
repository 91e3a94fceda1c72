//! Ingest boundary: extract, re-check acceptance, persist

use crate::error::ExtractorError;
use crate::extractor::AttorneyExtractor;
use counsel_domain::traits::AttorneyStore;
use counsel_domain::{AttorneyDraft, AttorneyId};
use scraper::Html;
use tracing::{info, warn};

/// What happened to one ingested page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// A record was stored under this id
    Stored(AttorneyId),
    /// The page had neither a name nor a phone number
    Rejected,
}

/// Couples an extractor with a store
///
/// Every draft goes through the acceptance check here, whether it came from
/// the extractor or from elsewhere, so the store never sees a record without
/// a name or phone.
pub struct Ingestor<S: AttorneyStore> {
    extractor: AttorneyExtractor,
    store: S,
}

impl<S> Ingestor<S>
where
    S: AttorneyStore,
    S::Error: std::fmt::Display,
{
    /// Create a new Ingestor
    pub fn new(extractor: AttorneyExtractor, store: S) -> Self {
        Self { extractor, store }
    }

    /// Extract from a parsed page and store the result if acceptable
    pub fn ingest(&mut self, document: &Html, source_url: &str) -> Result<IngestOutcome, ExtractorError> {
        match self.extractor.extract(document, source_url) {
            Some(draft) => self.accept(draft),
            None => {
                info!("Rejected {}: no name or phone", source_url);
                Ok(IngestOutcome::Rejected)
            }
        }
    }

    /// Parse raw HTML, then [`ingest`](Self::ingest) it
    pub fn ingest_html(&mut self, html: &str, source_url: &str) -> Result<IngestOutcome, ExtractorError> {
        let document = Html::parse_document(html);
        self.ingest(&document, source_url)
    }

    /// Store an already-built draft if it passes the acceptance check
    pub fn accept(&mut self, draft: AttorneyDraft) -> Result<IngestOutcome, ExtractorError> {
        if !draft.is_acceptable() {
            warn!("Refusing to store draft from {} without name or phone", draft.source_url);
            return Ok(IngestOutcome::Rejected);
        }

        let source_url = draft.source_url.clone();
        let id = self
            .store
            .insert(draft)
            .map_err(|e| ExtractorError::Store(e.to_string()))?;

        info!("Stored attorney {} from {}", id, source_url);
        Ok(IngestOutcome::Stored(id))
    }

    /// The extractor in use
    pub fn extractor(&self) -> &AttorneyExtractor {
        &self.extractor
    }

    /// Read access to the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the ingestor, returning the store
    pub fn into_store(self) -> S {
        self.store
    }
}
