//! Counsel Extractor
//!
//! Turns one fetched attorney profile page into at most one structured
//! [`AttorneyDraft`](counsel_domain::AttorneyDraft).
//!
//! # Overview
//!
//! Each field has its own heuristic, driven by ordered selector chains from
//! [`ExtractorConfig`]. Field heuristics never fail: a miss is a missing
//! field. A page where neither a name nor a phone number is found produces
//! no draft at all.
//!
//! # Architecture
//!
//! ```text
//! HTML → AttorneyExtractor → AttorneyDraft → Ingestor → AttorneyStore
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use counsel_extractor::{AttorneyExtractor, Ingestor, IngestOutcome};
//! use counsel_store::SqliteStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = AttorneyExtractor::default_config()?;
//! let store = SqliteStore::new(":memory:")?;
//! let mut ingestor = Ingestor::new(extractor, store);
//!
//! let html = r#"<h1 class="attorney-name">Jane Doe</h1><p>Call (415) 555-2671</p>"#;
//! match ingestor.ingest_html(html, "https://directory.test/jane-doe")? {
//!     IngestOutcome::Stored(id) => println!("Stored attorney {}", id),
//!     IngestOutcome::Rejected => println!("Nothing usable on the page"),
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod document;
mod error;
mod extractor;
mod fields;
mod ingest;
mod strategy;


pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::AttorneyExtractor;
pub use fields::address::parse_address_text;
pub use fields::email::is_valid_email;
pub use fields::phone::normalize_phone;
pub use fields::AddressParts;
pub use ingest::{IngestOutcome, Ingestor};
pub use strategy::SelectorChain;
