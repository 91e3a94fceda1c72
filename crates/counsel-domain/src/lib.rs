//! Counsel Domain Layer
//!
//! Core model for the attorney contact engine. Every other crate depends on the
//! types and traits defined here; nothing in this crate performs I/O.
//!
//! ## Key Concepts
//!
//! - **Attorney**: a persisted contact record with a store-assigned id
//! - **AttorneyDraft**: a candidate record produced by the extractor, not yet stored
//! - **Filter**: structured search constraints derived from free text
//! - **Practice-area vocabulary**: the fixed, ordered keyword list shared by
//!   extraction and query parsing
//! - **Acceptance invariant**: a draft needs a name or a phone to be stored

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attorney;
pub mod filter;
pub mod practice_area;
pub mod traits;

// Re-exports for convenience
pub use attorney::{Attorney, AttorneyDraft, AttorneyId};
pub use filter::Filter;
pub use practice_area::{PracticeArea, PRACTICE_AREAS};
pub use traits::{AttorneyStore, StoreStats, DEFAULT_SEARCH_LIMIT};
