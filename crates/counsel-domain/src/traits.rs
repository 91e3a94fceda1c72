//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Attorney, AttorneyDraft, AttorneyId, Filter};

/// Result cap applied when a caller does not supply one
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Trait for persisting and retrieving attorney records
///
/// Implemented by the infrastructure layer (counsel-store). Each operation is
/// independently atomic; nothing spans calls.
pub trait AttorneyStore {
    /// Error type for store operations
    type Error;

    /// Persist a draft and return its newly assigned id
    ///
    /// No duplicate detection is performed.
    fn insert(&mut self, draft: AttorneyDraft) -> Result<AttorneyId, Self::Error>;

    /// Records matching every populated filter field, newest first
    fn search(&self, filter: &Filter, limit: usize) -> Result<Vec<Attorney>, Self::Error>;

    /// Get a record by id; a missing id is `Ok(None)`
    fn get_by_id(&self, id: AttorneyId) -> Result<Option<Attorney>, Self::Error>;

    /// Aggregate counts over the whole store
    fn stats(&self) -> Result<StoreStats, Self::Error>;
}

/// Aggregate statistics reported by a store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of records
    pub total_attorneys: u64,

    /// Distinct non-empty city values
    pub unique_cities: u64,

    /// Distinct non-empty state values
    pub unique_states: u64,
}
