//! Attorney module - the structured contact record

use chrono::{DateTime, Utc};
use std::fmt;

/// Store-assigned identifier for a persisted attorney record
///
/// Ids are assigned once at insertion and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttorneyId(i64);

impl AttorneyId {
    /// Wrap a raw row id
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an id from user input such as a CLI argument
    ///
    /// # Examples
    ///
    /// ```
    /// use counsel_domain::AttorneyId;
    ///
    /// let id = AttorneyId::parse("42").unwrap();
    /// assert_eq!(id.value(), 42);
    /// assert!(AttorneyId::parse("forty-two").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid attorney id '{}': {}", s, e))
    }
}

impl fmt::Display for AttorneyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate record produced by the extractor
///
/// Every field is optional. A draft only becomes an [`Attorney`] once a store
/// accepts it, and only drafts satisfying [`AttorneyDraft::is_acceptable`]
/// should ever be handed to a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttorneyDraft {
    /// Display name of the attorney or firm
    pub name: Option<String>,

    /// Up to five nationally formatted numbers, joined with ", "
    pub phone: Option<String>,

    /// A single validated address
    pub email: Option<String>,

    /// External website, or the source page's origin when none was found
    pub website: Option<String>,

    /// Street address, or the whole free-text address block
    pub address: Option<String>,

    /// City / locality
    pub city: Option<String>,

    /// State / region
    pub state: Option<String>,

    /// Postal code
    pub zip_code: Option<String>,

    /// Canonical practice-area labels, joined with ", "
    pub practice_areas: Option<String>,

    /// URL of the page this draft was extracted from
    pub source_url: String,
}

impl AttorneyDraft {
    /// Create an empty draft for the given source page
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    /// Whether a name is present and not blank
    pub fn has_name(&self) -> bool {
        is_present(&self.name)
    }

    /// Whether a phone is present and not blank
    pub fn has_phone(&self) -> bool {
        is_present(&self.phone)
    }

    /// The acceptance invariant: a record needs a name or a phone
    ///
    /// # Examples
    ///
    /// ```
    /// use counsel_domain::AttorneyDraft;
    ///
    /// let mut draft = AttorneyDraft::new("https://firm.test/jane");
    /// assert!(!draft.is_acceptable());
    ///
    /// draft.phone = Some("(415) 555-2671".to_string());
    /// assert!(draft.is_acceptable());
    /// ```
    pub fn is_acceptable(&self) -> bool {
        self.has_name() || self.has_phone()
    }
}

/// A persisted attorney record
///
/// Records are immutable once stored; a repeated scrape inserts a new row
/// rather than updating an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attorney {
    /// Store-assigned identifier
    pub id: AttorneyId,

    /// Display name of the attorney or firm
    pub name: Option<String>,

    /// Up to five nationally formatted numbers, joined with ", "
    pub phone: Option<String>,

    /// A single validated address
    pub email: Option<String>,

    /// External website, or the source page's origin
    pub website: Option<String>,

    /// Street address, or the whole free-text address block
    pub address: Option<String>,

    /// City / locality
    pub city: Option<String>,

    /// State / region
    pub state: Option<String>,

    /// Postal code
    pub zip_code: Option<String>,

    /// Canonical practice-area labels, joined with ", "
    pub practice_areas: Option<String>,

    /// URL of the page this record was extracted from
    pub source_url: String,

    /// When the record was inserted
    pub created_at: DateTime<Utc>,

    /// Equal to `created_at`; there is no update path
    pub updated_at: DateTime<Utc>,
}

impl Attorney {
    /// Build a persisted record from an accepted draft
    pub fn from_draft(id: AttorneyId, draft: AttorneyDraft, stored_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            website: draft.website,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            practice_areas: draft.practice_areas,
            source_url: draft.source_url,
            created_at: stored_at,
            updated_at: stored_at,
        }
    }

    /// The contact fields of this record, without id or timestamps
    pub fn to_draft(&self) -> AttorneyDraft {
        AttorneyDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            practice_areas: self.practice_areas.clone(),
            source_url: self.source_url.clone(),
        }
    }

    /// "City, ST 12345" when any location part is known, else the raw address
    pub fn location(&self) -> Option<String> {
        let city = self.city.as_deref().unwrap_or("").trim();
        let state = self.state.as_deref().unwrap_or("").trim();
        let zip = self.zip_code.as_deref().unwrap_or("").trim();

        let region = [state, zip]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        let location = match (city.is_empty(), region.is_empty()) {
            (false, false) => format!("{}, {}", city, region),
            (false, true) => city.to_string(),
            (true, false) => region,
            (true, true) => return self.address.clone().filter(|a| !a.trim().is_empty()),
        };
        Some(location)
    }
}

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
