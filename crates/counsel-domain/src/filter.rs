//! Filter module - structured search constraints

/// Search constraints produced by the query parser and consumed by a store
///
/// Each populated field is matched as a case-insensitive substring; populated
/// fields are AND-ed. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Full or partial postal code
    pub zip_code: Option<String>,

    /// Practice-area keyword
    pub practice_area: Option<String>,

    /// City name or fragment
    pub city: Option<String>,
}

impl Filter {
    /// Whether no field is populated
    pub fn is_empty(&self) -> bool {
        self.zip_code.is_none() && self.practice_area.is_none() && self.city.is_none()
    }

    /// Replace fields with any populated fields of `other`
    ///
    /// Used when explicit search parameters override values parsed from text.
    pub fn merged_with(mut self, other: Filter) -> Self {
        if other.zip_code.is_some() {
            self.zip_code = other.zip_code;
        }
        if other.practice_area.is_some() {
            self.practice_area = other.practice_area;
        }
        if other.city.is_some() {
            self.city = other.city;
        }
        self
    }
}
