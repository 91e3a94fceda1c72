//! Practice-area vocabulary shared by extraction and query parsing
//!
//! The list is ordered. Query parsing takes the first keyword in this order,
//! so "divorce" loses to "family" when a query mentions both.

/// A recognized legal specialty keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PracticeArea {
    keyword: &'static str,
}

/// The fixed vocabulary, in declared order
pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea::new("criminal"),
    PracticeArea::new("family"),
    PracticeArea::new("divorce"),
    PracticeArea::new("personal injury"),
    PracticeArea::new("dui"),
    PracticeArea::new("dwi"),
    PracticeArea::new("immigration"),
    PracticeArea::new("bankruptcy"),
    PracticeArea::new("estate planning"),
    PracticeArea::new("real estate"),
    PracticeArea::new("business"),
    PracticeArea::new("corporate"),
    PracticeArea::new("employment"),
    PracticeArea::new("civil"),
    PracticeArea::new("litigation"),
    PracticeArea::new("medical malpractice"),
    PracticeArea::new("workers compensation"),
    PracticeArea::new("tax"),
    PracticeArea::new("intellectual property"),
];

impl PracticeArea {
    const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }

    /// The lower-case keyword as matched against text
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Canonical display label: the keyword in title case
    ///
    /// # Examples
    ///
    /// ```
    /// use counsel_domain::PRACTICE_AREAS;
    ///
    /// let injury = PRACTICE_AREAS.iter().find(|a| a.keyword() == "personal injury").unwrap();
    /// assert_eq!(injury.label(), "Personal Injury");
    /// ```
    pub fn label(&self) -> String {
        title_case(self.keyword)
    }

    /// Look up a vocabulary entry by keyword or label, ignoring case
    pub fn lookup(term: &str) -> Option<Self> {
        let term = term.trim().to_lowercase();
        PRACTICE_AREAS.iter().copied().find(|a| a.keyword == term)
    }

    /// Every vocabulary entry mentioned in `text`, in declared order
    pub fn all_in(text: &str) -> Vec<Self> {
        let lowered = text.to_lowercase();
        PRACTICE_AREAS
            .iter()
            .copied()
            .filter(|a| lowered.contains(a.keyword))
            .collect()
    }

    /// The first vocabulary entry (in declared order) mentioned in `text`
    pub fn first_in(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        PRACTICE_AREAS
            .iter()
            .copied()
            .find(|a| lowered.contains(a.keyword))
    }
}

/// Upper-case the first letter of every whitespace-separated word
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
