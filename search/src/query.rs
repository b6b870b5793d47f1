//! Search query types.

/// Query type for search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Ordered-subsequence match against symbol titles.
    Fuzzy(String),
}

impl SearchQuery {
    /// The query text with all whitespace removed.
    pub fn normalized(&self) -> String {
        let SearchQuery::Fuzzy(text) = self;
        strip_whitespace(text)
    }
}

pub(crate) fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
