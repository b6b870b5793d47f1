//! Search results types.

use crate::corpus::SearchableSymbol;
use std::fmt;

/// A matched symbol with its title split for highlighting.
///
/// `prefix + matched_substring + suffix` is always the symbol's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub symbol: &'a SearchableSymbol,
    /// Shortest window of the title that contains the query.
    pub matched_substring: String,
    pub prefix: String,
    pub suffix: String,
}

/// Renders the title with the matched window in brackets.
impl fmt::Display for MatchResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.prefix, self.matched_substring, self.suffix)
    }
}

/// Matches of one query, in corpus order.
///
/// Borrows from the corpus held by the [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub(crate) matches: Vec<MatchResult<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult<'a>> {
        self.matches.iter()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

impl<'a> IntoIterator for SearchResults<'a> {
    type Item = MatchResult<'a>;
    type IntoIter = std::vec::IntoIter<MatchResult<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}
