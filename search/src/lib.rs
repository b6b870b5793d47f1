//! Quick navigation search over a documentation tree.
//!
//! Symbols with a path are collected into a [`SearchCorpus`] in tree order.
//! A query matches a symbol when its characters occur in the title as an
//! ordered subsequence; each match carries the shortest window of the title
//! containing the query, split into prefix, window and suffix for
//! highlighting.
//!
//! Matching is a pure function of corpus and query. Callers that debounce
//! keystrokes can drop stale results without any cancellation protocol.

mod config;
mod corpus;
mod engine;
mod matcher;
mod query;
mod results;

pub use config::SearchConfig;
pub use corpus::{SearchCorpus, SearchableSymbol};
pub use docnav_core::types::CaseMatching;
pub use engine::SearchEngine;
pub use matcher::{fuzzy_match, fuzzy_match_with};
pub use query::SearchQuery;
pub use results::{MatchResult, SearchResults};

#[cfg(test)]
mod tests;
