//! Search engine over a replaceable corpus.

use crate::config::SearchConfig;
use crate::corpus::SearchCorpus;
use crate::matcher::fuzzy_match_with;
use crate::query::SearchQuery;
use crate::results::SearchResults;
use std::sync::Arc;

/// Quick navigation search engine.
///
/// The corpus is rebuilt wholesale whenever a new tree is fetched and swapped
/// in with [`SearchEngine::replace_corpus`]. Searching keeps no state between
/// calls.
pub struct SearchEngine {
    corpus: Arc<SearchCorpus>,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(corpus: impl Into<Arc<SearchCorpus>>, config: SearchConfig) -> Self {
        Self {
            corpus: corpus.into(),
            config,
        }
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Replaces the whole corpus. Results borrowed from the previous corpus
    /// must be dropped first.
    pub fn replace_corpus(&mut self, corpus: impl Into<Arc<SearchCorpus>>) {
        self.corpus = corpus.into();
        tracing::debug!(symbols = self.corpus.len(), "replaced search corpus");
    }

    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }
}

/// Search operations.
impl SearchEngine {
    pub fn search(&self, query: &SearchQuery) -> SearchResults<'_> {
        let SearchQuery::Fuzzy(pattern) = query;
        SearchResults {
            matches: fuzzy_match_with(&self.corpus, pattern, &self.config),
        }
    }

    pub fn corpus(&self) -> &Arc<SearchCorpus> {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
