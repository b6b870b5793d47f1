//! Subsequence matching with minimum-window highlighting.
//!
//! nucleo rejects titles that cannot contain the query before the window scan
//! runs. The scan itself decides the result: a title matches exactly when a
//! window exists.

use crate::config::SearchConfig;
use crate::corpus::{SearchCorpus, SearchableSymbol};
use crate::query::strip_whitespace;
use crate::results::MatchResult;
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use std::collections::HashSet;
use std::ops::Range;

/// Matches `query` against every title in `corpus`, comparing case-sensitively.
///
/// Whitespace in the query is ignored. An empty query matches nothing.
/// Results keep corpus order, and only the first match for each path is kept.
pub fn fuzzy_match<'a>(corpus: &'a SearchCorpus, query: &str) -> Vec<MatchResult<'a>> {
    fuzzy_match_with(corpus, query, &SearchConfig::default())
}

/// [`fuzzy_match`] with a case mode and result limit.
pub fn fuzzy_match_with<'a>(
    corpus: &'a SearchCorpus,
    query: &str,
    config: &SearchConfig,
) -> Vec<MatchResult<'a>> {
    let query = strip_whitespace(query);
    if query.is_empty() {
        return Vec::new();
    }

    let ignore_case = config.ignores_case(&query);
    let needle: Vec<char> = query.chars().map(|c| fold(c, ignore_case)).collect();

    // Built from chars: `Utf32Str::new` keeps only the first char of each grapheme.
    let mut matcher = Matcher::new(nucleo_config(ignore_case));
    let needle_utf32 = Utf32Str::Unicode(&needle);

    let limit = config.result_limit.unwrap_or(usize::MAX);
    let mut seen_paths = HashSet::new();
    let mut matches = Vec::new();

    for symbol in corpus {
        if matches.len() >= limit {
            break;
        }
        if seen_paths.contains(symbol.path.as_str()) {
            continue;
        }

        let title: Vec<char> = symbol.title.chars().collect();
        if matcher
            .fuzzy_match(Utf32Str::Unicode(&title), needle_utf32)
            .is_none()
        {
            continue;
        }

        let folded: Vec<char> = title.iter().map(|&c| fold(c, ignore_case)).collect();
        let Some(window) = minimum_window(&folded, &needle) else {
            continue;
        };

        seen_paths.insert(symbol.path.as_str());
        matches.push(split_title(symbol, &title, window));
    }

    tracing::debug!(
        query_len = needle.len(),
        corpus = corpus.len(),
        matches = matches.len(),
        ignore_case,
        "quick navigation search"
    );
    matches
}

fn nucleo_config(ignore_case: bool) -> NucleoConfig {
    let mut config = NucleoConfig::DEFAULT;
    config.ignore_case = ignore_case;
    config.normalize = false;
    config
}

fn fold(c: char, ignore_case: bool) -> char {
    if ignore_case {
        nucleo::chars::to_lower_case(c)
    } else {
        c
    }
}

fn split_title<'a>(
    symbol: &'a SearchableSymbol,
    title: &[char],
    window: Range<usize>,
) -> MatchResult<'a> {
    MatchResult {
        symbol,
        prefix: title[..window.start].iter().collect(),
        matched_substring: title[window.clone()].iter().collect(),
        suffix: title[window.end..].iter().collect(),
    }
}

/// Shortest range of `text` that contains `query` as an ordered subsequence.
///
/// Each round scans forward from `start` until the whole query is consumed,
/// then walks back from that point to the latest possible window start. The
/// next round begins just after that start. Among windows of equal length the
/// leftmost wins.
pub(crate) fn minimum_window(text: &[char], query: &[char]) -> Option<Range<usize>> {
    if query.is_empty() || query.len() > text.len() {
        return None;
    }

    let mut best: Option<Range<usize>> = None;
    let mut start = 0;

    while start < text.len() {
        let Some(end) = forward_end(text, query, start) else {
            break;
        };
        let window_start = backward_start(text, query, end);
        let window = window_start..end + 1;

        if best.as_ref().is_none_or(|best| window.len() < best.len()) {
            best = Some(window);
        }
        start = window_start + 1;
    }

    best
}

/// Index of the text char that completes `query` when scanning from `start`.
fn forward_end(text: &[char], query: &[char], start: usize) -> Option<usize> {
    let mut remaining = query.iter().peekable();
    for (offset, c) in text[start..].iter().enumerate() {
        if remaining.next_if_eq(&c).is_some() && remaining.peek().is_none() {
            return Some(start + offset);
        }
    }
    None
}

/// Latest start such that `text[start..=end]` still contains `query`.
///
/// `text[..=end]` must contain `query` and end with its last char.
fn backward_start(text: &[char], query: &[char], end: usize) -> usize {
    let mut remaining = query.iter().rev().peekable();
    let mut position = end;
    loop {
        if remaining.next_if_eq(&&text[position]).is_some() && remaining.peek().is_none() {
            return position;
        }
        position -= 1;
    }
}
