use super::*;
use common::{corpus_of, matched, symbol, titles};
use docnav_core::NavigatorIndex;
use docnav_core::types::{NodeKind, QuickNavigationConfig, RawNode};

mod common {
    use super::*;

    pub(super) fn symbol(title: &str, path: &str) -> SearchableSymbol {
        SearchableSymbol::new(title, path)
    }

    /// Corpus whose paths are derived from the titles.
    pub(super) fn corpus_of(titles: &[&str]) -> SearchCorpus {
        titles
            .iter()
            .map(|title| symbol(title, &format!("/{title}")))
            .collect()
    }

    pub(super) fn titles<'a>(results: &[MatchResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|result| result.symbol.title.as_str()).collect()
    }

    pub(super) fn matched(results: &[MatchResult<'_>]) -> Vec<String> {
        results
            .iter()
            .map(|result| result.matched_substring.clone())
            .collect()
    }

    pub(super) fn tree() -> Vec<RawNode> {
        vec![
            RawNode::new("SlothCreator")
                .with_path("/documentation/slothcreator")
                .with_kind(NodeKind::topic("module"))
                .with_children(vec![
                    RawNode::group_marker("Essentials"),
                    RawNode::new("Sloth")
                        .with_path("/documentation/slothcreator/sloth")
                        .with_kind(NodeKind::topic("struct"))
                        .with_children(vec![
                            RawNode::group_marker("Creating a Sloth"),
                            RawNode::new("init(name:color:power:)")
                                .with_path("/documentation/slothcreator/sloth/init")
                                .with_kind(NodeKind::topic("init")),
                        ]),
                    RawNode::new("Care").with_children(vec![
                        RawNode::new("feed(_:)")
                            .with_path("/documentation/slothcreator/feed")
                            .with_kind(NodeKind::topic("func")),
                    ]),
                ]),
        ]
    }
}

mod fuzzy_match {
    use super::*;

    #[test]
    fn test_subsequence_filter_keeps_corpus_order() {
        let corpus = corpus_of(&["foo", "fobaro", "bar", "barfbarobarobar"]);

        let results = fuzzy_match(&corpus, "foo");

        assert_eq!(titles(&results), ["foo", "fobaro", "barfbarobarobar"]);
        assert_eq!(matched(&results), ["foo", "fobaro", "fbarobaro"]);
    }

    #[test]
    fn test_highlight_split() {
        let corpus = corpus_of(&["barfbarobarobar"]);

        let results = fuzzy_match(&corpus, "foo");

        let result = &results[0];
        assert_eq!(result.prefix, "bar");
        assert_eq!(result.matched_substring, "fbarobaro");
        assert_eq!(result.suffix, "bar");
        assert_eq!(result.to_string(), "bar[fbarobaro]bar");
    }

    #[test]
    fn test_minimum_window_is_shortest() {
        let corpus = corpus_of(&["foofooxyzbarbar"]);

        let results = fuzzy_match(&corpus, "foobar");

        assert_eq!(matched(&results), ["fooxyzbar"]);
        assert_eq!(results[0].prefix, "foo");
        assert_eq!(results[0].suffix, "bar");
    }

    #[test]
    fn test_title_equal_to_query() {
        let corpus = corpus_of(&["Sloth"]);

        let results = fuzzy_match(&corpus, "Sloth");

        assert_eq!(matched(&results), ["Sloth"]);
        assert!(results[0].prefix.is_empty());
        assert!(results[0].suffix.is_empty());
    }

    #[test]
    fn test_duplicate_paths_keep_first() {
        let corpus: SearchCorpus = [
            symbol("foo", "/foo"),
            symbol("food", "/foo"),
            symbol("foobar", "/bar"),
        ]
        .into_iter()
        .collect();

        let results = fuzzy_match(&corpus, "foo");

        assert_eq!(results.len(), 2);
        assert_eq!(titles(&results), ["foo", "foobar"]);
    }

    #[test]
    fn test_duplicate_path_after_non_match_is_kept() {
        let corpus: SearchCorpus = [symbol("bar", "/foo"), symbol("foo", "/foo")]
            .into_iter()
            .collect();

        let results = fuzzy_match(&corpus, "foo");

        assert_eq!(titles(&results), ["foo"]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let corpus = corpus_of(&["foo", "bar"]);

        assert!(fuzzy_match(&corpus, "").is_empty());
        assert!(fuzzy_match(&corpus, " \t ").is_empty());
    }

    #[test]
    fn test_whitespace_in_query_is_ignored() {
        let corpus = corpus_of(&["fooxbar"]);

        let results = fuzzy_match(&corpus, "foo bar");

        assert_eq!(matched(&results), ["fooxbar"]);
    }

    #[test]
    fn test_unknown_characters_match_nothing() {
        let corpus = corpus_of(&["foo", "bar"]);

        assert!(fuzzy_match(&corpus, "z").is_empty());
        assert!(fuzzy_match(&corpus, "oof").is_empty());
    }

    #[test]
    fn test_default_is_case_sensitive() {
        let corpus = corpus_of(&["Foo", "foo"]);

        let results = fuzzy_match(&corpus, "foo");

        assert_eq!(titles(&results), ["foo"]);
    }

    #[test]
    fn test_windows_count_chars_not_bytes() {
        let corpus = corpus_of(&["Größe über"]);

        let results = fuzzy_match(&corpus, "öü");

        assert_eq!(results[0].prefix, "Gr");
        assert_eq!(results[0].matched_substring, "öße ü");
        assert_eq!(results[0].suffix, "ber");
    }

    #[test]
    fn test_combining_marks_are_matched_as_chars() {
        let corpus = corpus_of(&["Cafe\u{301} menu", "नमस्ते"]);

        let accent = fuzzy_match(&corpus, "\u{301}");
        assert_eq!(titles(&accent), ["Cafe\u{301} menu"]);
        assert_eq!(accent[0].prefix, "Cafe");
        assert_eq!(accent[0].matched_substring, "\u{301}");
        assert_eq!(accent[0].suffix, " menu");

        let vowel_sign = fuzzy_match(&corpus, "\u{947}");
        assert_eq!(titles(&vowel_sign), ["नमस्ते"]);
        assert_eq!(vowel_sign[0].prefix, "नमस्त");

        let base_and_mark = fuzzy_match(&corpus, "e\u{301}m");
        assert_eq!(matched(&base_and_mark), ["e\u{301} m"]);
    }

    #[test]
    fn test_combining_marks_with_ignored_case() {
        let corpus = corpus_of(&["CAFE\u{301}"]);
        let config = SearchConfig {
            case_matching: CaseMatching::Insensitive,
            result_limit: None,
        };

        let results = fuzzy_match_with(&corpus, "fe\u{301}", &config);

        assert_eq!(matched(&results), ["FE\u{301}"]);
    }

    #[test]
    fn test_empty_corpus() {
        assert!(fuzzy_match(&SearchCorpus::default(), "foo").is_empty());
    }
}

mod fuzzy_match_with {
    use super::*;

    fn config(case_matching: CaseMatching) -> SearchConfig {
        SearchConfig {
            case_matching,
            result_limit: None,
        }
    }

    #[test]
    fn test_insensitive_keeps_original_case_in_highlight() {
        let corpus = corpus_of(&["SlothCreator"]);

        let results = fuzzy_match_with(&corpus, "sc", &config(CaseMatching::Insensitive));

        assert_eq!(results[0].prefix, "");
        assert_eq!(results[0].matched_substring, "SlothC");
        assert_eq!(results[0].suffix, "reator");
    }

    #[test]
    fn test_smart_lowercase_query_ignores_case() {
        let corpus = corpus_of(&["Foo", "foo"]);

        let results = fuzzy_match_with(&corpus, "foo", &config(CaseMatching::Smart));

        assert_eq!(titles(&results), ["Foo", "foo"]);
    }

    #[test]
    fn test_smart_uppercase_query_respects_case() {
        let corpus = corpus_of(&["Foo", "foo"]);

        let results = fuzzy_match_with(&corpus, "Foo", &config(CaseMatching::Smart));

        assert_eq!(titles(&results), ["Foo"]);
    }

    #[test]
    fn test_result_limit_applies_after_duplicates() {
        let corpus: SearchCorpus = [
            symbol("foo", "/foo"),
            symbol("foo again", "/foo"),
            symbol("foobar", "/bar"),
            symbol("foobaz", "/baz"),
        ]
        .into_iter()
        .collect();
        let config = SearchConfig {
            result_limit: Some(2),
            ..SearchConfig::default()
        };

        let results = fuzzy_match_with(&corpus, "foo", &config);

        assert_eq!(titles(&results), ["foo", "foobar"]);
    }
}

mod minimum_window {
    use crate::matcher::minimum_window;

    fn window(text: &str, query: &str) -> Option<String> {
        let text: Vec<char> = text.chars().collect();
        let query: Vec<char> = query.chars().collect();
        minimum_window(&text, &query).map(|range| text[range].iter().collect())
    }

    #[test]
    fn test_earliest_window_wins_ties() {
        assert_eq!(window("axbayb", "ab").as_deref(), Some("axb"));
        assert_eq!(window("fxoofyoo", "foo").as_deref(), Some("fxoo"));
    }

    #[test]
    fn test_later_shorter_window_wins() {
        assert_eq!(window("axxbab", "ab").as_deref(), Some("ab"));
        assert_eq!(window("fxxoxxofoo", "foo").as_deref(), Some("foo"));
    }

    #[test]
    fn test_no_window() {
        assert_eq!(window("ba", "ab"), None);
        assert_eq!(window("a", "aa"), None);
        assert_eq!(window("abc", ""), None);
    }

    #[test]
    fn test_repeated_characters() {
        assert_eq!(window("aaaa", "aa").as_deref(), Some("aa"));
    }
}

mod corpus {
    use super::*;

    #[test]
    fn test_build_collects_paths_in_pre_order() {
        let corpus = SearchCorpus::build(&common::tree());

        let titles: Vec<_> = corpus.iter().map(|symbol| symbol.title.as_str()).collect();
        assert_eq!(
            titles,
            ["SlothCreator", "Sloth", "init(name:color:power:)", "feed(_:)"]
        );
    }

    #[test]
    fn test_build_records_breadcrumbs() {
        let corpus = SearchCorpus::build(&common::tree());

        let init = &corpus.symbols()[2];
        assert_eq!(init.ancestor_breadcrumbs, ["SlothCreator", "Sloth"]);
        assert_eq!(init.relative_path(), "SlothCreator > Sloth");
        assert_eq!(init.kind, NodeKind::topic("init"));

        // Nodes without a path still appear as ancestors.
        let feed = &corpus.symbols()[3];
        assert_eq!(feed.relative_path(), "SlothCreator > Care");

        assert!(corpus.symbols()[0].relative_path().is_empty());
    }

    #[test]
    fn test_from_navigator_matches_build() {
        let tree = common::tree();
        let navigator = NavigatorIndex::from_roots(&tree);

        assert_eq!(SearchCorpus::from_navigator(&navigator), SearchCorpus::build(&tree));
    }

    #[test]
    fn test_build_empty() {
        assert!(SearchCorpus::build(&[]).is_empty());
    }
}

mod engine {
    use super::*;

    #[test]
    fn test_search_uses_config() {
        let quick_navigation = QuickNavigationConfig {
            case_matching: CaseMatching::Insensitive,
            max_results: 1,
        };
        let config = SearchConfig::from(&quick_navigation);
        let engine = SearchEngine::new(corpus_of(&["Foo", "foo"]), config);

        let results = engine.search(&SearchQuery::Fuzzy("FOO".to_string()));

        assert_eq!(results.len(), 1);
        assert_eq!(results.iter().next().unwrap().symbol.title, "Foo");
    }

    #[test]
    fn test_replace_corpus() {
        let mut engine = SearchEngine::new(corpus_of(&["foo"]), SearchConfig::default());
        assert_eq!(engine.search(&SearchQuery::Fuzzy("foo".to_string())).len(), 1);

        engine.replace_corpus(corpus_of(&["bar"]));

        assert!(engine.search(&SearchQuery::Fuzzy("foo".to_string())).is_empty());
        assert_eq!(engine.search(&SearchQuery::Fuzzy("bar".to_string())).len(), 1);
    }

    #[test]
    fn test_search_is_repeatable() {
        let engine = SearchEngine::new(corpus_of(&["foo", "fobaro"]), SearchConfig::default());
        let query = SearchQuery::Fuzzy("fo o".to_string());

        let first = engine.search(&query);
        let second = engine.search(&query);

        assert_eq!(first, second);
        assert_eq!(query.normalized(), "foo");
    }
}

mod config {
    use super::*;

    #[test]
    fn test_from_quick_navigation_config() {
        let unlimited = QuickNavigationConfig::default();
        assert_eq!(SearchConfig::from(&unlimited), SearchConfig::default());

        let limited = QuickNavigationConfig {
            case_matching: CaseMatching::Smart,
            max_results: 5,
        };
        let config = SearchConfig::from(&limited);
        assert_eq!(config.case_matching, CaseMatching::Smart);
        assert_eq!(config.result_limit, Some(5));
    }
}
