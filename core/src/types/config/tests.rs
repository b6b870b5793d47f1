use super::*;
use tempfile::TempDir;

#[test]
fn default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_empty());
    assert_eq!(config.index.fallback_language, "swift");
    assert_eq!(config.quick_navigation.case_matching, CaseMatching::Sensitive);
    assert_eq!(config.quick_navigation.result_limit(), None);
}

#[test]
fn load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = AppConfig::load(&AppConfig::path(temp.path())).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn save_then_load_preserves_values() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    let config = AppConfig {
        index: IndexConfig {
            fallback_language: "occ".to_string(),
        },
        quick_navigation: QuickNavigationConfig {
            case_matching: CaseMatching::Smart,
            max_results: 25,
        },
    };

    config.save(&path).unwrap();
    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded, config);
    assert_eq!(loaded.quick_navigation.result_limit(), Some(25));
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    std::fs::write(&path, "[quick_navigation]\ncase_matching = \"insensitive\"\n").unwrap();

    let loaded = AppConfig::load(&path).unwrap();

    assert_eq!(loaded.index.fallback_language, "swift");
    assert_eq!(loaded.quick_navigation.case_matching, CaseMatching::Insensitive);
    assert_eq!(loaded.quick_navigation.max_results, 0);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = AppConfig::path(temp.path());
    std::fs::write(&path, "[quick_navigation]\ncase_matching = \"loud\"\n").unwrap();

    let result = AppConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn empty_fallback_language_is_reported_and_replaced() {
    let mut config = AppConfig::default();
    config.index.fallback_language = "  ".to_string();

    assert_eq!(config.validate().len(), 1);

    let fixed = config.with_defaults_for_invalid();
    assert!(fixed.validate().is_empty());
    assert_eq!(fixed.index.fallback_language, "swift");
}
