use docnav_core::types::{CaseMatching, QuickNavigationConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Maximum number of matches returned, counted after duplicate paths are
    /// removed. `None` means unlimited.
    pub result_limit: Option<usize>,
}

impl SearchConfig {
    /// Whether `query` should be compared ignoring case.
    pub(crate) fn ignores_case(&self, query: &str) -> bool {
        match self.case_matching {
            CaseMatching::Sensitive => false,
            CaseMatching::Insensitive => true,
            CaseMatching::Smart => !query.chars().any(char::is_uppercase),
        }
    }
}

impl From<&QuickNavigationConfig> for SearchConfig {
    fn from(config: &QuickNavigationConfig) -> Self {
        Self {
            case_matching: config.case_matching,
            result_limit: config.result_limit(),
        }
    }
}
