use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Navigator configuration, persisted as docnav.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub quick_navigation: QuickNavigationConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("docnav.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.index.fallback_language.trim().is_empty() {
            errors.push("fallback_language must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            index: IndexConfig {
                fallback_language: if self.index.fallback_language.trim().is_empty() {
                    defaults.index.fallback_language
                } else {
                    self.index.fallback_language.clone()
                },
            },
            quick_navigation: self.quick_navigation.clone(),
        }
    }
}

/// Index loading settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Interface language used when the requested variant has no index.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            fallback_language: default_fallback_language(),
        }
    }
}

fn default_fallback_language() -> String {
    "swift".to_string()
}

/// Quick navigation settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickNavigationConfig {
    #[serde(default)]
    pub case_matching: CaseMatching,
    /// Maximum number of matches returned. 0 means unlimited.
    #[serde(default)]
    pub max_results: usize,
}

impl QuickNavigationConfig {
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

/// Case matching behavior for quick navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    #[default]
    Sensitive,
    Insensitive,
    /// Case-insensitive unless the query contains uppercase.
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

#[cfg(test)]
mod tests;
