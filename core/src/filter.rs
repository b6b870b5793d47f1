//! Navigator sidebar filtering by title pattern, topic tags and API changes.

use crate::error::Result;
use crate::types::{ApiChanges, ChangeType, FlatIndexEntry};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;
use std::sync::Arc;

/// Tags offered by the navigator filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterTag {
    SampleCode,
    Tutorials,
    Articles,
    WebServiceEndpoints,
    /// Keeps every entry that is not deprecated.
    HideDeprecated,
    Added,
    Modified,
    Deprecated,
}

impl FilterTag {
    /// Tag a topic type is listed under, if any.
    pub fn for_kind(kind: &str) -> Option<Self> {
        match kind {
            "article" => Some(FilterTag::Articles),
            "learn" | "overview" | "resources" | "section" | "tutorial" | "project" => {
                Some(FilterTag::Tutorials)
            }
            "sampleCode" => Some(FilterTag::SampleCode),
            "httpRequest" => Some(FilterTag::WebServiceEndpoints),
            _ => None,
        }
    }

    pub fn for_change(change: ChangeType) -> Self {
        match change {
            ChangeType::Added => FilterTag::Added,
            ChangeType::Modified => FilterTag::Modified,
            ChangeType::Deprecated => FilterTag::Deprecated,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NavigatorFilter {
    pub pattern: Option<Regex>,
    pub tags: HashSet<FilterTag>,
    /// When set, only entries listed here pass, and change tags match
    /// against the listed change.
    pub api_changes: Option<Arc<ApiChanges>>,
}

impl NavigatorFilter {
    /// Filter matching titles that contain `text`, ignoring case.
    pub fn with_text(text: &str) -> Result<Self> {
        let pattern = if text.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&regex::escape(text))
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self {
            pattern,
            ..Self::default()
        })
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = FilterTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_api_changes(mut self, api_changes: Option<Arc<ApiChanges>>) -> Self {
        self.api_changes = api_changes;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_none() && self.tags.is_empty() && self.api_changes.is_none()
    }

    pub fn matches(&self, entry: &FlatIndexEntry) -> bool {
        let title_match = self
            .pattern
            .as_ref()
            .is_none_or(|pattern| pattern.is_match(&entry.title));

        let change = self.change_of(entry);
        let tag_match = self.tags.is_empty()
            || (self.tags.contains(&FilterTag::HideDeprecated) && !entry.is_deprecated())
            || FilterTag::for_kind(entry.kind.as_str()).is_some_and(|tag| self.tags.contains(&tag))
            || change.is_some_and(|change| self.tags.contains(&FilterTag::for_change(change)));

        // Group markers have no path, so they never pass a change list.
        let has_changes = self.api_changes.is_none() || change.is_some();

        title_match && tag_match && has_changes
    }

    fn change_of(&self, entry: &FlatIndexEntry) -> Option<ChangeType> {
        let changes = self.api_changes.as_ref()?;
        changes.get(entry.path.as_deref()?).copied()
    }
}

/// Entries that pass `filter`, in their original order.
pub fn filter_children<'a>(
    entries: impl IntoIterator<Item = &'a FlatIndexEntry>,
    filter: &NavigatorFilter,
) -> Vec<&'a FlatIndexEntry> {
    entries
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}
