//! Navigator state shared between the fetcher and readers.
//!
//! Each fetch builds a complete [`IndexSnapshot`] off to the side and then
//! swaps it in. Readers clone the `Arc` and never observe a partially built
//! index.

use crate::index_data::{
    IndexDocument, TechnologyProps, extract_technology_props, flatten_navigation_index,
};
use crate::navigator::NavigatorIndex;
use crate::types::ApiChanges;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    pub flat_children: BTreeMap<String, Arc<NavigatorIndex>>,
    pub technology_props: BTreeMap<String, TechnologyProps>,
    pub references: serde_json::Map<String, serde_json::Value>,
    pub included_archive_identifiers: Vec<String>,
    pub error_fetching: bool,
    /// Changes against a compared archive version, when one is selected.
    pub api_changes: Option<Arc<ApiChanges>>,
}

impl IndexSnapshot {
    pub fn from_document(document: &IndexDocument) -> Self {
        let flat_children = flatten_navigation_index(&document.interface_languages)
            .into_iter()
            .map(|(language, entries)| (language, Arc::new(NavigatorIndex::new(entries))))
            .collect();

        Self {
            flat_children,
            technology_props: extract_technology_props(&document.interface_languages),
            references: document.references.clone(),
            included_archive_identifiers: document.included_archive_identifiers.clone(),
            error_fetching: false,
            api_changes: None,
        }
    }

    /// Navigator for `language`, or for `fallback` if that variant is missing.
    pub fn navigator(&self, language: &str, fallback: &str) -> Option<&Arc<NavigatorIndex>> {
        self.flat_children
            .get(language)
            .or_else(|| self.flat_children.get(fallback))
    }

    pub fn technology_props_for(&self, language: &str, fallback: &str) -> Option<&TechnologyProps> {
        self.technology_props
            .get(language)
            .or_else(|| self.technology_props.get(fallback))
    }
}

#[derive(Debug, Default)]
pub struct IndexStore {
    state: RwLock<Arc<IndexSnapshot>>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state. Holding the returned `Arc` pins that version.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.state.read().clone()
    }

    /// Builds a snapshot from `document` and replaces the current one.
    pub fn publish(&self, document: &IndexDocument) -> Arc<IndexSnapshot> {
        let snapshot = Arc::new(IndexSnapshot::from_document(document));
        tracing::debug!(
            languages = snapshot.flat_children.len(),
            references = snapshot.references.len(),
            "publishing navigator index"
        );
        *self.state.write() = Arc::clone(&snapshot);
        snapshot
    }

    /// Replaces the API changes of the current snapshot, keeping its index.
    pub fn set_api_changes(&self, api_changes: Option<ApiChanges>) {
        let mut state = self.state.write();
        let mut next = IndexSnapshot::clone(&state);
        tracing::debug!(
            changes = api_changes.as_ref().map_or(0, |changes| changes.len()),
            "setting api changes"
        );
        next.api_changes = api_changes.map(Arc::new);
        *state = Arc::new(next);
    }

    pub fn reset(&self) {
        *self.state.write() = Arc::default();
    }

    /// Replaces the state with an empty one flagged as failed.
    pub fn set_error_fetching(&self) {
        *self.state.write() = Arc::new(IndexSnapshot {
            error_fetching: true,
            ..IndexSnapshot::default()
        });
    }
}
