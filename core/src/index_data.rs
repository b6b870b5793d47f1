//! The `index.json` document served alongside a documentation archive.

use crate::error::Result;
use crate::flatten::flatten_with_parent_beta;
use crate::types::{FlatIndexEntry, RawNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;

/// Raw trees keyed by interface language (`swift`, `occ`, ...).
pub type InterfaceLanguages = BTreeMap<String, Vec<RawNode>>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexDocument {
    pub interface_languages: InterfaceLanguages,
    pub references: serde_json::Map<String, serde_json::Value>,
    pub included_archive_identifiers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<serde_json::Value>,
}

impl IndexDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.interface_languages.keys().map(String::as_str)
    }
}

/// Header information about the technology a navigator shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyProps {
    pub technology: String,
    pub technology_path: Option<String>,
    pub is_technology_beta: bool,
}

impl From<&RawNode> for TechnologyProps {
    fn from(node: &RawNode) -> Self {
        Self {
            technology: node.title.clone(),
            technology_path: node.path.clone(),
            is_technology_beta: node.beta,
        }
    }
}

/// Flattens the children of each language's technology node.
///
/// The technology is the first top-level node; languages without one are
/// left out. The technology's own `beta` flag suppresses the flag on its
/// top-level children.
pub fn flatten_navigation_index(
    languages: &InterfaceLanguages,
) -> BTreeMap<String, Vec<FlatIndexEntry>> {
    languages
        .iter()
        .filter_map(|(language, nodes)| {
            let technology = nodes.first()?;
            let entries = flatten_with_parent_beta(&technology.children, technology.beta);
            tracing::debug!(%language, entries = entries.len(), "flattened language variant");
            Some((language.clone(), entries))
        })
        .collect()
}

pub fn extract_technology_props(
    languages: &InterfaceLanguages,
) -> BTreeMap<String, TechnologyProps> {
    languages
        .iter()
        .filter_map(|(language, nodes)| {
            nodes
                .first()
                .map(|technology| (language.clone(), TechnologyProps::from(technology)))
        })
        .collect()
}

/// Top-level node whose path shares the technology root of `path`.
///
/// The technology root is the first two path segments, compared ignoring
/// case: `/documentation/foo/bar` belongs to `/documentation/foo`.
pub fn find_technology<'a>(nodes: &'a [RawNode], path: &str) -> Option<&'a RawNode> {
    let wanted = technology_root(path)?;
    nodes.iter().find(|node| {
        node.path
            .as_deref()
            .and_then(technology_root)
            .is_some_and(|root| root == wanted)
    })
}

fn technology_root(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());
    let kind = segments.next()?;
    let name = segments.next()?;
    Some(format!("/{kind}/{name}").to_lowercase())
}
