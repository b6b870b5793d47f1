use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Topic type string that marks a section header.
pub const GROUP_MARKER: &str = "groupMarker";

/// Kind of a documentation node, read from the `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// Non-navigable header labelling the siblings that follow it.
    GroupMarker,
    /// Any other topic type (`article`, `class`, `method`, ...).
    Topic(String),
}

impl NodeKind {
    pub fn topic(kind: impl Into<String>) -> Self {
        Self::from(kind.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::GroupMarker => GROUP_MARKER,
            NodeKind::Topic(kind) => kind,
        }
    }

    pub fn is_group_marker(&self) -> bool {
        matches!(self, NodeKind::GroupMarker)
    }
}

impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Topic(String::new())
    }
}

impl From<String> for NodeKind {
    fn from(kind: String) -> Self {
        if kind == GROUP_MARKER {
            NodeKind::GroupMarker
        } else {
            NodeKind::Topic(kind)
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::GroupMarker => GROUP_MARKER.to_string(),
            NodeKind::Topic(kind) => kind,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the server-supplied documentation tree.
///
/// Every field is optional on the wire. Missing flags read as `false`, a
/// missing path marks the node as non-navigable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNode {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub deprecated: bool,
    #[serde(skip_serializing_if = "is_false", deserialize_with = "null_as_default")]
    pub beta: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub children: Vec<RawNode>,
}

/// Builder helpers.
impl RawNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn group_marker(title: impl Into<String>) -> Self {
        Self::new(title).with_kind(NodeKind::GroupMarker)
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_children(mut self, children: Vec<RawNode>) -> Self {
        self.children = children;
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    pub fn beta(mut self, beta: bool) -> Self {
        self.beta = beta;
        self
    }
}

impl RawNode {
    /// Path of the node, or its title for non-navigable nodes.
    pub fn path_or_title(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.title)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(RawNode::subtree_len).sum::<usize>()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
