use super::{NodeKind, ParentUid, Uid};
use serde::{Deserialize, Serialize};

/// One row of the flat navigator index.
///
/// Field names on the wire follow the renderer's camelCase convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatIndexEntry {
    pub uid: Uid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Distance from the synthetic root; top-level entries have depth 0.
    pub depth: usize,
    pub parent: ParentUid,
    /// Position among the immediate siblings, group markers included.
    pub index: usize,
    pub siblings_count: usize,
    #[serde(rename = "childUIDs")]
    pub child_uids: Vec<Uid>,
    /// Nearest preceding group marker at the same level.
    #[serde(rename = "groupMarkerUID", default, skip_serializing_if = "Option::is_none")]
    pub group_marker_uid: Option<Uid>,
    /// Siblings labelled by this group marker. Empty for other kinds.
    #[serde(rename = "groupMemberUIDs", default, skip_serializing_if = "Vec::is_empty")]
    pub group_member_uids: Vec<Uid>,
    /// Deprecated group members. Only set on group markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated_children_count: Option<usize>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deprecated: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub beta: bool,
}

impl FlatIndexEntry {
    pub fn is_group_marker(&self) -> bool {
        self.kind.is_group_marker()
    }

    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }

    /// Whether the entry should be treated as deprecated when filtering.
    ///
    /// A group marker counts as deprecated once every member it labels is.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated
            || self
                .deprecated_children_count
                .is_some_and(|count| count == self.group_member_uids.len())
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
