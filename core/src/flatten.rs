//! Pre-order flattening of the documentation tree.
//!
//! A single depth-first walk assigns uids, records depth and sibling position,
//! tracks the current group marker of every level, counts deprecated group
//! members and resolves `beta` against the direct parent. Per-level state is
//! carried in call parameters and local accumulators; nothing is shared
//! between calls.

use crate::hash::node_uid;
use crate::types::{FlatIndexEntry, ParentUid, RawNode, Uid};

/// Flattens `roots` into a pre-order list of entries.
pub fn flatten(roots: &[RawNode]) -> Vec<FlatIndexEntry> {
    flatten_with_parent_beta(roots, false)
}

/// Flattens `roots` as the children of a node whose original `beta` flag is
/// `parent_beta`, typically the technology node the tree belongs to.
pub fn flatten_with_parent_beta(roots: &[RawNode], parent_beta: bool) -> Vec<FlatIndexEntry> {
    let capacity = roots.iter().map(RawNode::subtree_len).sum();
    let mut flattener = Flattener {
        entries: Vec::with_capacity(capacity),
    };

    flattener.visit_level(roots, ParentUid::Root, 0, parent_beta);

    let entries = flattener.entries;
    tracing::debug!(
        entries = entries.len(),
        max_depth = entries.iter().map(|entry| entry.depth).max().unwrap_or(0),
        "flattened navigator tree"
    );
    entries
}

struct Flattener {
    entries: Vec<FlatIndexEntry>,
}

/// Group marker whose members are still being visited.
struct OpenGroup {
    position: usize,
    uid: Uid,
    members: Vec<Uid>,
    deprecated: usize,
}

impl OpenGroup {
    fn new(position: usize, uid: Uid) -> Self {
        Self {
            position,
            uid,
            members: Vec::new(),
            deprecated: 0,
        }
    }

    /// Records a member and returns the marker uid it belongs to.
    fn admit(&mut self, member: Uid, deprecated: bool) -> Uid {
        self.members.push(member);
        if deprecated {
            self.deprecated += 1;
        }
        self.uid
    }
}

impl Flattener {
    /// Visits one sibling list and returns the uids of its nodes in order.
    fn visit_level(
        &mut self,
        siblings: &[RawNode],
        parent: ParentUid,
        depth: usize,
        parent_beta: bool,
    ) -> Vec<Uid> {
        let mut uids = Vec::with_capacity(siblings.len());
        let mut group: Option<OpenGroup> = None;

        for (index, node) in siblings.iter().enumerate() {
            let uid = node_uid(parent, node, depth, index);
            let position = self.entries.len();
            let is_marker = node.kind.is_group_marker();

            let group_marker_uid = if is_marker {
                if let Some(previous) = group.replace(OpenGroup::new(position, uid)) {
                    self.close_group(previous);
                }
                None
            } else {
                group
                    .as_mut()
                    .map(|open| open.admit(uid, node.deprecated))
            };

            self.entries.push(FlatIndexEntry {
                uid,
                title: node.title.clone(),
                path: node.path.clone(),
                kind: node.kind.clone(),
                depth,
                parent,
                index,
                siblings_count: siblings.len(),
                child_uids: Vec::new(),
                group_marker_uid,
                group_member_uids: Vec::new(),
                deprecated_children_count: is_marker.then_some(0),
                deprecated: node.deprecated,
                // A beta parent already carries the badge.
                beta: node.beta && !parent_beta,
            });

            if !node.children.is_empty() {
                let child_uids =
                    self.visit_level(&node.children, ParentUid::Node(uid), depth + 1, node.beta);
                self.entries[position].child_uids = child_uids;
            }

            uids.push(uid);
        }

        if let Some(open) = group {
            self.close_group(open);
        }

        uids
    }

    fn close_group(&mut self, group: OpenGroup) {
        let marker = &mut self.entries[group.position];
        marker.deprecated_children_count = Some(group.deprecated);
        marker.group_member_uids = group.members;
    }
}
