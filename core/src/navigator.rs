//! Random access over a flat index.
//!
//! The flat entry vector is the arena: entries refer to each other through
//! uids only, and `positions` maps a uid to its slot in O(1).

use crate::flatten::flatten;
use crate::types::{FlatIndexEntry, ParentUid, RawNode, Uid};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default)]
pub struct NavigatorIndex {
    entries: Vec<FlatIndexEntry>,
    positions: HashMap<Uid, usize>,
}

/// Create operations.
impl NavigatorIndex {
    /// Wraps a flat index. On a uid collision the first entry wins.
    pub fn new(entries: Vec<FlatIndexEntry>) -> Self {
        let mut positions = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            if let Some(first) = positions.get(&entry.uid) {
                tracing::warn!(
                    uid = %entry.uid,
                    first = *first,
                    duplicate = position,
                    "uid collision in navigator index, keeping first entry"
                );
                continue;
            }
            positions.insert(entry.uid, position);
        }

        Self { entries, positions }
    }

    pub fn from_roots(roots: &[RawNode]) -> Self {
        Self::new(flatten(roots))
    }
}

/// Lookup operations.
impl NavigatorIndex {
    pub fn entries(&self) -> &[FlatIndexEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<FlatIndexEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot of `uid` in the flat list, i.e. its row in the navigator.
    pub fn position(&self, uid: Uid) -> Option<usize> {
        self.positions.get(&uid).copied()
    }

    pub fn get(&self, uid: Uid) -> Option<&FlatIndexEntry> {
        self.position(uid).map(|position| &self.entries[position])
    }

    fn resolve(&self, uids: &[Uid]) -> Vec<&FlatIndexEntry> {
        uids.iter().filter_map(|uid| self.get(*uid)).collect()
    }
}

/// Traversal operations.
impl NavigatorIndex {
    /// Direct children of `parent`, in tree order.
    pub fn children(&self, parent: ParentUid) -> Vec<&FlatIndexEntry> {
        match parent {
            ParentUid::Root => self
                .entries
                .iter()
                .filter(|entry| entry.parent.is_root())
                .collect(),
            ParentUid::Node(uid) => self
                .get(uid)
                .map(|entry| self.resolve(&entry.child_uids))
                .unwrap_or_default(),
        }
    }

    /// The entry itself followed by all of its descendants, in pre-order.
    pub fn all_children(&self, uid: Uid) -> Vec<&FlatIndexEntry> {
        let mut collected = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![uid];

        while let Some(current) = stack.pop() {
            // Colliding uids could otherwise loop forever.
            if !seen.insert(current) {
                continue;
            }
            let Some(entry) = self.get(current) else {
                continue;
            };
            collected.push(entry);
            stack.extend(entry.child_uids.iter().rev());
        }

        collected
    }

    /// Ancestors of the entry from the top level down, ending with the entry
    /// itself. Empty if the entry or any ancestor is missing.
    pub fn parents(&self, uid: Uid) -> Vec<&FlatIndexEntry> {
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut current = ParentUid::Node(uid);

        while let ParentUid::Node(uid) = current {
            if !seen.insert(uid) {
                break;
            }
            let Some(entry) = self.get(uid) else {
                return Vec::new();
            };
            chain.push(entry);
            current = entry.parent;
        }

        chain.reverse();
        chain
    }

    /// All children of the entry's parent, the entry included.
    pub fn siblings(&self, uid: Uid) -> Vec<&FlatIndexEntry> {
        self.get(uid)
            .map(|entry| self.children(entry.parent))
            .unwrap_or_default()
    }

    /// Entries labelled by a group marker.
    pub fn group_members(&self, uid: Uid) -> Vec<&FlatIndexEntry> {
        self.get(uid)
            .map(|entry| self.resolve(&entry.group_member_uids))
            .unwrap_or_default()
    }
}
