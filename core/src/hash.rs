//! Deterministic identifiers for navigator entries.

use crate::types::{ParentUid, RawNode, Uid};

/// Polynomial rolling hash, `h * 31 + unit`, over the UTF-16 code units of
/// `key` with 32-bit two's-complement wraparound.
///
/// Hashing UTF-16 rather than bytes keeps the values identical to the ones the
/// browser renderer computes for the same key.
pub fn hash_code(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Key unique to a node's position in the tree: `{parent}+{path}_{depth}_{index}`.
///
/// Nodes without a path (group markers, some grouped leaves) use their title.
pub fn positional_key(parent: ParentUid, node: &RawNode, depth: usize, index: usize) -> String {
    format!("{parent}+{}_{depth}_{index}", node.path_or_title())
}

pub fn node_uid(parent: ParentUid, node: &RawNode, depth: usize, index: usize) -> Uid {
    Uid::new(hash_code(&positional_key(parent, node, depth, index)))
}
