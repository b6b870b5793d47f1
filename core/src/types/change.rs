use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// API changes between two versions of a documentation archive, keyed by
/// topic path.
pub type ApiChanges = HashMap<String, ChangeType>;

/// How a symbol changed relative to the compared version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Modified,
    Deprecated,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Added => write!(f, "added"),
            ChangeType::Modified => write!(f, "modified"),
            ChangeType::Deprecated => write!(f, "deprecated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_deserialize_from_lowercase_names() {
        let changes: ApiChanges = serde_json::from_str(
            r#"{ "/documentation/foo": "added", "/documentation/foo/bar": "deprecated" }"#,
        )
        .unwrap();

        assert_eq!(changes["/documentation/foo"], ChangeType::Added);
        assert_eq!(changes["/documentation/foo/bar"], ChangeType::Deprecated);
        assert!(serde_json::from_str::<ChangeType>(r#""removed""#).is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ChangeType::Modified.to_string(), "modified");
    }
}
