use nutype::nutype;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Parent key of top-level entries.
///
/// It is a string, so it can never collide with a hashed uid.
pub const ROOT_KEY: &str = "<root>";

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
))]
pub struct Uid(i32);

/// Parent of a flat entry: either the synthetic root or another entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParentUid {
    #[default]
    Root,
    Node(Uid),
}

impl ParentUid {
    pub fn uid(self) -> Option<Uid> {
        match self {
            ParentUid::Root => None,
            ParentUid::Node(uid) => Some(uid),
        }
    }

    pub fn is_root(self) -> bool {
        matches!(self, ParentUid::Root)
    }
}

impl From<Uid> for ParentUid {
    fn from(uid: Uid) -> Self {
        ParentUid::Node(uid)
    }
}

impl fmt::Display for ParentUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParentUid::Root => f.write_str(ROOT_KEY),
            ParentUid::Node(uid) => write!(f, "{uid}"),
        }
    }
}

impl Serialize for ParentUid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParentUid::Root => serializer.serialize_str(ROOT_KEY),
            ParentUid::Node(uid) => uid.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParentUid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Uid(i32),
            Key(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Uid(value) => Ok(ParentUid::Node(Uid::new(value))),
            Repr::Key(key) if key == ROOT_KEY => Ok(ParentUid::Root),
            Repr::Key(key) => Err(de::Error::custom(format!(
                "expected a uid or \"{ROOT_KEY}\", found \"{key}\""
            ))),
        }
    }
}
