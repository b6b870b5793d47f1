pub(crate) mod config;
pub use config::{AppConfig, CaseMatching, IndexConfig, QuickNavigationConfig};

pub(crate) mod uid;
pub use uid::{ParentUid, ROOT_KEY, Uid};

pub(crate) mod node;
pub use node::{GROUP_MARKER, NodeKind, RawNode};

pub(crate) mod change;
pub use change::{ApiChanges, ChangeType};

pub(crate) mod entry;
pub use entry::FlatIndexEntry;
