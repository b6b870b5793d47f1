//! Documentation navigator index.
//!
//! Turns the nested documentation tree of an `index.json` into flat,
//! uid-addressed entries for a virtualized navigator list.

pub mod error;
pub mod filter;
pub mod flatten;
pub mod hash;
pub mod index_data;
pub mod navigator;
pub mod store;
pub mod types;

pub use error::{ConfigError, Error, Result};
pub use filter::{FilterTag, NavigatorFilter, filter_children};
pub use flatten::{flatten, flatten_with_parent_beta};
pub use hash::hash_code;
pub use index_data::{
    IndexDocument, InterfaceLanguages, TechnologyProps, extract_technology_props,
    find_technology, flatten_navigation_index,
};
pub use navigator::NavigatorIndex;
pub use store::{IndexSnapshot, IndexStore};
