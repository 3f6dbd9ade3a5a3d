//! Tree flattener and indexer
//!
//! Flat projections of the component tree for list UIs, id lookup with a
//! hierarchical fallback, and rebuilding a display tree from a flat list.

pub mod build;
pub mod flatten;
pub mod lookup;

pub use build::{build_tree, TreeNode};
pub use flatten::{flatten, flatten_with_attributes};
pub use lookup::{decode_hierarchical_id, find_by_id};
