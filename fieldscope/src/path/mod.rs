//! Field path handling.
//!
//! This module provides the types used to address nodes in a field tree:
//! dot-segmented paths and the relationships between them.
//!
//! # Path Model
//!
//! Every node in a field tree is uniquely identified by its path: the
//! ordered sequence of key segments from the tree root down to the node.
//! The dot-joined form (`"image.tag"`) doubles as the key in the flat
//! canonical representation.

mod relationship;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use types::FieldPath;
