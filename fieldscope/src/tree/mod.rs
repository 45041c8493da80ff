//! The field tree model and path resolver.
//!
//! A tree is an ordered sequence of root [`FieldNode`]s, one per top-level
//! field of a template. Object nodes nest further nodes through their
//! `children`; arrays and scalars are leaves. Every node carries two
//! independent boolean facets (`exposed`, `overridable`) plus the
//! provenance of its current value (`source`).
//!
//! Trees are never mutated in place: every update produces a new tree,
//! rebuilding only the branch that contains the addressed node (see
//! [`update_by_path`]).

mod node;
mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use node::{FieldNode, FieldType, ValueSource};
pub use resolver::{
    collect_paths, contains_path, find_by_path, update_by_path, update_subtree, walk,
};
