//! The flat, path-keyed canonical representation.
//!
//! The canonical configuration is the second of the two interchangeable
//! representations of a field tree: a mapping from dot-joined path strings
//! to flattened [`FieldConfiguration`] records, with a distinguished
//! `"root"` entry standing in for the synthetic top-level container.
//!
//! Conversion in either direction is pure and total; `to_tree(to_canonical(t))`
//! is observationally equal to `t` on every facet of every node. Malformed
//! canonical maps (missing root, orphaned paths) are tolerated rather than
//! rejected: orphans become additional roots and the defects are reported
//! as [`Diagnostic`]s.

mod config;
mod convert;
mod merge;
mod propagate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use config::{
    CanonicalConfiguration, FieldConfiguration, FieldProperty, FieldStructure, ROOT_KEY,
};
pub use convert::{to_canonical, to_tree, Diagnostic, TreeConversion};
pub use merge::merge;
pub use propagate::{normalize_canonical, set_facet_canonical};
