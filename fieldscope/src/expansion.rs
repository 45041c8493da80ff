//! Expansion state for presenting a field tree.
//!
//! Tracks which container paths are currently expanded. The state is kept
//! separate from the tree itself so structural edits never disturb it, and
//! it is re-validated against the tree after edits that can remove nodes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::path::FieldPath;
use crate::tree::{contains_path, FieldNode};

/// The set of expanded container paths.
///
/// Paths are stored in their dot-joined string form. A path absent from
/// the set is collapsed; an empty state means everything is collapsed.
///
/// # Examples
///
/// ```
/// use fieldscope::{ExpansionState, FieldPath};
///
/// let mut state = ExpansionState::new();
/// let image = FieldPath::parse("image").unwrap();
/// state.toggle(&image);
/// assert!(state.is_expanded(&image));
/// state.toggle(&image);
/// assert!(!state.is_expanded(&image));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// Creates a fully-collapsed state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `path` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, path: &FieldPath) -> bool {
        self.expanded.contains(&path.to_string())
    }

    /// Flips the expansion of `path`.
    ///
    /// Collapsing a path also drops every expanded descendant, so
    /// re-expanding later starts from a collapsed sub-tree.
    pub fn toggle(&mut self, path: &FieldPath) {
        let key = path.to_string();
        if self.expanded.remove(&key) {
            let prefix = format!("{key}.");
            self.expanded.retain(|entry| !entry.starts_with(&prefix));
        } else {
            self.expanded.insert(key);
        }
    }

    /// Expands every strict ancestor of `path`, so the path itself becomes
    /// visible without changing its own expansion.
    pub fn expand_ancestors(&mut self, path: &FieldPath) {
        for ancestor in path.ancestors() {
            self.expanded.insert(ancestor.to_string());
        }
    }

    /// Drops expanded paths that no longer exist in `tree`.
    ///
    /// Called after edits that can remove or rename nodes, keeping the
    /// state from accumulating stale entries.
    pub fn validate(&mut self, tree: &[FieldNode]) {
        self.expanded.retain(|entry| {
            FieldPath::parse(entry)
                .map(|path| contains_path(tree, &path))
                .unwrap_or(false)
        });
    }

    /// Number of expanded paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether everything is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterates the expanded paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
