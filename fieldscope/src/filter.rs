//! Structure-preserving filtering and search.
//!
//! A filter combines an optional case-insensitive substring query over a
//! node's key, display name, and path string with optional boolean
//! predicates over its facets. Filtering never breaks tree structure: an
//! ancestor is retained whenever any descendant matches, even if the
//! ancestor itself does not, so every match remains reachable inside a
//! valid sub-tree.

use serde::{Deserialize, Serialize};

use crate::canonical::{CanonicalConfiguration, ROOT_KEY};
use crate::tree::FieldNode;

/// Predicate specification for filtering a field tree.
///
/// All set predicates must hold for a node to match directly (they are
/// ANDed together).
///
/// # Examples
///
/// ```
/// use fieldscope::FieldFilter;
///
/// let filter = FieldFilter::new().with_query("tag").with_only_exposed(true);
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldFilter {
    /// Case-insensitive substring matched against key, display name, and
    /// path string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Keep only exposed fields.
    #[serde(default)]
    pub only_exposed: bool,

    /// Keep only overridable fields.
    #[serde(default)]
    pub only_overridable: bool,

    /// Keep only fields customized by the blueprint.
    #[serde(default)]
    pub only_customized: bool,
}

impl FieldFilter {
    /// Creates an empty filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the text query.
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = Some(query.to_string());
        self
    }

    /// Sets the exposed-only predicate.
    #[must_use]
    pub fn with_only_exposed(mut self, on: bool) -> Self {
        self.only_exposed = on;
        self
    }

    /// Sets the overridable-only predicate.
    #[must_use]
    pub fn with_only_overridable(mut self, on: bool) -> Self {
        self.only_overridable = on;
        self
    }

    /// Sets the customized-only predicate.
    #[must_use]
    pub fn with_only_customized(mut self, on: bool) -> Self {
        self.only_customized = on;
        self
    }

    /// Whether this filter places no constraints (an empty query string
    /// counts as no query).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.as_deref().is_none_or(str::is_empty)
            && !self.only_exposed
            && !self.only_overridable
            && !self.only_customized
    }

    /// Whether a node matches this filter directly, ignoring descendants.
    #[must_use]
    pub fn matches(&self, node: &FieldNode) -> bool {
        self.matches_parts(
            &node.key,
            node.display_name.as_deref(),
            &node.path.to_string(),
            node.exposed,
            node.overridable,
            node.is_customized(),
        )
    }

    /// Shared predicate over the flattened parts of a field, used by both
    /// representations.
    #[must_use]
    pub fn matches_parts(
        &self,
        key: &str,
        display_name: Option<&str>,
        path: &str,
        exposed: bool,
        overridable: bool,
        customized: bool,
    ) -> bool {
        if self.only_exposed && !exposed {
            return false;
        }
        if self.only_overridable && !overridable {
            return false;
        }
        if self.only_customized && !customized {
            return false;
        }

        match self.query.as_deref() {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                key.to_lowercase().contains(&needle)
                    || display_name
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
                    || path.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Filter a tree, preserving structure.
///
/// Applied post-order: a node is included iff it matches the filter
/// directly or at least one of its descendants survives; included nodes
/// are cloned with their filtered children. An empty filter returns the
/// tree unchanged.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldFilter, FieldNode, FieldPath, FieldType};
/// use fieldscope::filter::filter;
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_children(vec![tag]);
///
/// let filtered = filter(&[image], &FieldFilter::new().with_query("tag"));
/// // The non-matching ancestor is kept so the match stays reachable.
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].children.len(), 1);
/// ```
#[must_use]
pub fn filter(tree: &[FieldNode], spec: &FieldFilter) -> Vec<FieldNode> {
    if spec.is_empty() {
        return tree.to_vec();
    }

    tree.iter()
        .filter_map(|node| {
            let filtered_children = filter(&node.children, spec);
            if spec.matches(node) || !filtered_children.is_empty() {
                let mut kept = node.clone();
                kept.children = filtered_children;
                Some(kept)
            } else {
                None
            }
        })
        .collect()
}

/// Filter a canonical configuration with the same retention rule.
///
/// An entry survives iff it matches the filter directly or is an ancestor
/// of a surviving entry; the root entry is always kept. Object `properties`
/// lists are pruned to surviving children so the result stays
/// path-prefix consistent.
#[must_use]
pub fn filter_canonical(
    config: &CanonicalConfiguration,
    spec: &FieldFilter,
) -> CanonicalConfiguration {
    if spec.is_empty() {
        return config.clone();
    }

    let mut retained: std::collections::BTreeSet<String> = std::collections::BTreeSet::new();
    for (path, entry) in config.iter() {
        if path == ROOT_KEY {
            continue;
        }
        let customized = entry.source == crate::tree::ValueSource::Blueprint;
        if spec.matches_parts(
            &entry.key,
            entry.display_name.as_deref(),
            path,
            entry.exposed,
            entry.overridable,
            customized,
        ) {
            retained.insert(path.clone());
            // Ancestors stay reachable.
            let mut current = CanonicalConfiguration::parent_of(path);
            while let Some(parent) = current {
                if parent == ROOT_KEY {
                    break;
                }
                retained.insert(parent.clone());
                current = CanonicalConfiguration::parent_of(&parent);
            }
        }
    }

    let mut result = CanonicalConfiguration::new();
    for (path, entry) in config.iter() {
        if path != ROOT_KEY && !retained.contains(path) {
            continue;
        }
        let mut kept = entry.clone();
        if let crate::canonical::FieldStructure::Object { properties } = &mut kept.structure {
            properties.retain(|child| retained.contains(child));
        }
        result.insert(kept);
    }
    result
}
