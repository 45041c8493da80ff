//! Conversion between the nested tree and the canonical map.

use std::fmt;

use crate::canonical::config::{
    CanonicalConfiguration, FieldConfiguration, FieldStructure, ROOT_KEY,
};
use crate::path::FieldPath;
use crate::tree::{FieldNode, FieldType, ValueSource};

/// A well-formedness defect observed while converting a canonical map.
///
/// Malformed maps are tolerated, never fatal: orphaned paths are promoted
/// to additional roots and the defect is surfaced here for observability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The distinguished `"root"` entry is absent.
    MissingRoot,
    /// An entry's parent path is absent from the map.
    OrphanPath {
        /// The orphaned path.
        path: String,
    },
    /// An entry's path could not be parsed and the entry was skipped.
    UnparsablePath {
        /// The offending path text.
        path: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRoot => write!(f, "canonical configuration is missing its root entry"),
            Self::OrphanPath { path } => {
                write!(f, "orphaned path '{path}' promoted to an additional root")
            }
            Self::UnparsablePath { path } => {
                write!(f, "entry with unparsable path '{path}' skipped")
            }
        }
    }
}

/// The result of converting a canonical configuration back to a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConversion {
    /// The reconstructed tree.
    pub tree: Vec<FieldNode>,
    /// Well-formedness defects observed during conversion.
    pub diagnostics: Vec<Diagnostic>,
}

impl TreeConversion {
    /// Whether the source map was well-formed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Flatten a tree into its canonical configuration.
///
/// Performs a pre-order traversal emitting one entry per node, keyed by its
/// path string, and synthesizes the `"root"` container entry whose facets
/// are derived from the top-level nodes.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType};
/// use fieldscope::canonical::{to_canonical, ROOT_KEY};
///
/// let tree = vec![
///     FieldNode::new("replicas", FieldPath::parse("replicas").unwrap(), FieldType::Number),
/// ];
/// let config = to_canonical(&tree);
/// assert!(config.has_root());
/// assert!(config.get("replicas").is_some());
/// ```
#[must_use]
pub fn to_canonical(tree: &[FieldNode]) -> CanonicalConfiguration {
    let mut config = CanonicalConfiguration::new();

    let mut root = FieldConfiguration::new("root", ROOT_KEY, FieldType::Object);
    root.exposed = tree.iter().any(|n| n.exposed);
    root.overridable = tree.iter().any(|n| n.overridable);
    root.structure = FieldStructure::Object {
        properties: tree.iter().map(|n| n.path.to_string()).collect(),
    };
    config.insert(root);

    for node in tree {
        flatten_node(node, &mut config);
    }
    config
}

fn flatten_node(node: &FieldNode, config: &mut CanonicalConfiguration) {
    let path = node.path.to_string();
    let mut entry = FieldConfiguration::new(&node.key, &path, node.field_type);
    entry.display_name = node.display_name.clone();
    entry.value = node.value.clone();
    entry.original_value = node.original_value.clone();
    entry.source = node.source;
    entry.exposed = node.exposed;
    entry.overridable = node.overridable;
    entry.required = node.required;
    entry.structure = match node.field_type {
        FieldType::Object => FieldStructure::Object {
            properties: node.children.iter().map(|c| c.path.to_string()).collect(),
        },
        FieldType::Array => FieldStructure::Array {
            items: synthesize_item_ids(&path, node),
        },
        _ => FieldStructure::Scalar,
    };
    config.insert(entry);

    for child in &node.children {
        flatten_node(child, config);
    }
}

/// Item ids are index-derived; item identity is not positionally stable,
/// so merges replace them wholesale rather than matching them up.
fn synthesize_item_ids(path: &str, node: &FieldNode) -> Vec<String> {
    let count = node
        .value
        .as_ref()
        .and_then(|v| v.as_array())
        .map_or(0, Vec::len);
    (0..count).map(|i| format!("{path}[{i}]")).collect()
}

/// Reconstruct a tree from a canonical configuration.
///
/// Top-level nodes are the entries whose parent path is absent from the
/// map; children are found by direct-child prefix match and ordered by the
/// parent's `properties` list where one is recorded. Orphaned paths are
/// promoted to additional roots and reported as diagnostics rather than
/// rejected.
///
/// # Examples
///
/// ```
/// use fieldscope::canonical::{to_canonical, to_tree};
/// use fieldscope::{FieldNode, FieldPath, FieldType};
///
/// let tree = vec![
///     FieldNode::new("replicas", FieldPath::parse("replicas").unwrap(), FieldType::Number),
/// ];
/// let conversion = to_tree(&to_canonical(&tree));
/// assert!(conversion.is_clean());
/// assert_eq!(conversion.tree, tree);
/// ```
#[must_use]
pub fn to_tree(config: &CanonicalConfiguration) -> TreeConversion {
    let mut diagnostics = Vec::new();

    if !config.has_root() {
        diagnostics.push(Diagnostic::MissingRoot);
    }
    for path in config.orphaned_paths() {
        diagnostics.push(Diagnostic::OrphanPath { path });
    }

    // Well-formed roots: single-segment paths, ordered by the root entry's
    // properties list when present.
    let top_level: Vec<&FieldConfiguration> = config.children_of(ROOT_KEY);
    let ordered_top = order_entries(top_level, root_properties(config));

    let mut tree = Vec::new();
    for entry in ordered_top {
        build_node(config, entry, &mut tree, &mut diagnostics);
    }

    // Orphans become additional roots, in map order.
    for path in config.orphaned_paths() {
        if let Some(entry) = config.get(&path) {
            build_node(config, entry, &mut tree, &mut diagnostics);
        }
    }

    TreeConversion { tree, diagnostics }
}

fn root_properties(config: &CanonicalConfiguration) -> Option<&[String]> {
    match config.get(ROOT_KEY).map(|root| &root.structure) {
        Some(FieldStructure::Object { properties }) => Some(properties),
        _ => None,
    }
}

/// Order entries by an explicit properties list where available; entries
/// not listed keep their map order at the end.
fn order_entries<'a>(
    entries: Vec<&'a FieldConfiguration>,
    listed: Option<&[String]>,
) -> Vec<&'a FieldConfiguration> {
    let Some(listed) = listed else {
        return entries;
    };

    let mut ordered = Vec::with_capacity(entries.len());
    for path in listed {
        if let Some(entry) = entries.iter().find(|e| &e.path == path) {
            ordered.push(*entry);
        }
    }
    for entry in entries {
        if !listed.contains(&entry.path) {
            ordered.push(entry);
        }
    }
    ordered
}

fn build_node(
    config: &CanonicalConfiguration,
    entry: &FieldConfiguration,
    out: &mut Vec<FieldNode>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let Ok(path) = FieldPath::parse(&entry.path) else {
        diagnostics.push(Diagnostic::UnparsablePath {
            path: entry.path.clone(),
        });
        return;
    };

    let mut node = FieldNode::new(&entry.key, path, entry.field_type);
    node.display_name = entry.display_name.clone();
    node.value = entry.value.clone();
    node.original_value = entry.original_value.clone();
    node.source = entry.source;
    node.exposed = entry.exposed;
    node.overridable = entry.overridable;
    node.required = entry.required;

    let listed = match &entry.structure {
        FieldStructure::Object { properties } => Some(properties.as_slice()),
        _ => None,
    };
    let children = order_entries(config.children_of(&entry.path), listed);
    for child in children {
        build_node(config, child, &mut node.children, diagnostics);
    }

    out.push(node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p(text: &str) -> FieldPath {
        FieldPath::parse(text).unwrap()
    }

    fn sample_tree() -> Vec<FieldNode> {
        vec![
            FieldNode::new("image", p("image"), FieldType::Object)
                .with_exposed(true)
                .with_children(vec![
                    FieldNode::new("tag", p("image.tag"), FieldType::String)
                        .with_value(Some(json!("latest")))
                        .with_original_value(Some(json!("latest")))
                        .with_exposed(true)
                        .with_display_name("Image Tag"),
                    FieldNode::new("pullPolicy", p("image.pullPolicy"), FieldType::String)
                        .with_value(Some(json!("IfNotPresent"))),
                ]),
            FieldNode::new("ports", p("ports"), FieldType::Array)
                .with_value(Some(json!([80, 443])))
                .with_original_value(Some(json!([80, 443]))),
            FieldNode::new("replicas", p("replicas"), FieldType::Number)
                .with_value(Some(json!(1)))
                .with_required(true),
        ]
    }

    #[test]
    fn test_to_canonical_emits_all_nodes_plus_root() {
        let config = to_canonical(&sample_tree());
        assert_eq!(config.len(), 6);
        assert!(config.has_root());
        assert!(config.get("image.pullPolicy").is_some());
    }

    #[test]
    fn test_root_entry_facets_derived() {
        let config = to_canonical(&sample_tree());
        let root = config.get(ROOT_KEY).unwrap();
        assert!(root.exposed);
        assert!(!root.overridable);
        assert!(root.is_object());
    }

    #[test]
    fn test_object_properties_keep_child_order() {
        let config = to_canonical(&sample_tree());
        match &config.get("image").unwrap().structure {
            FieldStructure::Object { properties } => {
                assert_eq!(properties, &["image.tag", "image.pullPolicy"]);
            }
            other => panic!("expected object structure, got {other:?}"),
        }
    }

    #[test]
    fn test_array_items_synthesized() {
        let config = to_canonical(&sample_tree());
        match &config.get("ports").unwrap().structure {
            FieldStructure::Array { items } => {
                assert_eq!(items, &["ports[0]", "ports[1]"]);
            }
            other => panic!("expected array structure, got {other:?}"),
        }
    }

    #[test]
    fn test_roundtrip_preserves_tree() {
        let tree = sample_tree();
        let conversion = to_tree(&to_canonical(&tree));
        assert!(conversion.is_clean());
        assert_eq!(conversion.tree, tree);
    }

    #[test]
    fn test_roundtrip_preserves_non_alphabetical_order() {
        // "zeta" sorts after "alpha" in the map, ordering must come from
        // the properties lists instead.
        let tree = vec![
            FieldNode::new("zeta", p("zeta"), FieldType::String),
            FieldNode::new("alpha", p("alpha"), FieldType::String),
        ];
        let conversion = to_tree(&to_canonical(&tree));
        assert!(conversion.is_clean());
        assert_eq!(conversion.tree, tree);
    }

    #[test]
    fn test_missing_root_is_diagnosed_not_fatal() {
        let mut config = CanonicalConfiguration::new();
        config.insert(FieldConfiguration::new("replicas", "replicas", FieldType::Number));

        let conversion = to_tree(&config);
        assert!(conversion.diagnostics.contains(&Diagnostic::MissingRoot));
        assert_eq!(conversion.tree.len(), 1);
        assert_eq!(conversion.tree[0].key, "replicas");
    }

    #[test]
    fn test_orphans_become_additional_roots() {
        let mut config = to_canonical(&sample_tree());
        config.insert(FieldConfiguration::new("port", "service.port", FieldType::Number));

        let conversion = to_tree(&config);
        assert!(conversion
            .diagnostics
            .contains(&Diagnostic::OrphanPath { path: "service.port".to_string() }));
        // The orphan appears as an extra root after the well-formed ones
        let last = conversion.tree.last().unwrap();
        assert_eq!(last.path, p("service.port"));
    }

    #[test]
    fn test_empty_tree_roundtrip() {
        let config = to_canonical(&[]);
        assert_eq!(config.len(), 1); // just root
        let conversion = to_tree(&config);
        assert!(conversion.is_clean());
        assert!(conversion.tree.is_empty());
    }
}
