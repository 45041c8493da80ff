//! Property-based tests for the flat-map representation.

use proptest::prelude::*;
use serde_json::json;

use crate::canonical::{
    merge, set_facet_canonical, to_canonical, to_tree, CanonicalConfiguration,
};
use crate::path::FieldPath;
use crate::propagate::{set_facet, Facet};
use crate::tree::{collect_paths, FieldNode, FieldType};

#[derive(Debug, Clone)]
struct NodeShape {
    exposed: bool,
    overridable: bool,
    has_value: bool,
    children: Vec<NodeShape>,
}

fn node_shape() -> impl Strategy<Value = NodeShape> {
    let leaf = (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(e, o, v)| NodeShape {
        exposed: e,
        overridable: o,
        has_value: v,
        children: Vec::new(),
    });
    leaf.prop_recursive(3, 20, 3, |inner| {
        (
            any::<bool>(),
            any::<bool>(),
            prop::collection::vec(inner, 0..3),
        )
            .prop_map(|(e, o, children)| NodeShape {
                exposed: e,
                overridable: o,
                has_value: false,
                children,
            })
    })
}

fn build_nodes(shapes: &[NodeShape], parent: Option<&FieldPath>) -> Vec<FieldNode> {
    shapes
        .iter()
        .enumerate()
        .map(|(index, shape)| {
            let key = format!("f{index}");
            let path = match parent {
                Some(parent) => parent.child(&key),
                None => FieldPath::root_level(&key),
            };
            let field_type = if shape.children.is_empty() {
                FieldType::String
            } else {
                FieldType::Object
            };
            let children = build_nodes(&shape.children, Some(&path));
            let mut node = FieldNode::new(&key, path, field_type)
                .with_exposed(shape.exposed)
                .with_overridable(shape.overridable)
                .with_children(children);
            if shape.has_value {
                node = node.with_value(Some(json!(index)));
            }
            node
        })
        .collect()
}

fn field_tree() -> impl Strategy<Value = Vec<FieldNode>> {
    prop::collection::vec(node_shape(), 1..4).prop_map(|shapes| build_nodes(&shapes, None))
}

proptest! {
    /// Flattening and rebuilding restores the tree exactly, with no
    /// diagnostics.
    #[test]
    fn prop_round_trip_restores_tree(tree in field_tree()) {
        let conversion = to_tree(&to_canonical(&tree));
        prop_assert!(conversion.is_clean());
        prop_assert_eq!(conversion.tree, tree);
    }

    /// Flattening records one entry per node plus the root entry.
    #[test]
    fn prop_flatten_entry_count(tree in field_tree()) {
        let config = to_canonical(&tree);
        prop_assert_eq!(config.len(), collect_paths(&tree).len() + 1);
        prop_assert!(config.has_root());
        prop_assert!(config.orphaned_paths().is_empty());
    }

    /// Merging with an empty map is the identity in both directions.
    #[test]
    fn prop_merge_empty_is_identity(tree in field_tree()) {
        let config = to_canonical(&tree);
        let empty = CanonicalConfiguration::new();
        prop_assert_eq!(merge(&config, &empty), config.clone());
        prop_assert_eq!(merge(&empty, &config), config);
    }

    /// Merging a map into itself changes nothing.
    #[test]
    fn prop_merge_self_is_identity(tree in field_tree()) {
        let config = to_canonical(&tree);
        prop_assert_eq!(merge(&config, &config), config);
    }

    /// The two propagation engines agree on every edit.
    #[test]
    fn prop_propagation_engines_agree(
        tree in field_tree(),
        index in any::<prop::sample::Index>(),
        overridable in any::<bool>(),
        value in any::<bool>(),
    ) {
        let paths = collect_paths(&tree);
        let path = paths[index.index(paths.len())].clone();
        let facet = if overridable { Facet::Overridable } else { Facet::Exposed };

        let via_tree = to_canonical(&set_facet(&tree, &path, facet, value));
        let via_map = set_facet_canonical(&to_canonical(&tree), &path.to_string(), facet, value);
        prop_assert_eq!(via_tree, via_map);
    }
}
