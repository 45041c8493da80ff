//! Property-based tests for tree resolution and facet propagation.

use proptest::prelude::*;
use serde_json::json;

use crate::path::FieldPath;
use crate::propagate::{is_propagated, normalize, set_facet, Facet};
use crate::tree::{collect_paths, find_by_path, update_by_path, FieldNode, FieldType};

/// Abstract shape of a generated node, keys assigned during build.
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
    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            any::<bool>(),
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
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

/// Strategy producing a path-consistent tree with random facets.
fn field_tree() -> impl Strategy<Value = Vec<FieldNode>> {
    prop::collection::vec(node_shape(), 1..4).prop_map(|shapes| build_nodes(&shapes, None))
}

fn pick_path(tree: &[FieldNode], index: prop::sample::Index) -> FieldPath {
    let paths = collect_paths(tree);
    paths[index.index(paths.len())].clone()
}

proptest! {
    /// Normalization reaches a fixed point in one pass.
    #[test]
    fn prop_normalize_is_idempotent(tree in field_tree()) {
        let once = normalize(&tree);
        prop_assert!(is_propagated(&once));
        prop_assert_eq!(normalize(&once), once);
    }

    /// A facet edit always leaves the tree fully propagated.
    #[test]
    fn prop_set_facet_leaves_tree_propagated(
        tree in field_tree(),
        index in any::<prop::sample::Index>(),
        overridable in any::<bool>(),
        value in any::<bool>(),
    ) {
        let path = pick_path(&tree, index);
        let facet = if overridable { Facet::Overridable } else { Facet::Exposed };
        let updated = set_facet(&tree, &path, facet, value);
        prop_assert!(is_propagated(&updated));
    }

    /// Facet edits never change the tree's structure or values.
    #[test]
    fn prop_set_facet_preserves_structure(
        tree in field_tree(),
        index in any::<prop::sample::Index>(),
        value in any::<bool>(),
    ) {
        let path = pick_path(&tree, index);
        let updated = set_facet(&tree, &path, Facet::Exposed, value);
        prop_assert_eq!(collect_paths(&updated), collect_paths(&tree));
        for node_path in collect_paths(&tree) {
            let before = find_by_path(&tree, &node_path).unwrap();
            let after = find_by_path(&updated, &node_path).unwrap();
            prop_assert_eq!(&after.value, &before.value);
            prop_assert_eq!(&after.key, &before.key);
            prop_assert_eq!(after.field_type, before.field_type);
        }
    }

    /// Enabling a facet mirrors it onto the whole sub-tree.
    #[test]
    fn prop_enable_mirrors_to_descendants(
        tree in field_tree(),
        index in any::<prop::sample::Index>(),
    ) {
        let path = pick_path(&tree, index);
        let updated = set_facet(&tree, &path, Facet::Exposed, true);
        for node_path in collect_paths(&updated) {
            if node_path.starts_with(&path) {
                prop_assert!(find_by_path(&updated, &node_path).unwrap().exposed);
            }
        }
    }

    /// A facet edit at a missing path is a no-op beyond normalization.
    #[test]
    fn prop_missing_path_is_noop(tree in field_tree(), value in any::<bool>()) {
        let missing = FieldPath::parse("zz.zz.zz").unwrap();
        let updated = set_facet(&tree, &missing, Facet::Exposed, value);
        prop_assert_eq!(updated, tree);
    }

    /// Resolver update at one path touches exactly that node.
    #[test]
    fn prop_update_by_path_is_local(
        tree in field_tree(),
        index in any::<prop::sample::Index>(),
    ) {
        let path = pick_path(&tree, index);
        let updated = update_by_path(&tree, &path, |node| {
            node.display_name = Some("touched".to_string());
        });
        for node_path in collect_paths(&tree) {
            let after = find_by_path(&updated, &node_path).unwrap();
            if node_path == path {
                prop_assert_eq!(after.display_name.as_deref(), Some("touched"));
            } else {
                let before = find_by_path(&tree, &node_path).unwrap();
                prop_assert_eq!(&after.display_name, &before.display_name);
            }
        }
    }
}
