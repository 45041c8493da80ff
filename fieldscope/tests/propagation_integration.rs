//! Integration tests for facet propagation across a realistic tree.
//!
//! This test suite verifies that:
//! - Enabling a facet on a deep leaf switches on the whole ancestor chain
//! - Enabling a facet on a container mirrors it onto every descendant
//! - Disabling the last enabled child switches its ancestors back off
//! - The overridable facet implies the exposed facet at every level
//! - Propagation is a fixed point: applying it twice changes nothing

mod common;

use common::{deployment_tree, path};

use fieldscope::propagate::{is_propagated, normalize, set_facet};
use fieldscope::tree::find_by_path;
use fieldscope::Facet;

#[test]
fn test_enabling_deep_leaf_switches_on_ancestor_chain() {
    let tree = set_facet(
        &deployment_tree(),
        &path("resources.limits.cpu"),
        Facet::Exposed,
        true,
    );

    assert!(find_by_path(&tree, &path("resources.limits.cpu")).unwrap().exposed);
    assert!(find_by_path(&tree, &path("resources.limits")).unwrap().exposed);
    assert!(find_by_path(&tree, &path("resources")).unwrap().exposed);
    // Unrelated branches stay off
    assert!(!find_by_path(&tree, &path("image")).unwrap().exposed);
    assert!(!find_by_path(&tree, &path("replicas")).unwrap().exposed);
}

#[test]
fn test_enabling_container_mirrors_onto_descendants() {
    let tree = set_facet(&deployment_tree(), &path("image"), Facet::Exposed, true);

    for leaf in ["image.registry", "image.tag", "image.pullPolicy"] {
        assert!(find_by_path(&tree, &path(leaf)).unwrap().exposed, "{leaf}");
    }
}

#[test]
fn test_disabling_last_child_collapses_ancestors() {
    let tree = set_facet(
        &deployment_tree(),
        &path("resources.limits.cpu"),
        Facet::Exposed,
        true,
    );
    let tree = set_facet(&tree, &path("resources.limits.memory"), Facet::Exposed, true);

    // Turn them off one at a time; the container drops only with the last
    let tree = set_facet(&tree, &path("resources.limits.cpu"), Facet::Exposed, false);
    assert!(find_by_path(&tree, &path("resources.limits")).unwrap().exposed);

    let tree = set_facet(&tree, &path("resources.limits.memory"), Facet::Exposed, false);
    assert!(!find_by_path(&tree, &path("resources.limits")).unwrap().exposed);
    assert!(!find_by_path(&tree, &path("resources")).unwrap().exposed);
}

#[test]
fn test_disabling_container_mirrors_off_onto_descendants() {
    let tree = set_facet(&deployment_tree(), &path("image"), Facet::Exposed, true);
    let tree = set_facet(&tree, &path("image"), Facet::Exposed, false);

    for node in ["image", "image.registry", "image.tag", "image.pullPolicy"] {
        assert!(!find_by_path(&tree, &path(node)).unwrap().exposed, "{node}");
    }
}

#[test]
fn test_overridable_implies_exposed_everywhere() {
    let tree = set_facet(
        &deployment_tree(),
        &path("image.tag"),
        Facet::Overridable,
        true,
    );

    let tag = find_by_path(&tree, &path("image.tag")).unwrap();
    assert!(tag.overridable);
    assert!(tag.exposed);
    let image = find_by_path(&tree, &path("image")).unwrap();
    assert!(image.overridable);
    assert!(image.exposed);
}

#[test]
fn test_removing_exposure_also_removes_overridability() {
    let tree = set_facet(
        &deployment_tree(),
        &path("image.tag"),
        Facet::Overridable,
        true,
    );
    let tree = set_facet(&tree, &path("image.tag"), Facet::Exposed, false);

    let tag = find_by_path(&tree, &path("image.tag")).unwrap();
    assert!(!tag.exposed);
    assert!(!tag.overridable);
}

#[test]
fn test_propagation_is_a_fixed_point() {
    let tree = set_facet(&deployment_tree(), &path("image.tag"), Facet::Exposed, true);
    assert!(is_propagated(&tree));
    assert_eq!(normalize(&tree), tree);
}

#[test]
fn test_sibling_branches_are_independent() {
    let tree = set_facet(&deployment_tree(), &path("image.tag"), Facet::Exposed, true);
    let tree = set_facet(&tree, &path("replicas"), Facet::Overridable, true);
    let tree = set_facet(&tree, &path("image.tag"), Facet::Exposed, false);

    let replicas = find_by_path(&tree, &path("replicas")).unwrap();
    assert!(replicas.exposed);
    assert!(replicas.overridable);
    assert!(!find_by_path(&tree, &path("image")).unwrap().exposed);
}

#[test]
fn test_missing_path_leaves_tree_untouched() {
    let before = deployment_tree();
    let after = set_facet(&before, &path("no.such.field"), Facet::Exposed, true);
    assert_eq!(after, before);
}

#[test]
fn test_facet_edits_never_touch_values() {
    let tree = set_facet(&deployment_tree(), &path("image"), Facet::Exposed, true);
    let tag = find_by_path(&tree, &path("image.tag")).unwrap();
    assert_eq!(tag.value, None);
    assert_eq!(tag.original_value, Some(serde_json::json!("1.0.0")));
}
