//! Integration tests for the editing commands.
//!
//! These tests verify that expose, override, set, customize, and reset:
//! - Apply the library operation and print the updated tree
//! - Persist the result with --write
//! - Propagate facet changes across the hierarchy
//! - Treat missing paths as silent no-ops

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_expose_prints_updated_tree() {
    let env = TestEnv::new();
    env.command()
        .arg("expose")
        .arg("image.tag")
        .assert()
        .success()
        .stdout(predicate::str::contains("exposed: true"));
    // Without --write the file is untouched
    assert!(!env.read_tree().contains("exposed: true"));
}

#[test]
fn test_expose_write_persists() {
    let env = TestEnv::new();
    env.command()
        .arg("expose")
        .arg("image.tag")
        .arg("--write")
        .assert()
        .success();
    assert!(env.read_tree().contains("exposed: true"));
}

#[test]
fn test_expose_propagates_to_ancestor() {
    let env = TestEnv::new();
    env.command()
        .arg("expose")
        .arg("image.tag")
        .arg("--write")
        .assert()
        .success();

    // The container turned on too; check confirms the invariants hold
    env.command().arg("check").assert().success();
    env.command()
        .arg("show")
        .arg("--format")
        .arg("tsv")
        .assert()
        .success()
        .stdout(predicate::str::contains("image\tobject\ttrue"));
}

#[test]
fn test_expose_off_collapses_ancestors() {
    let env = TestEnv::new();
    env.command()
        .arg("expose")
        .arg("image.tag")
        .arg("--write")
        .assert()
        .success();
    env.command()
        .arg("expose")
        .arg("image.tag")
        .arg("--off")
        .arg("--write")
        .assert()
        .success();
    assert!(!env.read_tree().contains("exposed: true"));
}

#[test]
fn test_override_implies_exposed() {
    let env = TestEnv::new();
    env.command()
        .arg("override")
        .arg("replicas")
        .arg("--write")
        .assert()
        .success();

    let tree = env.read_tree();
    assert!(tree.contains("overridable: true"));
    assert!(tree.contains("exposed: true"));
}

#[test]
fn test_set_marks_blueprint_provenance() {
    let env = TestEnv::new();
    env.command()
        .arg("set")
        .arg("image.tag")
        .arg("2.0.0")
        .arg("--write")
        .assert()
        .success();

    let tree = env.read_tree();
    assert!(tree.contains("2.0.0"));
    assert!(tree.contains("source: blueprint"));
}

#[test]
fn test_set_json_number() {
    let env = TestEnv::new();
    env.command()
        .arg("set")
        .arg("replicas")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("value: 3"));
}

#[test]
fn test_customize_seeds_template_value() {
    let env = TestEnv::new();
    env.command()
        .arg("customize")
        .arg("image.registry")
        .assert()
        .success()
        .stdout(predicate::str::contains("value: docker.io"))
        .stdout(predicate::str::contains("source: blueprint"));
}

#[test]
fn test_reset_restores_template_state() {
    let env = TestEnv::new();
    env.command()
        .arg("set")
        .arg("image.tag")
        .arg("9.9.9")
        .arg("--write")
        .assert()
        .success();
    env.command()
        .arg("reset")
        .arg("image.tag")
        .arg("--write")
        .assert()
        .success();

    let tree = env.read_tree();
    assert!(!tree.contains("9.9.9"));
    assert!(!tree.contains("source: blueprint"));
}

#[test]
fn test_reset_recursive_restores_section() {
    let env = TestEnv::new();
    env.command()
        .arg("customize")
        .arg("image.registry")
        .arg("--write")
        .assert()
        .success();
    env.command()
        .arg("customize")
        .arg("image.tag")
        .arg("--write")
        .assert()
        .success();
    env.command()
        .arg("reset")
        .arg("image")
        .arg("--recursive")
        .arg("--write")
        .assert()
        .success();

    assert!(!env.read_tree().contains("source: blueprint"));
}

#[test]
fn test_missing_path_is_silent_noop() {
    let env = TestEnv::new();
    // Canonicalize the file's serialization with a no-op edit first
    env.command()
        .arg("expose")
        .arg("image.registry")
        .arg("--off")
        .arg("--write")
        .assert()
        .success();
    let before = env.read_tree();
    env.command()
        .arg("expose")
        .arg("no.such.field")
        .arg("--write")
        .assert()
        .success();
    assert_eq!(env.read_tree(), before);
}
