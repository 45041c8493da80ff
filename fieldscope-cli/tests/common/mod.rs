//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary tree file
//! - Command builder helpers pre-wired to that file
//! - Test data fixtures

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated tree file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the tree file commands operate on
    pub tree_file: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a test environment seeded with the standard fixture tree.
    pub fn new() -> Self {
        Self::with_content(FIXTURE_TREE)
    }

    /// Create a test environment with a custom tree document.
    pub fn with_content(content: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tree_file = temp_dir.path().join("blueprint.yaml");
        std::fs::write(&tree_file, content).expect("Failed to write tree file");
        Self {
            temp_dir,
            tree_file,
        }
    }

    /// Get a bare command builder without the --file flag.
    pub fn bare_command(&self) -> Command {
        Command::cargo_bin("fieldscope").expect("binary exists")
    }

    /// Get a command builder pre-wired to the test tree file.
    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--file").arg(&self.tree_file);
        cmd
    }

    /// Read the tree file back as text.
    pub fn read_tree(&self) -> String {
        std::fs::read_to_string(&self.tree_file).expect("Failed to read tree file")
    }
}

/// A small deployment-style tree in the nested persisted shape.
///
/// ```text
/// image (object)
///   registry (original "docker.io")
///   tag (original "1.0.0")
/// replicas (number, original 1)
/// ```
pub const FIXTURE_TREE: &str = r#"
- key: image
  path: image
  type: object
  children:
    - key: registry
      path: image.registry
      type: string
      original_value: "docker.io"
    - key: tag
      path: image.tag
      type: string
      original_value: "1.0.0"
- key: replicas
  path: replicas
  type: number
  original_value: 1
"#;
