//! Common test utilities for integration tests.
//!
//! This module provides fixture builders producing realistic field trees
//! for testing the fieldscope library.

use serde_json::{json, Value};

use fieldscope::{FieldNode, FieldPath, FieldType};

/// Parses a path literal, panicking on malformed test input.
#[allow(dead_code)]
pub fn path(text: &str) -> FieldPath {
    FieldPath::parse(text).unwrap()
}

/// Builder for a leaf field with sensible defaults.
///
/// Defaults:
/// - type: string
/// - facets: hidden, not overridable
/// - no value, no original value
#[allow(dead_code)]
pub struct FieldFixture {
    key: String,
    path: FieldPath,
    field_type: FieldType,
    original_value: Option<Value>,
    exposed: bool,
    overridable: bool,
}

#[allow(dead_code)]
impl FieldFixture {
    pub fn new(path_text: &str) -> Self {
        let parsed = path(path_text);
        let key = parsed.last().unwrap().to_string();
        Self {
            key,
            path: parsed,
            field_type: FieldType::String,
            original_value: None,
            exposed: false,
            overridable: false,
        }
    }

    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    pub fn with_original(mut self, value: Value) -> Self {
        self.original_value = Some(value);
        self
    }

    pub fn exposed(mut self) -> Self {
        self.exposed = true;
        self
    }

    pub fn overridable(mut self) -> Self {
        self.exposed = true;
        self.overridable = true;
        self
    }

    pub fn build(self) -> FieldNode {
        let mut node = FieldNode::new(&self.key, self.path, self.field_type)
            .with_exposed(self.exposed)
            .with_overridable(self.overridable);
        if let Some(value) = self.original_value {
            node = node.with_original_value(Some(value));
        }
        node
    }
}

/// A realistic deployment-template tree:
///
/// ```text
/// image (object)
///   registry (string, original "docker.io")
///   tag (string, original "1.0.0")
///   pullPolicy (string, original "IfNotPresent")
/// resources (object)
///   limits (object)
///     cpu (string, original "500m")
///     memory (string, original "512Mi")
/// replicas (number, original 1)
/// ```
///
/// Every facet starts off so tests exercise propagation from scratch.
#[allow(dead_code)]
pub fn deployment_tree() -> Vec<FieldNode> {
    let image = FieldNode::new("image", path("image"), FieldType::Object).with_children(vec![
        FieldFixture::new("image.registry")
            .with_original(json!("docker.io"))
            .build(),
        FieldFixture::new("image.tag")
            .with_original(json!("1.0.0"))
            .build(),
        FieldFixture::new("image.pullPolicy")
            .with_original(json!("IfNotPresent"))
            .build(),
    ]);

    let limits = FieldNode::new("limits", path("resources.limits"), FieldType::Object)
        .with_children(vec![
            FieldFixture::new("resources.limits.cpu")
                .with_original(json!("500m"))
                .build(),
            FieldFixture::new("resources.limits.memory")
                .with_original(json!("512Mi"))
                .build(),
        ]);
    let resources =
        FieldNode::new("resources", path("resources"), FieldType::Object).with_children(vec![limits]);

    let replicas = FieldFixture::new("replicas")
        .with_type(FieldType::Number)
        .with_original(json!(1))
        .build();

    vec![image, resources, replicas]
}
