//! Field node definitions.
//!
//! This module defines the node shape of the field tree: the value types a
//! field can take, the provenance of its current value, and the node record
//! itself.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::FieldPath;

/// The type of value a field holds.
///
/// Objects nest further fields through `children`; arrays and scalars are
/// leaves of the tree.
///
/// # Examples
///
/// ```
/// use fieldscope::FieldType;
///
/// let object = FieldType::Object;
/// assert!(object.is_container());
/// assert!(!FieldType::String.is_container());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// A free-text value.
    String,
    /// A numeric value.
    Number,
    /// A true/false value.
    Boolean,
    /// A nested object; its fields are carried as `children`.
    Object,
    /// An ordered list; treated as a leaf carrying structured data.
    Array,
}

impl FieldType {
    /// Whether fields of this type nest child fields.
    ///
    /// Only objects do; arrays carry their items as structured data on the
    /// node itself.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Object)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Object => write!(f, "object"),
            Self::Array => write!(f, "array"),
        }
    }
}

/// Provenance of a field's current value.
///
/// # Examples
///
/// ```
/// use fieldscope::ValueSource;
///
/// assert_eq!(ValueSource::default(), ValueSource::Template);
/// assert_eq!(ValueSource::Blueprint.to_string(), "blueprint");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// The value is the template's shipped default.
    #[default]
    Template,
    /// The value has been customized by the blueprint.
    Blueprint,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Template => write!(f, "template"),
            Self::Blueprint => write!(f, "blueprint"),
        }
    }
}

/// One entry in the field tree.
///
/// A node is uniquely identified by its `path`. The `exposed` facet controls
/// whether downstream instances can see the field at all; `overridable`
/// controls whether they may change its value and implies `exposed`. The
/// `original_value` is the value shipped by the template and is the restore
/// target when a customization is reset.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType};
/// use serde_json::json;
///
/// let node = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String)
///     .with_value(Some(json!("latest")))
///     .with_original_value(Some(json!("latest")))
///     .with_exposed(true);
///
/// assert_eq!(node.key, "tag");
/// assert!(node.exposed);
/// assert!(!node.is_customized());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldNode {
    /// Local segment name of this field.
    pub key: String,

    /// Path from the tree root to this node; uniquely identifies it.
    pub path: FieldPath,

    /// Human-readable name, when the template provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The type of value this field holds.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Current effective value; `None` for objects whose data lives in
    /// `children`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// The value shipped by the template; immutable once set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<Value>,

    /// Provenance of the current value.
    #[serde(default)]
    pub source: ValueSource,

    /// Whether downstream instances can see this field at all.
    #[serde(default)]
    pub exposed: bool,

    /// Whether downstream instances may change this field's value.
    ///
    /// Invariant: `overridable` implies `exposed`; the propagation engine
    /// enforces this at mutation time.
    #[serde(default)]
    pub overridable: bool,

    /// Informational flag from the template schema; does not affect
    /// propagation.
    #[serde(default)]
    pub required: bool,

    /// Child fields; present only for object nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FieldNode>,
}

impl FieldNode {
    /// Creates a new field node with all facets off and no value.
    #[must_use]
    pub fn new(key: &str, path: FieldPath, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            path,
            display_name: None,
            field_type,
            value: None,
            original_value: None,
            source: ValueSource::Template,
            exposed: false,
            overridable: false,
            required: false,
            children: Vec::new(),
        }
    }

    /// Sets the current value.
    #[must_use]
    pub fn with_value(mut self, value: Option<Value>) -> Self {
        self.value = value;
        self
    }

    /// Sets the template-shipped original value.
    #[must_use]
    pub fn with_original_value(mut self, value: Option<Value>) -> Self {
        self.original_value = value;
        self
    }

    /// Sets the human-readable name.
    #[must_use]
    pub fn with_display_name(mut self, name: &str) -> Self {
        self.display_name = Some(name.to_string());
        self
    }

    /// Sets the `exposed` facet.
    ///
    /// This is a raw builder setter for constructing trees; edits on a live
    /// tree go through the propagation engine instead.
    #[must_use]
    pub fn with_exposed(mut self, exposed: bool) -> Self {
        self.exposed = exposed;
        self
    }

    /// Sets the `overridable` facet (raw builder setter).
    #[must_use]
    pub fn with_overridable(mut self, overridable: bool) -> Self {
        self.overridable = overridable;
        self
    }

    /// Sets the `required` flag.
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the value provenance.
    #[must_use]
    pub fn with_source(mut self, source: ValueSource) -> Self {
        self.source = source;
        self
    }

    /// Attaches child fields.
    #[must_use]
    pub fn with_children(mut self, children: Vec<FieldNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether this node nests child fields.
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.field_type.is_container()
    }

    /// Whether this node's value has been customized by the blueprint.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.source == ValueSource::Blueprint
    }

    /// The label shown to users: the display name when present, otherwise
    /// the key.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.key)
    }
}
