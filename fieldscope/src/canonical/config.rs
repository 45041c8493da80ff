//! Canonical configuration records and the path-keyed map.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tree::{FieldType, ValueSource};

/// The key of the distinguished entry representing the synthetic top-level
/// container.
pub const ROOT_KEY: &str = "root";

/// Type-specific structural data carried by a canonical entry.
///
/// Object entries reference their children by path; array entries carry an
/// ordered list of item ids (item identity is not positionally stable, so
/// merges replace the list wholesale).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FieldStructure {
    /// A scalar or other leaf with no structural references.
    #[default]
    Scalar,
    /// An object referencing its child entries.
    Object {
        /// Paths of the direct children, in display order.
        properties: Vec<String>,
    },
    /// An array with synthesized item ids.
    Array {
        /// Ids of the array items, in order.
        items: Vec<String>,
    },
}

/// One flattened entry of the canonical configuration.
///
/// Carries the same facets as a tree node but no nested children; structure
/// is expressed through path references in [`FieldStructure`] instead.
///
/// # Examples
///
/// ```
/// use fieldscope::canonical::{FieldConfiguration, FieldStructure};
/// use fieldscope::FieldType;
///
/// let entry = FieldConfiguration::new("tag", "image.tag", FieldType::String);
/// assert_eq!(entry.structure, FieldStructure::Scalar);
/// assert!(!entry.exposed);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfiguration {
    /// Local segment name of this field.
    pub key: String,

    /// Dot-joined path; the map key.
    pub path: String,

    /// Human-readable name, when the template provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// The type of value this field holds.
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Current effective value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// The value shipped by the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_value: Option<Value>,

    /// Provenance of the current value.
    #[serde(default)]
    pub source: ValueSource,

    /// Whether downstream instances can see this field.
    #[serde(default)]
    pub exposed: bool,

    /// Whether downstream instances may change this field's value.
    #[serde(default)]
    pub overridable: bool,

    /// Informational flag from the template schema.
    #[serde(default)]
    pub required: bool,

    /// Type-specific structural references.
    #[serde(default)]
    pub structure: FieldStructure,
}

impl FieldConfiguration {
    /// Creates a new scalar entry with all facets off.
    #[must_use]
    pub fn new(key: &str, path: &str, field_type: FieldType) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            display_name: None,
            field_type,
            value: None,
            original_value: None,
            source: ValueSource::Template,
            exposed: false,
            overridable: false,
            required: false,
            structure: FieldStructure::Scalar,
        }
    }

    /// Whether this entry is an object container.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.structure, FieldStructure::Object { .. })
    }
}

/// A single-entry update applied to a canonical configuration.
///
/// Property updates replace only the addressed facet; the entry's
/// structural references (`properties`, `items`) are preserved verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldProperty {
    /// Set the `exposed` facet.
    Exposed(bool),
    /// Set the `overridable` facet.
    Overridable(bool),
    /// Set the `required` flag.
    Required(bool),
    /// Replace the current value.
    Value(Option<Value>),
    /// Replace the value provenance.
    Source(ValueSource),
    /// Replace the display name.
    DisplayName(Option<String>),
}

impl FieldProperty {
    fn apply_to(&self, entry: &mut FieldConfiguration) {
        match self {
            Self::Exposed(v) => entry.exposed = *v,
            Self::Overridable(v) => entry.overridable = *v,
            Self::Required(v) => entry.required = *v,
            Self::Value(v) => entry.value = v.clone(),
            Self::Source(s) => entry.source = *s,
            Self::DisplayName(n) => entry.display_name = n.clone(),
        }
    }
}

/// The flat, path-keyed representation of a field tree.
///
/// An ordered map from dot-joined path strings to [`FieldConfiguration`]
/// entries. A populated canonical configuration always carries the
/// synthetic [`ROOT_KEY`] entry; maps arriving without one are malformed
/// but tolerated (see [`crate::canonical::to_tree`]).
///
/// # Examples
///
/// ```
/// use fieldscope::canonical::{CanonicalConfiguration, FieldConfiguration};
/// use fieldscope::FieldType;
///
/// let mut config = CanonicalConfiguration::new();
/// config.insert(FieldConfiguration::new("image", "image", FieldType::Object));
/// config.insert(FieldConfiguration::new("tag", "image.tag", FieldType::String));
///
/// assert_eq!(config.children_of("image").len(), 1);
/// assert!(config.get("image.tag").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalConfiguration {
    entries: BTreeMap<String, FieldConfiguration>,
}

impl CanonicalConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, keyed by its own path.
    pub fn insert(&mut self, entry: FieldConfiguration) {
        self.entries.insert(entry.path.clone(), entry);
    }

    /// Looks up the entry at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FieldConfiguration> {
        self.entries.get(path)
    }

    /// Whether an entry exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Whether the distinguished root entry is present.
    #[must_use]
    pub fn has_root(&self) -> bool {
        self.entries.contains_key(ROOT_KEY)
    }

    /// The number of entries, including the root entry when present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldConfiguration)> {
        self.entries.iter()
    }

    /// Mutable access used by the canonical-side propagation engine.
    pub(crate) fn entries_mut(&mut self) -> &mut BTreeMap<String, FieldConfiguration> {
        &mut self.entries
    }

    /// The direct children of `path`: stored paths exactly one segment
    /// longer that share its prefix. For [`ROOT_KEY`], the top-level
    /// entries.
    #[must_use]
    pub fn children_of(&self, path: &str) -> Vec<&FieldConfiguration> {
        self.entries
            .values()
            .filter(|entry| entry.path != ROOT_KEY && is_direct_child(path, &entry.path))
            .collect()
    }

    /// The parent path of `path` within the map's addressing scheme:
    /// `None` for the root entry, [`ROOT_KEY`] for top-level paths, the
    /// dot-parent otherwise.
    #[must_use]
    pub fn parent_of(path: &str) -> Option<String> {
        if path == ROOT_KEY {
            return None;
        }
        match path.rsplit_once('.') {
            Some((parent, _)) => Some(parent.to_string()),
            None => Some(ROOT_KEY.to_string()),
        }
    }

    /// Paths whose parent entry is absent from the map (root entry and
    /// top-level paths excluded). A well-formed configuration has none.
    #[must_use]
    pub fn orphaned_paths(&self) -> Vec<String> {
        self.entries
            .keys()
            .filter(|path| {
                path.as_str() != ROOT_KEY
                    && path.contains('.')
                    && !self
                        .entries
                        .contains_key(&Self::parent_of(path).unwrap_or_default())
            })
            .cloned()
            .collect()
    }

    /// Produce a new configuration with a single property replaced on the
    /// entry at `path`.
    ///
    /// All other entries, and the addressed entry's structural references,
    /// are preserved verbatim. A missing path is a silent no-op.
    #[must_use]
    pub fn update_property(&self, path: &str, property: &FieldProperty) -> Self {
        let mut updated = self.clone();
        if let Some(entry) = updated.entries.get_mut(path) {
            property.apply_to(entry);
        }
        updated
    }
}

/// Whether `candidate` is a direct child path of `parent` (segment-wise).
///
/// For [`ROOT_KEY`] as parent, direct children are the single-segment
/// paths.
#[must_use]
pub(crate) fn is_direct_child(parent: &str, candidate: &str) -> bool {
    if parent == ROOT_KEY {
        return !candidate.contains('.');
    }
    match candidate.rsplit_once('.') {
        Some((prefix, _)) => prefix == parent,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(key: &str, path: &str, field_type: FieldType) -> FieldConfiguration {
        FieldConfiguration::new(key, path, field_type)
    }

    fn sample_config() -> CanonicalConfiguration {
        let mut config = CanonicalConfiguration::new();
        let mut root = entry("root", ROOT_KEY, FieldType::Object);
        root.structure = FieldStructure::Object {
            properties: vec!["image".to_string(), "replicas".to_string()],
        };
        config.insert(root);

        let mut image = entry("image", "image", FieldType::Object);
        image.structure = FieldStructure::Object {
            properties: vec!["image.tag".to_string()],
        };
        config.insert(image);
        config.insert(entry("tag", "image.tag", FieldType::String));
        config.insert(entry("replicas", "replicas", FieldType::Number));
        config
    }

    #[test]
    fn test_children_of() {
        let config = sample_config();
        let children = config.children_of("image");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "image.tag");

        let top = config.children_of(ROOT_KEY);
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn test_parent_of() {
        assert_eq!(CanonicalConfiguration::parent_of(ROOT_KEY), None);
        assert_eq!(
            CanonicalConfiguration::parent_of("image"),
            Some(ROOT_KEY.to_string())
        );
        assert_eq!(
            CanonicalConfiguration::parent_of("image.tag"),
            Some("image".to_string())
        );
    }

    #[test]
    fn test_orphaned_paths() {
        let mut config = sample_config();
        assert!(config.orphaned_paths().is_empty());

        config.insert(entry("port", "service.port", FieldType::Number));
        assert_eq!(config.orphaned_paths(), vec!["service.port".to_string()]);
    }

    #[test]
    fn test_update_property_replaces_only_target() {
        let config = sample_config();
        let updated = config.update_property("image.tag", &FieldProperty::Exposed(true));

        assert!(updated.get("image.tag").unwrap().exposed);
        assert!(!config.get("image.tag").unwrap().exposed);
        // Other entries untouched
        assert!(!updated.get("replicas").unwrap().exposed);
        // Structural fields preserved
        assert_eq!(
            updated.get("image").unwrap().structure,
            config.get("image").unwrap().structure
        );
    }

    #[test]
    fn test_update_property_value_sets_only_value() {
        let config = sample_config();
        let updated =
            config.update_property("replicas", &FieldProperty::Value(Some(json!(3))));
        let entry = updated.get("replicas").unwrap();
        assert_eq!(entry.value, Some(json!(3)));
        assert_eq!(entry.source, ValueSource::Template);
    }

    #[test]
    fn test_update_property_missing_path_is_noop() {
        let config = sample_config();
        let updated = config.update_property("ghost", &FieldProperty::Exposed(true));
        assert_eq!(updated, config);
    }

    #[test]
    fn test_is_direct_child() {
        assert!(is_direct_child(ROOT_KEY, "image"));
        assert!(!is_direct_child(ROOT_KEY, "image.tag"));
        assert!(is_direct_child("image", "image.tag"));
        assert!(!is_direct_child("image", "image.tag.extra"));
        assert!(!is_direct_child("image", "imagex.tag"));
    }

    #[test]
    fn test_serde_transparent_map() {
        let config = sample_config();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.is_object());
        assert!(json.get(ROOT_KEY).is_some());
        assert!(json.get("image.tag").is_some());

        let back: CanonicalConfiguration = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_structure_serde_tags() {
        let config = sample_config();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["image"]["structure"]["kind"], json!("object"));
        assert_eq!(json["image.tag"]["structure"]["kind"], json!("scalar"));
        assert_eq!(json["image"]["structure"]["properties"], json!(["image.tag"]));
    }
}
