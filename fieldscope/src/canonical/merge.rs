//! Merging of canonical configurations.
//!
//! Merging follows the shape of the data rather than replacing entries
//! wholesale: two object entries at the same path union their child
//! references, while array item lists are replaced outright because item
//! identity is not positionally stable. A type mismatch between base and
//! update is treated as an intentional schema refactor, not an error - the
//! update wins.

use crate::canonical::config::{CanonicalConfiguration, FieldConfiguration, FieldStructure};

/// Merge `updates` into `base`, producing a new configuration.
///
/// Entries present only in one side are carried over unchanged. For paths
/// present in both with matching types, the update's facets and values win
/// while structural references are merged: object `properties` are unioned
/// (base order first, new references appended), array `items` are replaced
/// wholesale. A type mismatch lets the update win completely.
///
/// # Examples
///
/// ```
/// use fieldscope::canonical::{merge, CanonicalConfiguration, FieldConfiguration};
/// use fieldscope::FieldType;
///
/// let mut base = CanonicalConfiguration::new();
/// base.insert(FieldConfiguration::new("replicas", "replicas", FieldType::Number));
///
/// let mut updates = CanonicalConfiguration::new();
/// let mut entry = FieldConfiguration::new("replicas", "replicas", FieldType::Number);
/// entry.exposed = true;
/// updates.insert(entry);
///
/// let merged = merge(&base, &updates);
/// assert!(merged.get("replicas").unwrap().exposed);
/// ```
#[must_use]
pub fn merge(
    base: &CanonicalConfiguration,
    updates: &CanonicalConfiguration,
) -> CanonicalConfiguration {
    let mut result = base.clone();

    for (path, update) in updates.iter() {
        let merged = match base.get(path) {
            Some(existing) if existing.field_type == update.field_type => {
                merge_entry(existing, update)
            }
            // New path, or a schema refactor: the update wins wholesale.
            _ => update.clone(),
        };
        result.insert(merged);
    }

    result
}

fn merge_entry(base: &FieldConfiguration, update: &FieldConfiguration) -> FieldConfiguration {
    let mut merged = update.clone();
    merged.structure = merge_structure(&base.structure, &update.structure);
    merged
}

fn merge_structure(base: &FieldStructure, update: &FieldStructure) -> FieldStructure {
    match (base, update) {
        (
            FieldStructure::Object { properties: base_props },
            FieldStructure::Object { properties: update_props },
        ) => {
            let mut properties = base_props.clone();
            for path in update_props {
                if !properties.contains(path) {
                    properties.push(path.clone());
                }
            }
            FieldStructure::Object { properties }
        }
        // Array items are replaced wholesale; item identity is not
        // positionally stable.
        _ => update.clone(),
    }
}
