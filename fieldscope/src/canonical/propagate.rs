//! Facet propagation over the canonical representation.
//!
//! The canonical map must support the same propagation semantics as the
//! tree, expressed in its own vocabulary: "children of path P" means all
//! stored paths exactly one segment longer than P that share its prefix,
//! and the distinguished `"root"` entry is the topmost ancestor.

use crate::canonical::config::{is_direct_child, CanonicalConfiguration, FieldConfiguration, ROOT_KEY};
use crate::propagate::Facet;

fn facet_of(entry: &FieldConfiguration, facet: Facet) -> bool {
    match facet {
        Facet::Exposed => entry.exposed,
        Facet::Overridable => entry.overridable,
    }
}

fn apply_facet(entry: &mut FieldConfiguration, facet: Facet, value: bool) {
    match (facet, value) {
        (Facet::Exposed, true) => entry.exposed = true,
        (Facet::Exposed, false) => {
            entry.exposed = false;
            entry.overridable = false;
        }
        (Facet::Overridable, true) => {
            entry.overridable = true;
            entry.exposed = true;
        }
        (Facet::Overridable, false) => entry.overridable = false,
    }
}

/// Set a facet on the entry at `path` and propagate through the whole map.
///
/// Mirrors the tree-side engine: the value is mirrored onto every
/// descendant entry, then the bottom-up closures are re-derived across the
/// map. A missing path is a silent no-op.
///
/// # Examples
///
/// ```
/// use fieldscope::canonical::{set_facet_canonical, to_canonical, ROOT_KEY};
/// use fieldscope::{Facet, FieldNode, FieldPath, FieldType};
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_children(vec![tag]);
/// let config = to_canonical(&[image]);
///
/// let config = set_facet_canonical(&config, "image.tag", Facet::Exposed, true);
/// assert!(config.get("image").unwrap().exposed);
/// assert!(config.get(ROOT_KEY).unwrap().exposed);
/// ```
#[must_use]
pub fn set_facet_canonical(
    config: &CanonicalConfiguration,
    path: &str,
    facet: Facet,
    value: bool,
) -> CanonicalConfiguration {
    if !config.contains(path) {
        log::debug!("set_facet_canonical miss: no entry at '{path}', map unchanged");
        return config.clone();
    }

    let mut updated = config.clone();
    let descendant_keys: Vec<String> = updated
        .iter()
        .map(|(key, _)| key.clone())
        .filter(|key| key == path || is_descendant(path, key))
        .collect();
    for key in descendant_keys {
        if let Some(entry) = updated.entries_mut().get_mut(&key) {
            apply_facet(entry, facet, value);
        }
    }

    normalize_canonical(&updated)
}

/// Whether `candidate` lies strictly beneath `ancestor` (segment-wise).
/// The root entry is an ancestor of everything else.
fn is_descendant(ancestor: &str, candidate: &str) -> bool {
    if candidate == ROOT_KEY {
        return false;
    }
    if ancestor == ROOT_KEY {
        return true;
    }
    candidate.len() > ancestor.len()
        && candidate.starts_with(ancestor)
        && candidate.as_bytes()[ancestor.len()] == b'.'
}

/// Re-derive the bottom-up/top-down closure rules over the whole map.
///
/// For every object entry with at least one stored child, each facet
/// becomes the disjunction of its children's values; the root entry is
/// derived from the top-level entries. Node-level, `overridable` implies
/// `exposed`. Idempotent.
#[must_use]
pub fn normalize_canonical(config: &CanonicalConfiguration) -> CanonicalConfiguration {
    let mut updated = config.clone();

    // Deepest-first, so children are final before their parents are
    // derived; the root entry comes last.
    let mut keys: Vec<String> = updated
        .iter()
        .map(|(key, _)| key.clone())
        .filter(|key| key != ROOT_KEY)
        .collect();
    keys.sort_by_key(|key| std::cmp::Reverse(key.matches('.').count()));
    keys.push(ROOT_KEY.to_string());

    for key in keys {
        let derived = derive_facets(&updated, &key);
        if let Some(entry) = updated.entries_mut().get_mut(&key) {
            if let Some((any_exposed, any_overridable)) = derived {
                entry.exposed = any_exposed;
                entry.overridable = any_overridable;
            }
            if entry.overridable {
                entry.exposed = true;
            }
            if !entry.exposed {
                entry.overridable = false;
            }
        }
    }

    updated
}

/// Derived facet values for a container entry, or `None` when the entry
/// has no stored children and keeps its own values.
fn derive_facets(config: &CanonicalConfiguration, key: &str) -> Option<(bool, bool)> {
    let entry = config.get(key)?;
    if key != ROOT_KEY && !entry.is_object() {
        return None;
    }

    let mut any_exposed = false;
    let mut any_overridable = false;
    let mut has_children = false;
    for (_, candidate) in config.iter() {
        if candidate.path != ROOT_KEY && is_direct_child(key, &candidate.path) {
            has_children = true;
            any_exposed |= candidate.exposed;
            any_overridable |= candidate.overridable;
        }
    }

    has_children.then_some((any_exposed, any_overridable))
}
