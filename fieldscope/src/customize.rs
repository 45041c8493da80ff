//! Source and value customization.
//!
//! Every field is either showing its template default (`source = template`)
//! or has been customized by the blueprint (`source = blueprint`). This
//! module implements the transitions between the two states and the value
//! writes that imply them.
//!
//! The one invariant worth calling out: a field's value can never be edited
//! while nominally still "from template". Any explicit non-null value
//! write forces `source = blueprint` as a side effect.

use serde_json::Value;

use crate::path::FieldPath;
use crate::tree::{find_by_path, update_by_path, walk, FieldNode, ValueSource};

/// Mark the field at `path` as customized by the blueprint.
///
/// The current value is seeded from the template's original value when one
/// is recorded; otherwise the field keeps whatever value it already had.
/// Not-found paths are a silent no-op.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType, ValueSource};
/// use fieldscope::customize::customize;
/// use fieldscope::tree::find_by_path;
/// use serde_json::json;
///
/// let path = FieldPath::parse("tag").unwrap();
/// let tree = vec![
///     FieldNode::new("tag", path.clone(), FieldType::String)
///         .with_original_value(Some(json!("latest"))),
/// ];
///
/// let tree = customize(&tree, &path);
/// let node = find_by_path(&tree, &path).unwrap();
/// assert_eq!(node.source, ValueSource::Blueprint);
/// assert_eq!(node.value, Some(json!("latest")));
/// ```
#[must_use]
pub fn customize(tree: &[FieldNode], path: &FieldPath) -> Vec<FieldNode> {
    update_by_path(tree, path, |node| {
        if node.original_value.is_some() {
            node.value = node.original_value.clone();
        }
        node.source = ValueSource::Blueprint;
    })
}

/// Restore the field at `path` to its template default.
///
/// The value is reset to the original value (or cleared when none is
/// recorded) and the source returns to `template`. Not-found paths are a
/// silent no-op.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType, ValueSource};
/// use fieldscope::customize::{reset, set_value};
/// use fieldscope::tree::find_by_path;
/// use serde_json::json;
///
/// let path = FieldPath::parse("tag").unwrap();
/// let tree = vec![
///     FieldNode::new("tag", path.clone(), FieldType::String)
///         .with_original_value(Some(json!("latest"))),
/// ];
///
/// let tree = set_value(&tree, &path, Some(json!("v2")));
/// let tree = reset(&tree, &path);
/// let node = find_by_path(&tree, &path).unwrap();
/// assert_eq!(node.source, ValueSource::Template);
/// assert_eq!(node.value, Some(json!("latest")));
/// ```
#[must_use]
pub fn reset(tree: &[FieldNode], path: &FieldPath) -> Vec<FieldNode> {
    update_by_path(tree, path, |node| {
        node.value = node.original_value.clone();
        node.source = ValueSource::Template;
    })
}

/// Write a value to the field at `path`.
///
/// A `Some` write implicitly customizes the field (`source = blueprint`); a
/// `None` write clears the value but leaves the source untouched. Not-found
/// paths are a silent no-op.
#[must_use]
pub fn set_value(tree: &[FieldNode], path: &FieldPath, value: Option<Value>) -> Vec<FieldNode> {
    update_by_path(tree, path, |node| {
        if value.is_some() {
            node.source = ValueSource::Blueprint;
        }
        node.value = value.clone();
    })
}

/// Collect the path of every descendant of `path` that is currently
/// customized.
///
/// This is the pre-computed set fed to [`reset_paths`] for a recursive
/// reset of an object; the walk is pure and independent of any
/// confirmation step a caller may interpose. The node at `path` itself is
/// included when customized.
#[must_use]
pub fn customized_descendants(tree: &[FieldNode], path: &FieldPath) -> Vec<FieldPath> {
    let Some(start) = find_by_path(tree, path) else {
        return Vec::new();
    };

    let mut paths = Vec::new();
    walk(std::slice::from_ref(start), &mut |node| {
        if node.is_customized() {
            paths.push(node.path.clone());
        }
    });
    paths
}

/// Apply [`reset`] to an explicit set of paths.
///
/// Paths not present in the tree are skipped silently, like every other
/// resolver miss.
#[must_use]
pub fn reset_paths(tree: &[FieldNode], paths: &[FieldPath]) -> Vec<FieldNode> {
    let mut current = tree.to_vec();
    for path in paths {
        current = reset(&current, path);
    }
    current
}
