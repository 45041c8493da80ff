//! Path-based lookup and update over field trees.
//!
//! The resolver performs structural, non-mutating rebuilds: an update walks
//! the tree, applies the mutator to a copy of the node whose path matches
//! exactly, and rebuilds only the branch that can contain the target path.
//! Sibling branches are carried over unchanged.
//!
//! A path that is not present in the tree is a silent no-op, never an
//! error: the displayed tree and the underlying tree can transiently
//! diverge while a filter is active, so callers must tolerate misses.

use crate::path::FieldPath;
use crate::tree::FieldNode;

/// Find the node at `path`, if any.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldNode, FieldPath, FieldType};
/// use fieldscope::tree::find_by_path;
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_children(vec![tag]);
/// let tree = vec![image];
///
/// let path = FieldPath::parse("image.tag").unwrap();
/// assert!(find_by_path(&tree, &path).is_some());
///
/// let missing = FieldPath::parse("image.digest").unwrap();
/// assert!(find_by_path(&tree, &missing).is_none());
/// ```
#[must_use]
pub fn find_by_path<'a>(nodes: &'a [FieldNode], path: &FieldPath) -> Option<&'a FieldNode> {
    for node in nodes {
        if &node.path == path {
            return Some(node);
        }
        // Only descend into branches whose path prefixes the target.
        if path.starts_with(&node.path) {
            if let Some(found) = find_by_path(&node.children, path) {
                return Some(found);
            }
        }
    }
    None
}

/// Whether a node exists at `path`.
#[must_use]
pub fn contains_path(nodes: &[FieldNode], path: &FieldPath) -> bool {
    find_by_path(nodes, path).is_some()
}

/// Produce a new tree with the mutator applied to the node at `path`.
///
/// Performs a structural rebuild: only the branch containing the target is
/// reconstructed; sibling branches are copied over as-is. If no node has
/// the given path the input tree is returned unchanged.
#[must_use]
pub fn update_by_path<F>(nodes: &[FieldNode], path: &FieldPath, mutator: F) -> Vec<FieldNode>
where
    F: Fn(&mut FieldNode),
{
    rebuild(nodes, path, &mutator, false)
}

/// Produce a new tree with the mutator applied to the node at `path` and
/// every one of its descendants.
///
/// Used by top-down propagation, which mirrors a facet value into a whole
/// subtree. Not-found paths are a silent no-op, like [`update_by_path`].
#[must_use]
pub fn update_subtree<F>(nodes: &[FieldNode], path: &FieldPath, mutator: F) -> Vec<FieldNode>
where
    F: Fn(&mut FieldNode),
{
    rebuild(nodes, path, &mutator, true)
}

fn rebuild<F>(nodes: &[FieldNode], path: &FieldPath, mutator: &F, recursive: bool) -> Vec<FieldNode>
where
    F: Fn(&mut FieldNode),
{
    nodes
        .iter()
        .map(|node| {
            if &node.path == path {
                let mut updated = node.clone();
                if recursive {
                    apply_all(&mut updated, mutator);
                } else {
                    mutator(&mut updated);
                }
                updated
            } else if path.starts_with(&node.path) {
                let mut updated = node.clone();
                updated.children = rebuild(&node.children, path, mutator, recursive);
                updated
            } else {
                node.clone()
            }
        })
        .collect()
}

fn apply_all<F>(node: &mut FieldNode, mutator: &F)
where
    F: Fn(&mut FieldNode),
{
    mutator(node);
    for child in &mut node.children {
        apply_all(child, mutator);
    }
}

/// Visit every node in pre-order.
pub fn walk<'a, F>(nodes: &'a [FieldNode], visitor: &mut F)
where
    F: FnMut(&'a FieldNode),
{
    for node in nodes {
        visitor(node);
        walk(&node.children, visitor);
    }
}

/// Collect the path of every node in pre-order.
#[must_use]
pub fn collect_paths(nodes: &[FieldNode]) -> Vec<FieldPath> {
    let mut paths = Vec::new();
    walk(nodes, &mut |node| paths.push(node.path.clone()));
    paths
}
