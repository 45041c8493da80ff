//! The facet propagation engine.
//!
//! Two independent boolean facets, `exposed` and `overridable`, are
//! propagated by the same algorithm, parameterized over [`Facet`]. A single
//! facet edit on one node ripples through the tree in both directions:
//!
//! - **Top-down**: the new value is mirrored onto every descendant of the
//!   edited node. Hiding a subtree (`exposed = false`) also clears
//!   `overridable` throughout it, since a field cannot be overridable while
//!   hidden.
//! - **Bottom-up on enable**: every ancestor of an enabled node becomes
//!   `exposed` (and `overridable` too when that facet was enabled), so an
//!   enabled leaf is always reachable from the root.
//! - **Bottom-up on disable**: an object whose direct children are now all
//!   disabled collapses to disabled itself. This is evaluated as a full
//!   deepest-first sweep over the whole tree, not just the edited node's
//!   ancestor chain: disabling one leaf can complete the
//!   all-children-disabled condition of a distant ancestor once earlier
//!   toggles are taken into account.
//!
//! [`normalize`] re-derives the closure rules over a whole tree and is
//! idempotent; [`set_facet`] leaves the tree fully propagated before
//! returning, so downstream consumers (filtering, expansion state) never
//! observe a partially propagated tree.

use crate::path::FieldPath;
use crate::tree::{contains_path, update_subtree, FieldNode};

/// The closed set of propagated facets.
///
/// # Examples
///
/// ```
/// use fieldscope::Facet;
///
/// assert_eq!(Facet::Exposed.to_string(), "exposed");
/// assert_eq!(Facet::Overridable.to_string(), "overridable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    /// Whether downstream instances can see the field.
    Exposed,
    /// Whether downstream instances may change the field's value.
    Overridable,
}

impl Facet {
    /// Read this facet from a node.
    #[must_use]
    pub fn get(&self, node: &FieldNode) -> bool {
        match self {
            Self::Exposed => node.exposed,
            Self::Overridable => node.overridable,
        }
    }

    /// Write this facet on a node, enforcing the node-level invariant that
    /// `overridable` implies `exposed`.
    ///
    /// Enabling `overridable` raises `exposed`; disabling `exposed` clears
    /// `overridable`. Disabling `overridable` leaves `exposed` untouched.
    pub fn apply(&self, node: &mut FieldNode, value: bool) {
        match (self, value) {
            (Self::Exposed, true) => node.exposed = true,
            (Self::Exposed, false) => {
                node.exposed = false;
                node.overridable = false;
            }
            (Self::Overridable, true) => {
                node.overridable = true;
                node.exposed = true;
            }
            (Self::Overridable, false) => node.overridable = false,
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exposed => write!(f, "exposed"),
            Self::Overridable => write!(f, "overridable"),
        }
    }
}

/// Set a facet on the node at `path` and propagate the change through the
/// whole tree.
///
/// Returns a new, fully propagated tree. If no node has the given path the
/// input tree is returned unchanged (silent no-op).
///
/// # Examples
///
/// ```
/// use fieldscope::{Facet, FieldNode, FieldPath, FieldType};
/// use fieldscope::propagate::set_facet;
/// use fieldscope::tree::find_by_path;
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_children(vec![tag]);
/// let tree = vec![image];
///
/// // Enabling a leaf enables its whole ancestor chain.
/// let path = FieldPath::parse("image.tag").unwrap();
/// let tree = set_facet(&tree, &path, Facet::Exposed, true);
/// assert!(find_by_path(&tree, &FieldPath::parse("image").unwrap()).unwrap().exposed);
/// ```
#[must_use]
pub fn set_facet(tree: &[FieldNode], path: &FieldPath, facet: Facet, value: bool) -> Vec<FieldNode> {
    if !contains_path(tree, path) {
        log::debug!("set_facet miss: no node at '{path}', tree unchanged");
        return tree.to_vec();
    }

    log::debug!("set_facet: {facet} := {value} at '{path}'");

    // Direct update plus top-down mirror over the addressed subtree.
    let mirrored = update_subtree(tree, path, |node| facet.apply(node, value));

    // Bottom-up closures over the whole tree: ancestor-enabling for the
    // raised facets, deepest-first collapse for the lowered ones.
    normalize(&mirrored)
}

/// Re-derive the bottom-up/top-down closure rules over a whole tree.
///
/// For every object node with at least one child, each facet is the
/// disjunction of its children's facet values: one enabled descendant keeps
/// the whole ancestor chain enabled, and all-children-disabled collapses
/// the parent. Node-level, `overridable` implies `exposed`.
///
/// Running this on an already-propagated tree is a no-op, which makes it
/// safe to call after every facet edit.
#[must_use]
pub fn normalize(tree: &[FieldNode]) -> Vec<FieldNode> {
    tree.iter().map(normalize_node).collect()
}

fn normalize_node(node: &FieldNode) -> FieldNode {
    let mut updated = node.clone();
    updated.children = node.children.iter().map(normalize_node).collect();

    // Container facets are derived from the (already normalized) children.
    if !updated.children.is_empty() {
        updated.exposed = updated.children.iter().any(|c| c.exposed);
        updated.overridable = updated.children.iter().any(|c| c.overridable);
    }

    if updated.overridable {
        updated.exposed = true;
    }
    if !updated.exposed {
        updated.overridable = false;
    }

    updated
}

/// Whether every node in the tree satisfies the propagation invariants.
///
/// Checked: `overridable` implies `exposed` on every node, and for every
/// object node with children, each facet equals the disjunction of its
/// children's values. Useful for consistency checks over externally
/// supplied trees.
#[must_use]
pub fn is_propagated(tree: &[FieldNode]) -> bool {
    tree.iter().all(node_is_propagated)
}

fn node_is_propagated(node: &FieldNode) -> bool {
    if node.overridable && !node.exposed {
        return false;
    }
    if !node.children.is_empty() {
        let any_exposed = node.children.iter().any(|c| c.exposed);
        let any_overridable = node.children.iter().any(|c| c.overridable);
        if node.exposed != any_exposed || node.overridable != any_overridable {
            return false;
        }
    }
    node.children.iter().all(node_is_propagated)
}
