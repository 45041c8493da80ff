//! Field path relationship checking.
//!
//! This module provides functionality to determine the relationship between
//! two field paths, such as whether one addresses an ancestor or descendant
//! of the other.

use crate::path::FieldPath;

/// Relationship between two field paths.
///
/// This enum describes how two paths relate to each other in the field tree
/// hierarchy.
///
/// # Examples
///
/// ```
/// use fieldscope::{FieldPath, PathRelationship};
///
/// let parent = FieldPath::parse("image").unwrap();
/// let child = FieldPath::parse("image.tag").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    ///
    /// This means the second path addresses a node somewhere beneath the
    /// first in the field tree.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths address the same node.
    Same,

    /// The paths are unrelated.
    ///
    /// Neither path is an ancestor or descendant of the other - they are in
    /// different branches of the field tree.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths by comparing their
    /// segment prefixes.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::{FieldPath, PathRelationship};
    ///
    /// let a = FieldPath::parse("a").unwrap();
    /// let ab = FieldPath::parse("a.b").unwrap();
    /// let b = FieldPath::parse("b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &FieldPath, path2: &FieldPath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if path2.starts_with(path1) {
            return Self::Ancestor;
        }

        if path1.starts_with(path2) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`, and `false`
    /// for `Unrelated`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }
}
