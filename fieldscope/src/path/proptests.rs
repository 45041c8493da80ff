//! Property-based tests for field path handling.

use proptest::prelude::*;

use crate::path::{FieldPath, PathRelationship};

/// Strategy producing a valid path segment.
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,11}"
}

/// Strategy producing a valid field path of 1..=5 segments.
fn field_path() -> impl Strategy<Value = FieldPath> {
    prop::collection::vec(segment(), 1..=5)
        .prop_map(|segs| FieldPath::from_segments(segs).unwrap())
}

proptest! {
    /// Parsing the textual form of a path yields the same path.
    #[test]
    fn prop_display_parse_roundtrip(path in field_path()) {
        let text = path.to_string();
        let parsed = FieldPath::parse(&text).unwrap();
        prop_assert_eq!(parsed, path);
    }

    /// A child path's parent is the original path.
    #[test]
    fn prop_child_parent_inverse(path in field_path(), seg in segment()) {
        let child = path.child(&seg);
        prop_assert_eq!(child.parent().unwrap(), path.clone());
        prop_assert!(child.is_child_of(&path));
        prop_assert!(child.starts_with(&path));
    }

    /// Ancestor/Descendant are mirror images of each other.
    #[test]
    fn prop_relationship_symmetry(a in field_path(), b in field_path()) {
        let forward = PathRelationship::between(&a, &b);
        let backward = PathRelationship::between(&b, &a);
        let expected = match forward {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(backward, expected);
    }

    /// Every entry of `ancestors()` is a strict ancestor of the path.
    #[test]
    fn prop_ancestors_are_ancestors(path in field_path()) {
        for ancestor in path.ancestors() {
            prop_assert_eq!(
                PathRelationship::between(&ancestor, &path),
                PathRelationship::Ancestor
            );
        }
        prop_assert_eq!(path.ancestors().len(), path.depth() - 1);
    }
}
