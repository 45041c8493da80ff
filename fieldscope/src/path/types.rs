//! Core types for field path handling.
//!
//! This module defines [`FieldPath`], the dot-segmented address of a node
//! within a field tree.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// The address of a node within a field tree.
///
/// A path is an ordered sequence of key segments from the tree root to a
/// node. Its dot-joined textual form (`"image.tag"`) is the key used by the
/// flat canonical representation, so the two forms are freely convertible.
///
/// Paths serialize as their textual form.
///
/// # Examples
///
/// ```
/// use fieldscope::FieldPath;
///
/// let path = FieldPath::parse("image.tag").unwrap();
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.last(), Some("tag"));
/// assert_eq!(path.to_string(), "image.tag");
///
/// let parent = path.parent().unwrap();
/// assert_eq!(parent.to_string(), "image");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a path from its dot-joined textual form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the text is empty or contains an
    /// empty segment (leading, trailing, or doubled dots).
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// assert!(FieldPath::parse("image.tag").is_ok());
    /// assert!(FieldPath::parse("").is_err());
    /// assert!(FieldPath::parse("a..b").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidPath {
                path: text.to_string(),
                reason: "path must not be empty".to_string(),
            });
        }

        let segments: Vec<String> = text.split('.').map(ToString::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidPath {
                path: text.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }

        Ok(Self { segments })
    }

    /// Build a path from an explicit sequence of segments.
    ///
    /// Empty segments are rejected the same way [`FieldPath::parse`] rejects
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the sequence is empty or contains
    /// an empty segment.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: "path must not be empty".to_string(),
            });
        }
        if segments.iter().any(String::is_empty) {
            return Err(Error::InvalidPath {
                path: segments.join("."),
                reason: "path contains an empty segment".to_string(),
            });
        }
        Ok(Self { segments })
    }

    /// The path consisting of a single segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// let root = FieldPath::root_level("image");
    /// assert_eq!(root.depth(), 1);
    /// ```
    #[must_use]
    pub fn root_level(segment: &str) -> Self {
        Self {
            segments: vec![segment.to_string()],
        }
    }

    /// The ordered segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The number of segments in this path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The final segment, i.e. the local key of the addressed node.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// The parent path, or `None` for a root-level path.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// let path = FieldPath::parse("a.b.c").unwrap();
    /// assert_eq!(path.parent().unwrap().to_string(), "a.b");
    ///
    /// let root = FieldPath::parse("a").unwrap();
    /// assert!(root.parent().is_none());
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() <= 1 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// A new path with `segment` appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// let path = FieldPath::parse("image").unwrap();
    /// assert_eq!(path.child("tag").to_string(), "image.tag");
    /// ```
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    /// Whether this path starts with `prefix` (segment-wise, including
    /// equality).
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// let path = FieldPath::parse("a.b.c").unwrap();
    /// let prefix = FieldPath::parse("a.b").unwrap();
    /// assert!(path.starts_with(&prefix));
    /// assert!(path.starts_with(&path));
    /// assert!(!prefix.starts_with(&path));
    /// ```
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// Whether this path is the direct child of `parent` (exactly one
    /// segment longer, sharing its prefix).
    #[must_use]
    pub fn is_child_of(&self, parent: &Self) -> bool {
        self.segments.len() == parent.segments.len() + 1 && self.starts_with(parent)
    }

    /// Every proper prefix of this path, shortest first.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::FieldPath;
    ///
    /// let path = FieldPath::parse("a.b.c").unwrap();
    /// let ancestors: Vec<String> =
    ///     path.ancestors().iter().map(ToString::to_string).collect();
    /// assert_eq!(ancestors, vec!["a", "a.b"]);
    /// ```
    #[must_use]
    pub fn ancestors(&self) -> Vec<Self> {
        (1..self.segments.len())
            .map(|len| Self {
                segments: self.segments[..len].to_vec(),
            })
            .collect()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(|e| D::Error::custom(e.to_string()))
    }
}
