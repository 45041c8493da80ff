//! Error types for the fieldscope library.
//!
//! This module provides the error hierarchy for all operations in the
//! fieldscope library, using `thiserror` for ergonomic error handling.
//!
//! Note that a lookup addressing a path absent from the current tree is
//! deliberately NOT an error: the displayed tree and the underlying tree can
//! transiently diverge during filtering, so resolver misses are silent
//! no-ops (see [`crate::tree::update_by_path`]).

use thiserror::Error;

/// Result type alias for operations that may fail with a fieldscope error.
///
/// # Examples
///
/// ```
/// use fieldscope::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fieldscope library.
///
/// This enum encompasses all possible error conditions that can occur while
/// loading, editing, and exporting field configuration trees.
#[derive(Debug, Error)]
pub enum Error {
    /// A field path string could not be parsed.
    #[error("invalid field path '{path}': {reason}")]
    InvalidPath {
        /// The offending path text.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A value failed validation against its owning field.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested template schema does not exist.
    #[error("template schema not found: {template}")]
    SchemaNotFound {
        /// The template identifier that was requested.
        template: String,
    },

    /// The template schema could not be fetched for transport reasons.
    #[error("schema fetch failed for template '{template}': {reason}")]
    SchemaTransport {
        /// The template identifier that was requested.
        template: String,
        /// A description of the transport failure.
        reason: String,
    },

    /// A YAML serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A persisted document did not contain a recognizable representation.
    #[error("unsupported document format: {reason}")]
    UnsupportedFormat {
        /// The reason the document was rejected.
        reason: String,
    },
}

impl Error {
    /// Check if error indicates a missing template schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::Error;
    ///
    /// let err = Error::SchemaNotFound { template: "nginx".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SchemaNotFound { .. })
    }

    /// Check if error is a schema fetch failure of either kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldscope::Error;
    ///
    /// let err = Error::SchemaTransport {
    ///     template: "nginx".to_string(),
    ///     reason: "connection refused".to_string(),
    /// };
    /// assert!(err.is_fetch_failure());
    /// ```
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::SchemaNotFound { .. } | Self::SchemaTransport { .. }
        )
    }
}
