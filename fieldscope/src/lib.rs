#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fieldscope
//!
//! A library for modeling per-template field configuration and blueprint
//! exposure.
//!
//! A template ships a tree of typed fields; a blueprint layered on top
//! decides which fields downstream instances can see and change, and may
//! customize values of its own. This library provides the tree model, the
//! facet propagation engine that keeps exposure flags consistent across
//! the hierarchy, the flat-map representation used for storage, and the
//! session plumbing an editor builds on.
//!
//! ## Core Types
//!
//! - [`FieldNode`] and [`FieldPath`]: The field tree and its addressing
//! - [`Facet`]: The exposed/overridable flags and their propagation
//! - [`CanonicalConfiguration`](canonical::CanonicalConfiguration): The
//!   flat-map persisted shape
//! - [`EditorSession`] and [`EditAction`]: Mutation funnel for editors
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use fieldscope::{Facet, FieldNode, FieldPath, FieldType};
//! use fieldscope::propagate::set_facet;
//! use fieldscope::tree::find_by_path;
//!
//! let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
//! let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
//!     .with_children(vec![tag]);
//!
//! // Exposing a leaf makes its ancestors visible too.
//! let tree = set_facet(&[image], &FieldPath::parse("image.tag").unwrap(), Facet::Exposed, true);
//! let image = find_by_path(&tree, &FieldPath::parse("image").unwrap()).unwrap();
//! assert!(image.exposed);
//! ```

pub mod canonical;
pub mod contract;
pub mod customize;
pub mod error;
pub mod expansion;
pub mod filter;
pub mod logging;
pub mod path;
pub mod propagate;
pub mod schema;
pub mod session;
pub mod tree;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use expansion::ExpansionState;
pub use filter::FieldFilter;
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{FieldPath, PathRelationship};
pub use propagate::Facet;
pub use session::{EditAction, EditorSession};
pub use tree::{FieldNode, FieldType, ValueSource};
