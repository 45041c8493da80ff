//! Template schemas, persistence, and value validation hooks.
//!
//! A template ships a schema describing its field tree. Where schemas come
//! from is abstracted behind [`SchemaSource`] so callers can plug in a
//! registry client, a filesystem layout, or a test fixture. Trees are
//! persisted in either of the two canonical shapes (nested tree or flat
//! map) and in YAML or JSON, selected by file extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::canonical::{to_tree, CanonicalConfiguration, TreeConversion};
use crate::error::{Error, Result};
use crate::tree::FieldNode;

/// A template's field schema as delivered by a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSchema {
    /// The field tree described by the schema.
    pub fields: Vec<FieldNode>,

    /// The raw document the schema was parsed from, when the source
    /// retains it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_yaml: Option<String>,
}

impl TemplateSchema {
    /// Creates a schema from a field tree with no raw document attached.
    #[must_use]
    pub fn new(fields: Vec<FieldNode>) -> Self {
        Self {
            fields,
            raw_yaml: None,
        }
    }
}

/// Where template schemas come from.
///
/// Implementations should return [`Error::SchemaNotFound`] when the
/// template does not exist and [`Error::SchemaTransport`] for retrieval
/// failures, so callers can distinguish the two with
/// [`Error::is_not_found`] and [`Error::is_fetch_failure`].
pub trait SchemaSource {
    /// Fetches the schema for `template`.
    fn fetch(&self, template: &str) -> Result<TemplateSchema>;
}

/// A [`SchemaSource`] backed by a directory of schema documents.
///
/// Looks for `<dir>/<template>.yaml`, then `<dir>/<template>.yml`, then
/// `<dir>/<template>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySchemaSource {
    dir: PathBuf,
}

impl DirectorySchemaSource {
    /// Creates a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn candidate_paths(&self, template: &str) -> [PathBuf; 3] {
        [
            self.dir.join(format!("{template}.yaml")),
            self.dir.join(format!("{template}.yml")),
            self.dir.join(format!("{template}.json")),
        ]
    }
}

impl SchemaSource for DirectorySchemaSource {
    fn fetch(&self, template: &str) -> Result<TemplateSchema> {
        let Some(path) = self
            .candidate_paths(template)
            .into_iter()
            .find(|candidate| candidate.exists())
        else {
            return Err(Error::SchemaNotFound {
                template: template.to_string(),
            });
        };

        let raw = fs::read_to_string(&path).map_err(|err| Error::SchemaTransport {
            template: template.to_string(),
            reason: err.to_string(),
        })?;

        let conversion = parse_tree(&raw, &path)?;
        log::debug!(
            "loaded schema for '{template}' from {} ({} diagnostics)",
            path.display(),
            conversion.diagnostics.len()
        );
        Ok(TemplateSchema {
            fields: conversion.tree,
            raw_yaml: Some(raw),
        })
    }
}

/// Outcome of validating a proposed value against a field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the value is acceptable.
    pub is_valid: bool,

    /// Message to surface when the value is rejected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Non-blocking caution to surface alongside an accepted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,

    /// A replacement the validator recommends instead of the proposed
    /// value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<Value>,
}

impl ValidationOutcome {
    /// An unconditional acceptance.
    #[must_use]
    pub fn accept() -> Self {
        Self {
            is_valid: true,
            ..Self::default()
        }
    }

    /// A rejection with a message.
    #[must_use]
    pub fn reject(message: &str) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.to_string()),
            ..Self::default()
        }
    }
}

/// Validates proposed values before they are written into a tree.
pub trait ValueValidator {
    /// Judges `value` as a replacement for the current value of `node`.
    fn validate(&self, node: &FieldNode, value: &Value) -> ValidationOutcome;
}

/// A [`ValueValidator`] that accepts every value.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ValueValidator for AcceptAll {
    fn validate(&self, _node: &FieldNode, _value: &Value) -> ValidationOutcome {
        ValidationOutcome::accept()
    }
}

/// The two persisted shapes a document may hold.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PersistedDocument {
    Canonical(CanonicalConfiguration),
    Tree(Vec<FieldNode>),
}

/// Loads a field tree from `path`, accepting both persisted shapes.
///
/// `.yaml`/`.yml` documents are parsed as YAML, `.json` as JSON; any other
/// extension is rejected with [`Error::UnsupportedFormat`]. A flat-map
/// document is converted to tree form, and its conversion diagnostics are
/// carried on the returned [`TreeConversion`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, its extension is not a
/// supported format, or the document fails to parse as either shape.
pub fn load_tree(path: &Path) -> Result<TreeConversion> {
    let raw = fs::read_to_string(path)?;
    parse_tree(&raw, path)
}

fn parse_tree(raw: &str, path: &Path) -> Result<TreeConversion> {
    let document: PersistedDocument = match extension_of(path)? {
        DocumentFormat::Yaml => serde_yaml::from_str(raw)?,
        DocumentFormat::Json => serde_json::from_str(raw)?,
    };
    Ok(match document {
        PersistedDocument::Tree(tree) => TreeConversion {
            tree,
            diagnostics: Vec::new(),
        },
        PersistedDocument::Canonical(config) => to_tree(&config),
    })
}

/// Writes a field tree to `path` in its nested shape, format by extension.
///
/// # Errors
///
/// Returns an error if serialization fails, the extension is not a
/// supported format, or the file cannot be written.
pub fn save_tree(path: &Path, tree: &[FieldNode]) -> Result<()> {
    let rendered = match extension_of(path)? {
        DocumentFormat::Yaml => serde_yaml::to_string(tree)?,
        DocumentFormat::Json => serde_json::to_string_pretty(tree)?,
    };
    fs::write(path, rendered)?;
    Ok(())
}

/// Writes a flat-map configuration to `path`, format by extension.
///
/// # Errors
///
/// Returns an error if serialization fails, the extension is not a
/// supported format, or the file cannot be written.
pub fn save_canonical(path: &Path, config: &CanonicalConfiguration) -> Result<()> {
    let rendered = match extension_of(path)? {
        DocumentFormat::Yaml => serde_yaml::to_string(config)?,
        DocumentFormat::Json => serde_json::to_string_pretty(config)?,
    };
    fs::write(path, rendered)?;
    Ok(())
}

enum DocumentFormat {
    Yaml,
    Json,
}

fn extension_of(path: &Path) -> Result<DocumentFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => Ok(DocumentFormat::Yaml),
        Some("json") => Ok(DocumentFormat::Json),
        other => Err(Error::UnsupportedFormat {
            reason: format!(
                "unsupported file extension {:?} for {}, expected yaml, yml, or json",
                other.unwrap_or(""),
                path.display()
            ),
        }),
    }
}
