//! Editing sessions over a field tree.
//!
//! A session owns the working tree and its expansion state, and funnels
//! every mutation through [`EditAction`] so the facet propagation pass and
//! expansion-state upkeep run exactly once per edit, in the right order.

use serde_json::Value;

use crate::customize::{customize, customized_descendants, reset, reset_paths, set_value};
use crate::error::{Error, Result};
use crate::expansion::ExpansionState;
use crate::filter::{filter, FieldFilter};
use crate::path::FieldPath;
use crate::propagate::{set_facet, Facet};
use crate::schema::{ValidationOutcome, ValueValidator};
use crate::tree::{find_by_path, FieldNode};

/// A single edit applied to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Set the exposed facet at a path, with propagation.
    SetExposed(FieldPath, bool),
    /// Set the overridable facet at a path, with propagation.
    SetOverridable(FieldPath, bool),
    /// Write or clear a field's value.
    SetValue(FieldPath, Option<Value>),
    /// Seed a field for blueprint customization.
    Customize(FieldPath),
    /// Restore a field to its template state.
    Reset(FieldPath),
    /// Restore every customized field under a path, the path included.
    ResetDescendants(FieldPath),
}

/// A working tree plus the presentation state attached to it.
///
/// # Examples
///
/// ```
/// use fieldscope::{EditAction, EditorSession, Facet, FieldNode, FieldPath, FieldType};
///
/// let tag = FieldNode::new("tag", FieldPath::parse("image.tag").unwrap(), FieldType::String);
/// let image = FieldNode::new("image", FieldPath::parse("image").unwrap(), FieldType::Object)
///     .with_children(vec![tag]);
/// let mut session = EditorSession::new(vec![image]);
///
/// session.apply(EditAction::SetExposed(FieldPath::parse("image.tag").unwrap(), true));
/// let image = fieldscope::tree::find_by_path(session.tree(), &FieldPath::parse("image").unwrap());
/// assert!(image.unwrap().exposed);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorSession {
    tree: Vec<FieldNode>,
    expansion: ExpansionState,
}

impl EditorSession {
    /// Creates a session over `tree` with everything collapsed.
    #[must_use]
    pub fn new(tree: Vec<FieldNode>) -> Self {
        Self {
            tree,
            expansion: ExpansionState::new(),
        }
    }

    /// Creates a session over a freshly fetched template schema.
    #[must_use]
    pub fn from_schema(schema: crate::schema::TemplateSchema) -> Self {
        Self::new(schema.fields)
    }

    /// The current working tree.
    #[must_use]
    pub fn tree(&self) -> &[FieldNode] {
        &self.tree
    }

    /// The current expansion state.
    #[must_use]
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Applies one edit.
    ///
    /// Facet edits run the propagation pass as part of the update.
    /// Customizing a field expands its ancestors so the result is visible.
    /// After every edit the expansion state is re-validated against the
    /// tree.
    pub fn apply(&mut self, action: EditAction) {
        self.tree = match &action {
            EditAction::SetExposed(path, value) => {
                set_facet(&self.tree, path, Facet::Exposed, *value)
            }
            EditAction::SetOverridable(path, value) => {
                set_facet(&self.tree, path, Facet::Overridable, *value)
            }
            EditAction::SetValue(path, value) => set_value(&self.tree, path, value.clone()),
            EditAction::Customize(path) => {
                self.expansion.expand_ancestors(path);
                customize(&self.tree, path)
            }
            EditAction::Reset(path) => reset(&self.tree, path),
            EditAction::ResetDescendants(path) => {
                let targets = customized_descendants(&self.tree, path);
                reset_paths(&self.tree, &targets)
            }
        };
        self.expansion.validate(&self.tree);
    }

    /// Writes a value after running it past `validator`.
    ///
    /// A rejected value leaves the tree untouched. When the validator
    /// suggests a replacement, the suggestion is written instead of the
    /// proposed value. The outcome is returned either way so callers can
    /// surface warnings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the validator rejects the value.
    pub fn set_value_validated(
        &mut self,
        path: &FieldPath,
        value: Value,
        validator: &dyn ValueValidator,
    ) -> Result<ValidationOutcome> {
        let Some(node) = find_by_path(&self.tree, path) else {
            log::debug!("set_value_validated miss: no node at '{path}'");
            return Ok(ValidationOutcome::accept());
        };

        let outcome = validator.validate(node, &value);
        if !outcome.is_valid {
            return Err(Error::Validation {
                field: path.to_string(),
                message: outcome
                    .error_message
                    .clone()
                    .unwrap_or_else(|| "value rejected".to_string()),
            });
        }

        let accepted = outcome.suggested_value.clone().unwrap_or(value);
        self.apply(EditAction::SetValue(path.clone(), Some(accepted)));
        Ok(outcome)
    }

    /// Flips the expansion of a container path.
    pub fn toggle_expansion(&mut self, path: &FieldPath) {
        self.expansion.toggle(path);
    }

    /// The working tree narrowed by `spec`, structure preserved.
    #[must_use]
    pub fn filtered(&self, spec: &FieldFilter) -> Vec<FieldNode> {
        filter(&self.tree, spec)
    }

    /// The exposed surface of the working tree as nested JSON.
    #[must_use]
    pub fn contract(&self) -> Value {
        crate::contract::generate_exposed_contract(&self.tree)
    }
}
