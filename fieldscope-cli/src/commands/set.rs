//! Set command implementation.
//!
//! This module implements the `set` command, which writes a JSON value
//! into a field. Writing a value marks the field as blueprint-customized.

use crate::error::CliError;
use crate::utils::{emit_tree, load_tree_file, parse_path_arg, GlobalOptions};
use clap::Args;
use fieldscope::customize::set_value;

/// Write a JSON value into a field.
#[derive(Args)]
pub struct SetCommand {
    /// Path of the field to set (dot-separated)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// The value as JSON; bare words are read as strings
    #[arg(value_name = "VALUE", required_unless_present = "clear")]
    pub value: Option<String>,

    /// Clear the field's value instead of setting one
    #[arg(long, conflicts_with = "value")]
    pub clear: bool,

    /// Write the result back to the tree file
    #[arg(long)]
    pub write: bool,
}

impl SetCommand {
    /// Execute the set command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path_arg(&self.path)?;
        let value = match (self.clear, self.value.as_deref()) {
            (true, _) => None,
            (false, Some(text)) => Some(parse_value(text)),
            (false, None) => {
                return Err(CliError::InvalidArguments(
                    "a value is required unless --clear is given".to_string(),
                ))
            }
        };

        let tree = load_tree_file(global)?;
        let updated = set_value(&tree, &path, value);
        emit_tree(&updated, global, self.write)
    }
}

/// Parse a value argument as JSON, falling back to a plain string.
///
/// `3`, `true`, `"x"`, and `{"a":1}` parse as their JSON types; anything
/// that is not valid JSON (like `latest`) becomes a string.
fn parse_value(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
