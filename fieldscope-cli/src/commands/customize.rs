//! Customize command implementation.
//!
//! This module implements the `customize` command, which seeds a field for
//! blueprint customization: the template's value is copied into the
//! working value and the field's provenance flips to blueprint.

use crate::error::CliError;
use crate::utils::{emit_tree, load_tree_file, parse_path_arg, GlobalOptions};
use clap::Args;
use fieldscope::customize::customize;

/// Seed a field for blueprint customization.
#[derive(Args)]
pub struct CustomizeCommand {
    /// Path of the field to customize (dot-separated)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Write the result back to the tree file
    #[arg(long)]
    pub write: bool,
}

impl CustomizeCommand {
    /// Execute the customize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path_arg(&self.path)?;
        let tree = load_tree_file(global)?;
        let updated = customize(&tree, &path);
        emit_tree(&updated, global, self.write)
    }
}
