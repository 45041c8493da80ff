//! Override command implementation.
//!
//! This module implements the `override` command, which toggles a field's
//! overridable facet through the propagation engine. Making a field
//! overridable also exposes it.

use crate::error::CliError;
use crate::utils::{emit_tree, load_tree_file, parse_path_arg, GlobalOptions};
use clap::Args;
use fieldscope::propagate::set_facet;
use fieldscope::Facet;

/// Toggle a field's overridable facet.
#[derive(Args)]
pub struct OverrideCommand {
    /// Path of the field to make overridable (dot-separated)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Lock the field instead of making it overridable
    #[arg(long)]
    pub off: bool,

    /// Write the result back to the tree file
    #[arg(long)]
    pub write: bool,
}

impl OverrideCommand {
    /// Execute the override command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path_arg(&self.path)?;
        let tree = load_tree_file(global)?;
        let updated = set_facet(&tree, &path, Facet::Overridable, !self.off);
        emit_tree(&updated, global, self.write)
    }
}
