//! Expose command implementation.
//!
//! This module implements the `expose` command, which toggles a field's
//! exposed facet through the propagation engine.

use crate::error::CliError;
use crate::utils::{emit_tree, load_tree_file, parse_path_arg, GlobalOptions};
use clap::Args;
use fieldscope::propagate::set_facet;
use fieldscope::Facet;

/// Toggle a field's exposed facet.
#[derive(Args)]
pub struct ExposeCommand {
    /// Path of the field to expose (dot-separated)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Hide the field instead of exposing it
    #[arg(long)]
    pub off: bool,

    /// Write the result back to the tree file
    #[arg(long)]
    pub write: bool,
}

impl ExposeCommand {
    /// Execute the expose command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path_arg(&self.path)?;
        let tree = load_tree_file(global)?;
        let updated = set_facet(&tree, &path, Facet::Exposed, !self.off);
        emit_tree(&updated, global, self.write)
    }
}
