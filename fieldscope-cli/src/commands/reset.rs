//! Reset command implementation.
//!
//! This module implements the `reset` command, which restores a field (or,
//! with `--recursive`, every customized field under it) to template state.

use crate::error::CliError;
use crate::utils::{emit_tree, load_tree_file, parse_path_arg, GlobalOptions};
use clap::Args;
use fieldscope::customize::{customized_descendants, reset, reset_paths};

/// Restore a field to its template state.
#[derive(Args)]
pub struct ResetCommand {
    /// Path of the field to reset (dot-separated)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Also reset every customized field underneath
    #[arg(long)]
    pub recursive: bool,

    /// Write the result back to the tree file
    #[arg(long)]
    pub write: bool,
}

impl ResetCommand {
    /// Execute the reset command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path_arg(&self.path)?;
        let tree = load_tree_file(global)?;

        let updated = if self.recursive {
            let targets = customized_descendants(&tree, &path);
            if global.verbose {
                eprintln!("resetting {} customized field(s)", targets.len());
            }
            reset_paths(&tree, &targets)
        } else {
            reset(&tree, &path)
        };
        emit_tree(&updated, global, self.write)
    }
}
