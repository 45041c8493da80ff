//! Filter command implementation.
//!
//! This module implements the `filter` command, which prints the subtree
//! matching a text query and facet predicates. Ancestors of matches are
//! kept so the output is always a valid tree.

use crate::error::CliError;
use crate::utils::{load_tree_file, print_yaml, GlobalOptions};
use clap::Args;
use fieldscope::filter::filter;
use fieldscope::FieldFilter;

/// Print the subtree matching a filter.
#[derive(Args)]
pub struct FilterCommand {
    /// Substring matched against keys, display names, and paths
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Keep only exposed fields
    #[arg(long)]
    pub exposed: bool,

    /// Keep only overridable fields
    #[arg(long)]
    pub overridable: bool,

    /// Keep only blueprint-customized fields
    #[arg(long)]
    pub customized: bool,
}

impl FilterCommand {
    /// Execute the filter command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let spec = FieldFilter {
            query: self.query,
            only_exposed: self.exposed,
            only_overridable: self.overridable,
            only_customized: self.customized,
        };

        let tree = load_tree_file(global)?;
        let matched = filter(&tree, &spec);
        if matched.is_empty() && !global.quiet {
            eprintln!("no fields matched");
        }
        print_yaml(&matched)
    }
}
