//! Check command implementation.
//!
//! This module implements the `check` command, which verifies the facet
//! invariants of a tree file: overridable fields must be exposed, and
//! every container's facets must agree with its children. Flat-map input
//! is additionally checked for well-formedness (a root entry, no orphan
//! paths). Any violation is a semantic failure with exit code 1.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use fieldscope::propagate::normalize;
use fieldscope::schema::load_tree;
use fieldscope::tree::{find_by_path, walk};

/// Verify facet invariants and flat-map well-formedness.
#[derive(Args)]
pub struct CheckCommand {}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let file = global.require_file()?;
        let conversion = load_tree(file).map_err(CliError::from)?;

        let mut violations: Vec<String> = conversion
            .diagnostics
            .iter()
            .map(ToString::to_string)
            .collect();

        // A propagated tree is a fixed point of normalization; any node
        // that normalization would change is out of line.
        let normalized = normalize(&conversion.tree);
        walk(&conversion.tree, &mut |node| {
            let Some(expected) = find_by_path(&normalized, &node.path) else {
                return;
            };
            if node.overridable && !node.exposed {
                violations.push(format!("{}: overridable but not exposed", node.path));
            } else if node.exposed != expected.exposed {
                violations.push(format!(
                    "{}: exposed={} disagrees with its children",
                    node.path, node.exposed
                ));
            } else if node.overridable != expected.overridable {
                violations.push(format!(
                    "{}: overridable={} disagrees with its children",
                    node.path, node.overridable
                ));
            }
        });

        if violations.is_empty() {
            if !global.quiet {
                println!("ok");
            }
            return Ok(());
        }

        for violation in &violations {
            println!("{violation}");
        }
        Err(CliError::SemanticFailure(format!(
            "{} invariant violation(s)",
            violations.len()
        )))
    }
}
