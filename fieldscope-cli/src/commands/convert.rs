//! Convert command implementation.
//!
//! This module implements the `convert` command, which rewrites a tree
//! file between its two persisted shapes: the nested tree and the flat
//! path-keyed map. Conversion diagnostics from malformed flat-map input
//! are printed on stderr; the conversion itself is tolerant and proceeds.

use crate::error::CliError;
use crate::utils::{load_tree_file, print_json, print_yaml, GlobalOptions};
use clap::{Args, ValueEnum};
use fieldscope::canonical::to_canonical;

/// Convert between the nested and flat representations.
#[derive(Args)]
pub struct ConvertCommand {
    /// Target representation
    #[arg(long, value_enum, value_name = "SHAPE")]
    pub to: TargetShape,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml", ignore_case = true)]
    pub format: ConvertFormat,
}

/// Target representation for conversion.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TargetShape {
    /// Nested field tree
    Tree,
    /// Flat path-keyed map
    Canonical,
}

/// Output format for the convert command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ConvertFormat {
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    Json,
}

impl ConvertCommand {
    /// Execute the convert command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Loading accepts both shapes and reports flat-map diagnostics
        let tree = load_tree_file(global)?;

        match (self.to, self.format) {
            (TargetShape::Tree, ConvertFormat::Yaml) => print_yaml(&tree),
            (TargetShape::Tree, ConvertFormat::Json) => print_json(&tree),
            (TargetShape::Canonical, ConvertFormat::Yaml) => print_yaml(&to_canonical(&tree)),
            (TargetShape::Canonical, ConvertFormat::Json) => print_json(&to_canonical(&tree)),
        }
    }
}
