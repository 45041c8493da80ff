//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! resolving the tree file from global options, loading and saving trees,
//! and shared output helpers.

use crate::error::CliError;
use fieldscope::schema::{load_tree, save_tree};
use fieldscope::tree::FieldNode;
use fieldscope::FieldPath;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// The field tree file to operate on.
    pub file: Option<PathBuf>,
}

impl GlobalOptions {
    /// The tree file path, or an arguments error when none was given.
    pub fn require_file(&self) -> Result<&PathBuf, CliError> {
        self.file.as_ref().ok_or_else(|| {
            CliError::InvalidArguments(
                "no tree file given (use --file or set FIELDSCOPE_FILE)".to_string(),
            )
        })
    }
}

/// Load the field tree from the global `--file` option.
///
/// Accepts both persisted shapes. Conversion diagnostics from a flat-map
/// document are reported on stderr unless suppressed; they never fail the
/// load.
pub fn load_tree_file(global: &GlobalOptions) -> Result<Vec<FieldNode>, CliError> {
    let file = global.require_file()?;
    let conversion = load_tree(file).map_err(CliError::from)?;

    if !global.quiet {
        for diagnostic in &conversion.diagnostics {
            eprintln!("warning: {diagnostic}");
        }
    }
    Ok(conversion.tree)
}

/// Write an edited tree back to the file, or print it to stdout.
///
/// With `write` the tree replaces the input file in its nested shape;
/// otherwise it is rendered to stdout as YAML.
pub fn emit_tree(tree: &[FieldNode], global: &GlobalOptions, write: bool) -> Result<(), CliError> {
    if write {
        let file = global.require_file()?;
        save_tree(file, tree).map_err(CliError::from)?;
        if global.verbose {
            eprintln!("wrote {}", file.display());
        }
        return Ok(());
    }
    print_yaml(&tree)
}

/// Parse a path argument, mapping bad syntax to an arguments error.
pub fn parse_path_arg(text: &str) -> Result<FieldPath, CliError> {
    FieldPath::parse(text).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Render a serializable value to stdout as YAML.
pub fn print_yaml<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_yaml::to_string(value)
        .map_err(|e| CliError::from(fieldscope::Error::from(e)))?;
    print!("{rendered}");
    Ok(())
}

/// Render a serializable value to stdout as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::from(fieldscope::Error::from(e)))?;
    println!("{rendered}");
    Ok(())
}
