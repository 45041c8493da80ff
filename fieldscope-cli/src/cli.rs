//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, ContractCommand, ConvertCommand, CustomizeCommand,
    ExposeCommand, FilterCommand, OverrideCommand, ResetCommand, SetCommand, ShowCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for editing blueprint field configuration.
#[derive(Parser)]
#[command(name = "fieldscope")]
#[command(version, about = "Inspect and edit blueprint field exposure", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// The field tree file to operate on (YAML or JSON)
    #[arg(long, value_name = "PATH", global = true, env = "FIELDSCOPE_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List fields with their facets and values
    Show(ShowCommand),

    /// Toggle a field's exposed facet
    Expose(ExposeCommand),

    /// Toggle a field's overridable facet
    Override(OverrideCommand),

    /// Write a JSON value into a field
    Set(SetCommand),

    /// Seed a field for blueprint customization
    Customize(CustomizeCommand),

    /// Restore a field to its template state
    Reset(ResetCommand),

    /// Print the subtree matching a filter
    Filter(FilterCommand),

    /// Print the exposed-field contract
    Contract(ContractCommand),

    /// Convert between the nested and flat representations
    Convert(ConvertCommand),

    /// Verify facet invariants and flat-map well-formedness
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
