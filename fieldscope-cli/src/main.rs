//! Main entry point for the fieldscope CLI.
//!
//! This is the command-line interface for the fieldscope blueprint field
//! configuration system. It provides commands for editing field trees:
//! - `show`: List fields with their facets and values
//! - `expose` / `override`: Facet toggles through the propagation engine
//! - `set` / `customize` / `reset`: Value edits and template restoration
//! - `filter` / `contract` / `convert` / `check`: Views and verification

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = fieldscope::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        file: cli.file,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Expose(cmd) => cmd.execute(&global),
        cli::Command::Override(cmd) => cmd.execute(&global),
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Customize(cmd) => cmd.execute(&global),
        cli::Command::Reset(cmd) => cmd.execute(&global),
        cli::Command::Filter(cmd) => cmd.execute(&global),
        cli::Command::Contract(cmd) => cmd.execute(&global),
        cli::Command::Convert(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
