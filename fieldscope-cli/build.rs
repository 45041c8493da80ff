//! Build script for fieldscope-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("fieldscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit blueprint field exposure")
        .long_about(
            "Command-line tool for editing which template fields a blueprint exposes to downstream instances",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .help("The field tree file to operate on (YAML or JSON)")
                .value_name("PATH")
                .global(true)
                .env("FIELDSCOPE_FILE"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("List fields with their facets and values")
                .long_about("Display every field flat in table, JSON, CSV, or TSV format"),
            Command::new("expose")
                .about("Toggle a field's exposed facet")
                .long_about("Expose or hide a field, propagating across the hierarchy"),
            Command::new("override")
                .about("Toggle a field's overridable facet")
                .long_about("Make a field overridable (which also exposes it) or lock it"),
            Command::new("set")
                .about("Write a JSON value into a field")
                .long_about("Write a value into a field, marking it blueprint-customized"),
            Command::new("customize")
                .about("Seed a field for blueprint customization")
                .long_about("Copy the template value into the working value and flip provenance"),
            Command::new("reset")
                .about("Restore a field to its template state")
                .long_about("Restore a field, or with --recursive a whole section, to template state"),
            Command::new("filter")
                .about("Print the subtree matching a filter")
                .long_about("Narrow the tree by text query and facet predicates, keeping ancestors"),
            Command::new("contract")
                .about("Print the exposed-field contract")
                .long_about("Render the exposed surface as nested YAML or JSON for consumers"),
            Command::new("convert")
                .about("Convert between the nested and flat representations")
                .long_about("Rewrite a tree file between its nested and flat persisted shapes"),
            Command::new("check")
                .about("Verify facet invariants and flat-map well-formedness")
                .long_about("Check invariants and report violations with a non-zero exit code"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main fieldscope.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("fieldscope.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
