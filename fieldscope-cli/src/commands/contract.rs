//! Contract command implementation.
//!
//! This module implements the `contract` command, which prints the
//! exposed-field surface of the tree as nested YAML or JSON for
//! downstream consumers.

use crate::error::CliError;
use crate::utils::{load_tree_file, print_json, print_yaml, GlobalOptions};
use clap::{Args, ValueEnum};
use fieldscope::contract::generate_exposed_contract;

/// Print the exposed-field contract.
#[derive(Args)]
pub struct ContractCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "yaml", ignore_case = true)]
    pub format: ContractFormat,
}

/// Output format for the contract command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ContractFormat {
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    Json,
}

impl ContractCommand {
    /// Execute the contract command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = load_tree_file(global)?;
        let contract = generate_exposed_contract(&tree);

        match self.format {
            ContractFormat::Yaml => print_yaml(&contract),
            ContractFormat::Json => print_json(&contract),
        }
    }
}
