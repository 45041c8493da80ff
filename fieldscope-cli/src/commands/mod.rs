//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: List fields with their facets and values
//! - `expose`: Toggle a field's exposed facet
//! - `override_field`: Toggle a field's overridable facet
//! - `set`: Write a JSON value into a field
//! - `customize`: Seed a field for blueprint customization
//! - `reset`: Restore a field to its template state
//! - `filter`: Print the subtree matching a filter
//! - `contract`: Print the exposed-field contract
//! - `convert`: Convert between the nested and flat representations
//! - `check`: Verify facet invariants and flat-map well-formedness
//! - `completions`: Generate shell completion scripts

pub mod check;
pub mod completions;
pub mod contract;
pub mod convert;
pub mod customize;
pub mod expose;
pub mod filter;
pub mod override_field;
pub mod reset;
pub mod set;
pub mod show;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use contract::ContractCommand;
pub use convert::ConvertCommand;
pub use customize::CustomizeCommand;
pub use expose::ExposeCommand;
pub use filter::FilterCommand;
pub use override_field::OverrideCommand;
pub use reset::ResetCommand;
pub use set::SetCommand;
pub use show::ShowCommand;
