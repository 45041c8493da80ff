//! Show command implementation.
//!
//! This module implements the `show` command, which lists every field in
//! the tree flat, with its facets and values, in various formats
//! (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{load_tree_file, GlobalOptions};
use clap::{Args, ValueEnum};
use fieldscope::tree::{walk, FieldNode};
use std::io::Write;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 6] = ["path", "type", "exposed", "overridable", "source", "value"];

/// List fields with their facets and values.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "FIELDSCOPE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Show only exposed fields
    #[arg(long)]
    pub exposed_only: bool,
}

/// Output format for the show command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

/// One flattened field row.
struct Row {
    path: String,
    field_type: String,
    exposed: bool,
    overridable: bool,
    source: String,
    value: String,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = load_tree_file(global)?;
        let rows = collect_rows(&tree, self.exposed_only);

        match self.format {
            OutputFormat::Table => format_as_table(&rows)?,
            OutputFormat::Json => format_as_json(&rows)?,
            OutputFormat::Csv => format_as_delimited(&rows, b',')?,
            OutputFormat::Tsv => format_as_delimited(&rows, b'\t')?,
        }

        Ok(())
    }
}

fn collect_rows(tree: &[FieldNode], exposed_only: bool) -> Vec<Row> {
    let mut rows = Vec::new();
    walk(tree, &mut |node| {
        if exposed_only && !node.exposed {
            return;
        }
        rows.push(Row {
            path: node.path.to_string(),
            field_type: node.field_type.to_string(),
            exposed: node.exposed,
            overridable: node.overridable,
            source: node.source.to_string(),
            value: node
                .value
                .as_ref()
                .map_or_else(|| "-".to_string(), std::string::ToString::to_string),
        });
    });
    rows
}

/// Format rows as a human-readable table.
fn format_as_table(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.path, row.field_type, row.exposed, row.overridable, row.source, row.value,
        )?;
    }

    Ok(())
}

/// Format rows as JSON.
fn format_as_json(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "path": row.path,
                "type": row.field_type,
                "exposed": row.exposed,
                "overridable": row.overridable,
                "source": row.source,
                "value": row.value,
            })
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;

    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format rows as delimited output (CSV or TSV).
fn format_as_delimited(rows: &[Row], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;

    for row in rows {
        writer
            .write_record(&[
                row.path.clone(),
                row.field_type.clone(),
                row.exposed.to_string(),
                row.overridable.to_string(),
                row.source.clone(),
                row.value.clone(),
            ])
            .map_err(csv_error)?;
    }

    writer.flush()?;

    Ok(())
}
