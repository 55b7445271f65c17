//! Mappings command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, InputText};
use crate::domain::AppError;

use super::OutputFormat;

#[derive(Args)]
pub struct MappingsArgs {
    /// Mapping table, one ID_Name per line
    #[arg(short, long, conflicts_with = "mappings_file")]
    mappings: Option<String>,
    /// Read the mapping table from a file
    #[arg(long, value_name = "PATH")]
    mappings_file: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

pub fn run_mappings(args: MappingsArgs) -> Result<(), AppError> {
    let input = InputText::from_args(args.mappings, args.mappings_file);
    let report = api::mappings(&input)?;

    match args.format {
        OutputFormat::Text => {
            println!("{} mapping(s)", report.entries.len());
            for entry in &report.entries {
                println!("  {}_{}", entry.id, entry.name);
            }
            if report.overridden > 0 {
                println!("{} duplicate ID line(s) replaced an earlier name", report.overridden);
            }
            if !report.skipped.is_empty() {
                println!("Skipped:");
                for skipped in &report.skipped {
                    println!(
                        "  line {}: {:?} ({})",
                        skipped.line_number,
                        skipped.content,
                        skipped.reason.label()
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
