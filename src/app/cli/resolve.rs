//! Resolve command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, ConfigOverrides, InputText, ResolveCommandOptions};
use crate::domain::AppError;

use super::OutputFormat;

#[derive(Args)]
pub struct ResolveArgs {
    /// Prompt templates joined by the prompt delimiter
    #[arg(short, long, conflicts_with = "prompts_file")]
    prompts: Option<String>,
    /// Read prompt templates from a file
    #[arg(long, value_name = "PATH")]
    prompts_file: Option<PathBuf>,
    /// Mapping table, one ID_Name per line
    #[arg(short, long, conflicts_with = "mappings_file")]
    mappings: Option<String>,
    /// Read the mapping table from a file
    #[arg(long, value_name = "PATH")]
    mappings_file: Option<PathBuf>,
    /// Per-slot IDs, e.g. "1;2;3" or "[1, 2, 3]"
    #[arg(short, long, allow_hyphen_values = true)]
    ids: Option<String>,
    /// Use the first slot's template for every slot
    #[arg(long)]
    mirror_first_prompt: bool,
    /// Number slots from --increment-base upward
    #[arg(short = 'a', long = "auto-step")]
    auto_step_ids: bool,
    /// First ID for --auto-step
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    increment_base: Option<i64>,
    /// Take IDs from --manual-ids-list (wins over --auto-step)
    #[arg(long = "manual")]
    manual_ids: bool,
    /// ';'-separated IDs for --manual
    #[arg(long, allow_hyphen_values = true)]
    manual_ids_list: Option<String>,
    /// Use the first slot's ID for every slot
    #[arg(long)]
    mirror_first_id: bool,
    /// Literal placeholder token [default: [a1]]
    #[arg(long = "placeholder")]
    placeholder_token: Option<String>,
    /// Delimiter between prompt templates in the input [default: ;;;;;]
    #[arg(long = "delimiter", allow_hyphen_values = true)]
    prompt_delimiter: Option<String>,
    /// Config file (.toml, .yml or .yaml) with a [resolve] section
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write debug_info to stderr
    #[arg(long)]
    debug: bool,
}

impl ResolveArgs {
    fn into_options(self) -> ResolveCommandOptions {
        ResolveCommandOptions {
            prompts: InputText::from_args(self.prompts, self.prompts_file),
            mappings: InputText::from_args(self.mappings, self.mappings_file),
            ids: self.ids,
            config_path: self.config,
            overrides: ConfigOverrides {
                mirror_first_prompt: self.mirror_first_prompt,
                auto_step_ids: self.auto_step_ids,
                manual_ids: self.manual_ids,
                mirror_first_id: self.mirror_first_id,
                manual_ids_list: self.manual_ids_list,
                increment_base: self.increment_base,
                placeholder_token: self.placeholder_token,
                prompt_delimiter: self.prompt_delimiter,
            },
        }
    }
}

pub fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let format = args.format;
    let debug = args.debug;
    let resolution = api::resolve(args.into_options())?;

    match format {
        OutputFormat::Text => {
            println!("{}", resolution.resolved_prompts);
            println!("{}", resolution.primary_ids);
            if debug {
                eprintln!("{}", resolution.debug_info);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }
    }
    Ok(())
}
