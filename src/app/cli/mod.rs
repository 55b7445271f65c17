//! CLI Adapter.

mod mappings;
mod resolve;

use crate::domain::AppError;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "slotfill")]
#[command(version)]
#[command(
    about = "Resolve numeric ID placeholders in prompt templates from an ID_Name mapping table",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the placeholder in every prompt slot
    #[clap(visible_alias = "r")]
    Resolve(resolve::ResolveArgs),
    /// Show how a mapping table parses
    #[clap(visible_alias = "m")]
    Mappings(mappings::MappingsArgs),
}

/// Output format shared by the subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve(args) => resolve::run_resolve(args),
        Commands::Mappings(args) => mappings::run_mappings(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "slotfill=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
