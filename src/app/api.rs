//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemInputReader;
use crate::app::AppContext;
use crate::app::commands::{mappings, resolve};
use crate::domain::{Resolution, ResolveRequest};

pub use crate::app::commands::input::InputText;
pub use crate::app::commands::mappings::MappingsReport;
pub use crate::app::commands::resolve::{ConfigOverrides, ResolveCommandOptions};
pub use crate::domain::AppError;

/// Create an `AppContext` for a given path.
fn create_context(path: PathBuf) -> AppContext<FilesystemInputReader> {
    AppContext::new(FilesystemInputReader::new(path))
}

/// Run the resolver on in-memory inputs.
///
/// This is the entry point for hosts that already hold the primitive inputs.
pub fn resolve_request(request: &ResolveRequest) -> Result<Resolution, AppError> {
    crate::domain::resolve(request)
}

/// Resolve prompts with file inputs relative to the current directory.
pub fn resolve(options: ResolveCommandOptions) -> Result<Resolution, AppError> {
    resolve_at(std::env::current_dir()?, options)
}

/// Resolve prompts with file inputs relative to `path`.
pub fn resolve_at(
    path: impl Into<PathBuf>,
    options: ResolveCommandOptions,
) -> Result<Resolution, AppError> {
    let ctx = create_context(path.into());
    resolve::execute(&ctx, options)
}

/// Parse a mapping table and report entries and skipped lines.
pub fn mappings(input: &InputText) -> Result<MappingsReport, AppError> {
    mappings_at(std::env::current_dir()?, input)
}

/// Parse a mapping table with file inputs relative to `path`.
pub fn mappings_at(
    path: impl Into<PathBuf>,
    input: &InputText,
) -> Result<MappingsReport, AppError> {
    let ctx = create_context(path.into());
    mappings::execute(&ctx, input)
}
