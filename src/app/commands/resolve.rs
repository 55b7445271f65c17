//! Resolve command: gather inputs, apply config, run the resolver.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::configuration::{ConfigFormat, ResolverConfig, parse_config_content};
use crate::domain::{AppError, Resolution, ResolveRequest, resolve};
use crate::ports::InputReader;

use super::input::InputText;

/// Options for the resolve command.
#[derive(Debug, Clone, Default)]
pub struct ResolveCommandOptions {
    pub prompts: InputText,
    pub mappings: InputText,
    /// `id_sequences` as free-form text (`"1;2"`, `"[1, 2]"`).
    pub ids: Option<String>,
    /// Optional config file; flags in `overrides` take priority over it.
    pub config_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
}

/// Command-line overrides for [`ResolverConfig`].
///
/// Boolean switches can only turn a mode on; they never clear a file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub mirror_first_prompt: bool,
    pub auto_step_ids: bool,
    pub manual_ids: bool,
    pub mirror_first_id: bool,
    pub manual_ids_list: Option<String>,
    pub increment_base: Option<i64>,
    pub placeholder_token: Option<String>,
    pub prompt_delimiter: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut ResolverConfig) {
        config.mirror_first_prompt |= self.mirror_first_prompt;
        config.auto_step_ids |= self.auto_step_ids;
        config.manual_ids |= self.manual_ids;
        config.mirror_first_id |= self.mirror_first_id;
        if let Some(list) = self.manual_ids_list {
            config.manual_ids_list = list;
        }
        if let Some(base) = self.increment_base {
            config.increment_base = base;
        }
        if let Some(token) = self.placeholder_token {
            config.placeholder_token = token;
        }
        if let Some(delimiter) = self.prompt_delimiter {
            config.prompt_delimiter = delimiter;
        }
    }
}

/// Execute the resolve command.
pub fn execute<R: InputReader>(
    ctx: &AppContext<R>,
    options: ResolveCommandOptions,
) -> Result<Resolution, AppError> {
    let mut config = load_resolver_config(ctx, options.config_path.as_ref())?;
    options.overrides.apply(&mut config);

    let prompt_list = options.prompts.load(ctx.inputs())?;
    let term_mappings = options.mappings.load(ctx.inputs())?;

    let mut request =
        ResolveRequest::new(prompt_list, term_mappings).with_options(config.into_options());
    if let Some(ids) = options.ids.as_deref() {
        request = request.with_id_text(ids);
    }

    resolve(&request)
}

/// Load the `[resolve]` section of a config file, or defaults without one.
pub fn load_resolver_config<R: InputReader>(
    ctx: &AppContext<R>,
    path: Option<&PathBuf>,
) -> Result<ResolverConfig, AppError> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };

    let content = ctx.inputs().read_text(path).map_err(|err| match err {
        AppError::InputNotFound(path) => {
            AppError::config_error(format!("Config file not found: {}", path))
        }
        other => other,
    })?;
    let config = parse_config_content(&content, ConfigFormat::from_path(path))?;
    tracing::debug!(path = %path.display(), "loaded resolver config");
    Ok(config.resolve)
}
