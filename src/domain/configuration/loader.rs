//! Configuration file parsing.

use std::path::Path;

use crate::domain::AppError;

use super::SlotfillConfig;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from the file extension. Anything but `.yml`/`.yaml` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Toml,
        }
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(
    content: &str,
    format: ConfigFormat,
) -> Result<SlotfillConfig, AppError> {
    let config = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Yaml => {
            if content.trim().is_empty() {
                SlotfillConfig::default()
            } else {
                serde_yaml::from_str(content)?
            }
        }
    };
    Ok(config)
}
