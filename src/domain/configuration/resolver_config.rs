//! Host-facing resolver configuration.

use serde::{Deserialize, Serialize};

use crate::domain::ids::{IdMode, ModeFlags};
use crate::domain::resolver::ResolveOptions;
use crate::domain::slots::DEFAULT_PROMPT_DELIMITER;
use crate::domain::substitute::DEFAULT_PLACEHOLDER_TOKEN;

/// Configuration file loaded from `slotfill.toml` (or YAML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotfillConfig {
    #[serde(default)]
    pub resolve: ResolverConfig,
}

/// Resolver switches as a host supplies them: independent booleans.
///
/// Convert with [`ResolverConfig::into_options`] to get the validated
/// [`ResolveOptions`], where the ID strategy is a single enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub mirror_first_prompt: bool,
    #[serde(default)]
    pub auto_step_ids: bool,
    #[serde(default)]
    pub manual_ids: bool,
    #[serde(default)]
    pub mirror_first_id: bool,
    /// `;`-separated IDs used when `manual_ids` is on.
    #[serde(default)]
    pub manual_ids_list: String,
    /// First ID when `auto_step_ids` is on.
    #[serde(default)]
    pub increment_base: i64,
    #[serde(default = "default_placeholder_token")]
    pub placeholder_token: String,
    #[serde(default = "default_prompt_delimiter")]
    pub prompt_delimiter: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mirror_first_prompt: false,
            auto_step_ids: false,
            manual_ids: false,
            mirror_first_id: false,
            manual_ids_list: String::new(),
            increment_base: 0,
            placeholder_token: default_placeholder_token(),
            prompt_delimiter: default_prompt_delimiter(),
        }
    }
}

impl ResolverConfig {
    /// Collapse the mode booleans into one [`IdMode`].
    ///
    /// Manual Override > Auto-Step > Normal. Conflicting flags are not an
    /// error; the losers are kept in `overruled_flags` for the debug trace.
    pub fn into_options(self) -> ResolveOptions {
        let selection = IdMode::select(&ModeFlags {
            auto_step_ids: self.auto_step_ids,
            manual_ids: self.manual_ids,
            increment_base: self.increment_base,
            manual_ids_list: &self.manual_ids_list,
        });

        ResolveOptions {
            id_mode: selection.mode,
            mirror_first_prompt: self.mirror_first_prompt,
            mirror_first_id: self.mirror_first_id,
            placeholder_token: self.placeholder_token,
            prompt_delimiter: self.prompt_delimiter,
            overruled_flags: selection.discarded,
        }
    }
}

fn default_placeholder_token() -> String {
    DEFAULT_PLACEHOLDER_TOKEN.to_string()
}

fn default_prompt_delimiter() -> String {
    DEFAULT_PROMPT_DELIMITER.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::EffectiveId;

    #[test]
    fn default_config_is_normal_mode() {
        let options = ResolverConfig::default().into_options();
        assert_eq!(options, ResolveOptions::default());
    }

    #[test]
    fn auto_step_config_carries_base() {
        let config = ResolverConfig {
            auto_step_ids: true,
            increment_base: 40,
            ..Default::default()
        };
        assert_eq!(config.into_options().id_mode, IdMode::AutoStep { base: 40 });
    }

    #[test]
    fn manual_and_auto_step_prefers_manual() {
        let config = ResolverConfig {
            auto_step_ids: true,
            manual_ids: true,
            manual_ids_list: "5;6".to_string(),
            ..Default::default()
        };
        let options = config.into_options();

        assert_eq!(
            options.id_mode,
            IdMode::ManualOverride {
                ids: vec![EffectiveId::Id(5), EffectiveId::Id(6)],
            }
        );
        assert_eq!(options.overruled_flags, vec!["auto_step_ids"]);
    }

    #[test]
    fn manual_list_without_flag_is_ignored() {
        let config = ResolverConfig {
            manual_ids_list: "5;6".to_string(),
            ..Default::default()
        };
        assert_eq!(config.into_options().id_mode, IdMode::Normal);
    }

    #[test]
    fn mirrors_pass_through_with_any_mode() {
        let config = ResolverConfig {
            auto_step_ids: true,
            mirror_first_prompt: true,
            mirror_first_id: true,
            ..Default::default()
        };
        let options = config.into_options();

        assert!(options.mirror_first_prompt);
        assert!(options.mirror_first_id);
        assert_eq!(options.id_mode.label(), "auto-step");
    }
}
