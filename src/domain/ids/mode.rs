use std::fmt;

use super::{EffectiveId, parse_manual_ids};

/// Strategy used to pick the base ID for each slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IdMode {
    /// Slot `i` takes `id_sequences[i]`.
    #[default]
    Normal,
    /// Slot `i` takes `base + i`.
    AutoStep { base: i64 },
    /// Slot `i` takes the `i`-th entry of a manual list.
    ManualOverride { ids: Vec<EffectiveId> },
}

impl IdMode {
    pub fn label(&self) -> &'static str {
        match self {
            IdMode::Normal => "normal",
            IdMode::AutoStep { .. } => "auto-step",
            IdMode::ManualOverride { .. } => "manual-override",
        }
    }

    /// Pick a single mode from independent host flags.
    ///
    /// Precedence is Manual Override > Auto-Step > Normal. Flags that lose are
    /// reported in [`ModeSelection::discarded`].
    pub fn select(flags: &ModeFlags<'_>) -> ModeSelection {
        let mut discarded = Vec::new();

        let mode = if flags.manual_ids {
            if flags.auto_step_ids {
                discarded.push("auto_step_ids");
            }
            IdMode::ManualOverride {
                ids: parse_manual_ids(flags.manual_ids_list),
            }
        } else if flags.auto_step_ids {
            IdMode::AutoStep {
                base: flags.increment_base,
            }
        } else {
            IdMode::Normal
        };

        ModeSelection { mode, discarded }
    }
}

impl fmt::Display for IdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdMode::Normal => write!(f, "normal"),
            IdMode::AutoStep { base } => write!(f, "auto-step (base={})", base),
            IdMode::ManualOverride { ids } => {
                let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
                write!(f, "manual-override [{}]", rendered.join(", "))
            }
        }
    }
}

/// Raw mode flags as a host supplies them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeFlags<'a> {
    pub auto_step_ids: bool,
    pub manual_ids: bool,
    pub increment_base: i64,
    pub manual_ids_list: &'a str,
}

/// Outcome of [`IdMode::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSelection {
    pub mode: IdMode,
    /// Names of flags that were set but overruled by precedence.
    pub discarded: Vec<&'static str>,
}
