use std::fmt;

use serde::Serialize;

/// Per-slot ID after the active mode has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EffectiveId {
    /// A usable integer ID.
    Id(i64),
    /// No ID was supplied for the slot.
    Unresolved,
    /// A manual entry that is not an integer.
    Invalid(String),
}

impl EffectiveId {
    pub fn as_id(&self) -> Option<i64> {
        match self {
            EffectiveId::Id(id) => Some(*id),
            EffectiveId::Unresolved | EffectiveId::Invalid(_) => None,
        }
    }
}

impl fmt::Display for EffectiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectiveId::Id(id) => write!(f, "{}", id),
            EffectiveId::Unresolved => write!(f, "unresolved"),
            EffectiveId::Invalid(raw) => write!(f, "invalid({:?})", raw),
        }
    }
}
