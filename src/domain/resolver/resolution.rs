use serde::Serialize;

use crate::domain::ids::EffectiveId;
use crate::domain::substitute::NOT_FOUND;

/// Separator between `primary_ids` tokens.
pub const PRIMARY_ID_SEPARATOR: &str = ";";

/// Outcome for one prompt slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotResolution {
    pub index: usize,
    pub id: EffectiveId,
    /// Mapped name, or `NOT_FOUND`.
    pub name: String,
    /// Template text before substitution (after prompt mirroring).
    pub template: String,
    pub resolved: String,
}

impl SlotResolution {
    /// `ID_Name` token for the primary-ids summary.
    ///
    /// Sentinels render as bare `NOT_FOUND`; an integer ID missing from the
    /// table keeps its number as `ID_NOT_FOUND`.
    pub fn primary_id_token(&self) -> String {
        match self.id.as_id() {
            Some(id) => format!("{}_{}", id, self.name),
            None => NOT_FOUND.to_string(),
        }
    }
}

/// Full resolver output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Filled slot texts joined by `;;;;;`.
    pub resolved_prompts: String,
    pub debug_info: String,
    /// `;`-joined `ID_Name` / `NOT_FOUND` tokens, one per slot.
    pub primary_ids: String,
    pub slots: Vec<SlotResolution>,
}
