//! Per-slot ID selection.

mod effective_id;
mod mode;
mod parse;
mod sequence;

pub use effective_id::EffectiveId;
pub use mode::{IdMode, ModeFlags, ModeSelection};
pub use parse::{MANUAL_ID_SEPARATOR, ParsedIdList, parse_id_list, parse_manual_ids};
pub use sequence::effective_ids;
