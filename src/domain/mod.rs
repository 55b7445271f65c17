pub mod configuration;
pub mod debug_log;
pub mod error;
pub mod ids;
pub mod mapping;
pub mod resolver;
pub mod slots;
pub mod substitute;

pub use configuration::{ConfigFormat, ResolverConfig, SlotfillConfig};
pub use error::AppError;
pub use ids::{EffectiveId, IdMode};
pub use mapping::{SkipReason, SkippedLine, TermEntry, TermTable};
pub use resolver::{Resolution, ResolveOptions, ResolveRequest, SlotResolution, resolve};
pub use slots::{OUTPUT_DELIMITER, join_slots, split_prompts};
pub use substitute::NOT_FOUND;
