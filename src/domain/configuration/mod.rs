pub mod loader;
pub mod resolver_config;

pub use loader::{ConfigFormat, parse_config_content};
pub use resolver_config::{ResolverConfig, SlotfillConfig};
