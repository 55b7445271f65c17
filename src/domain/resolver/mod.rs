//! The resolver: mapping table + prompt slots + ID mode -> filled prompts.

mod request;
mod resolution;
mod resolve;

pub use request::{ResolveOptions, ResolveRequest};
pub use resolution::{PRIMARY_ID_SEPARATOR, Resolution, SlotResolution};
pub use resolve::resolve;
