//! slotfill: resolve numeric ID placeholders in prompt templates into names.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigOverrides, InputText, MappingsReport, ResolveCommandOptions, mappings, mappings_at,
    resolve, resolve_at, resolve_request,
};
pub use domain::{AppError, EffectiveId, IdMode, Resolution, ResolveRequest, SlotResolution};
