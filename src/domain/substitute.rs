//! Literal placeholder substitution.

use super::ids::EffectiveId;
use super::mapping::TermTable;

/// Name substituted when a slot has no usable ID or the ID is not mapped.
pub const NOT_FOUND: &str = "NOT_FOUND";

/// Default placeholder token.
pub const DEFAULT_PLACEHOLDER_TOKEN: &str = "[a1]";

/// Name to substitute for `id`.
pub fn lookup_name<'a>(id: &EffectiveId, table: &'a TermTable) -> &'a str {
    id.as_id().and_then(|id| table.get(id)).unwrap_or(NOT_FOUND)
}

/// Replace every literal occurrence of `placeholder` in `template` with `name`.
///
/// An empty placeholder never matches.
pub fn fill_placeholder(template: &str, placeholder: &str, name: &str) -> String {
    if placeholder.is_empty() {
        return template.to_string();
    }
    template.replace(placeholder, name)
}
