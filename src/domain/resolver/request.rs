use crate::domain::ids::{IdMode, parse_id_list};
use crate::domain::slots::DEFAULT_PROMPT_DELIMITER;
use crate::domain::substitute::DEFAULT_PLACEHOLDER_TOKEN;

/// Validated resolver options.
///
/// The ID strategy is a single [`IdMode`]; the two mirror switches are
/// independent of it and of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub id_mode: IdMode,
    pub mirror_first_prompt: bool,
    pub mirror_first_id: bool,
    pub placeholder_token: String,
    pub prompt_delimiter: String,
    /// Host flags that were set but lost to a higher-precedence mode.
    pub overruled_flags: Vec<&'static str>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            id_mode: IdMode::Normal,
            mirror_first_prompt: false,
            mirror_first_id: false,
            placeholder_token: DEFAULT_PLACEHOLDER_TOKEN.to_string(),
            prompt_delimiter: DEFAULT_PROMPT_DELIMITER.to_string(),
            overruled_flags: Vec::new(),
        }
    }
}

/// Inputs for a single resolver invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    /// Templates joined by `options.prompt_delimiter`.
    pub prompt_list: String,
    /// Multi-line `ID_Name` source.
    pub term_mappings: String,
    /// Per-slot IDs used in normal mode.
    pub id_sequences: Vec<i64>,
    /// Tokens dropped while parsing `id_sequences` from text.
    pub ignored_id_tokens: Vec<String>,
    pub options: ResolveOptions,
}

impl ResolveRequest {
    pub fn new(prompt_list: impl Into<String>, term_mappings: impl Into<String>) -> Self {
        Self {
            prompt_list: prompt_list.into(),
            term_mappings: term_mappings.into(),
            ..Self::default()
        }
    }

    pub fn with_ids(mut self, ids: impl Into<Vec<i64>>) -> Self {
        self.id_sequences = ids.into();
        self.ignored_id_tokens.clear();
        self
    }

    /// Set `id_sequences` from free-form text such as `"1;2"` or `"[1, 2]"`.
    pub fn with_id_text(mut self, raw: &str) -> Self {
        let parsed = parse_id_list(raw);
        self.id_sequences = parsed.ids;
        self.ignored_id_tokens = parsed.dropped;
        self
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }
}
