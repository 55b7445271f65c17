//! Text inputs that may be given inline or by path.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::InputReader;

/// A text input supplied inline or as a file to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputText {
    Inline(String),
    File(PathBuf),
}

impl InputText {
    /// Build from a pair of mutually exclusive CLI arguments.
    ///
    /// Neither given means an empty inline input.
    pub fn from_args(inline: Option<String>, file: Option<PathBuf>) -> Self {
        match (inline, file) {
            (_, Some(path)) => InputText::File(path),
            (Some(text), None) => InputText::Inline(text),
            (None, None) => InputText::Inline(String::new()),
        }
    }

    pub fn load(&self, reader: &impl InputReader) -> Result<String, AppError> {
        match self {
            InputText::Inline(text) => Ok(text.clone()),
            InputText::File(path) => {
                let content = reader.read_text(path)?;
                tracing::debug!(path = %path.display(), bytes = content.len(), "read input file");
                Ok(content)
            }
        }
    }
}

impl Default for InputText {
    fn default() -> Self {
        InputText::Inline(String::new())
    }
}
