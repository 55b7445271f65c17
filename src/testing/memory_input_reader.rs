use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::InputReader;

/// In-memory input reader for command tests.
#[derive(Default)]
pub struct MemoryInputReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryInputReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl InputReader for MemoryInputReader {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::InputNotFound(path.display().to_string()))
    }
}
