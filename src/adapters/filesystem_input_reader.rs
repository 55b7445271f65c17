use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::InputReader;

/// Filesystem-based input reader. Relative paths resolve against `root`.
#[derive(Debug, Clone)]
pub struct FilesystemInputReader {
    root: PathBuf,
}

impl FilesystemInputReader {
    /// Create a reader for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl InputReader for FilesystemInputReader {
    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        fs::read_to_string(&full_path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => AppError::InputNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })
    }
}
