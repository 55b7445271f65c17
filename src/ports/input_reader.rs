//! Access to text inputs named by path.
//!
//! The resolver itself never touches the filesystem. Commands read prompt
//! lists, mapping tables and config files through this port before calling it.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading UTF-8 text inputs.
pub trait InputReader {
    /// Read a file as UTF-8 text.
    ///
    /// A missing file is reported as [`AppError::InputNotFound`].
    fn read_text(&self, path: &Path) -> Result<String, AppError>;
}
