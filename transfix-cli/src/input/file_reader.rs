//! File reading utilities

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::fs;
use std::io;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    ///
    /// A missing file is reported as [`CliError::FileNotFound`] so the caller
    /// can tell it apart from other read failures.
    pub fn read_text(path: &Path) -> CliResult<String> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(e) => Err(e).with_context(|| CliError::ReadError(path.display().to_string())),
        }
    }
}
