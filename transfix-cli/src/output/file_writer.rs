//! File writing utilities

use crate::error::{CliError, CliResult};
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Writes corrected text to disk
pub struct FileWriter;

impl FileWriter {
    /// Write `content` to `path`, creating or truncating it
    pub fn write_text(path: &Path, content: &str) -> CliResult<()> {
        fs::write(path, content)
            .with_context(|| CliError::WriteError(path.display().to_string()))?;

        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }
}
