//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file does not exist
    FileNotFound(String),
    /// Input file exists but could not be read as UTF-8 text
    ReadError(String),
    /// Corrected text could not be written
    WriteError(String),
    /// Override mapping could not be loaded
    MappingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ReadError(path) => write!(f, "Failed to read file: {path}"),
            CliError::WriteError(path) => write!(f, "Failed to write file: {path}"),
            CliError::MappingError(msg) => write!(f, "Mapping error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// One-line message printed before exiting with status 1
pub fn diagnostic(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CliError>() {
        Some(CliError::FileNotFound(path)) => format!("Error: Could not find file {path}"),
        _ => format!("Error processing file: {err:#}"),
    }
}
