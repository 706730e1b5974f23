//! Error types for mapping files
//!
//! Building and applying a mapping never fails; only reading, parsing and
//! writing mapping files can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or serializing a mapping file
#[derive(Error, Debug)]
pub enum MappingError {
    /// The mapping file could not be read
    #[error("failed to read mapping file '{}': {source}", path.display())]
    Read {
        /// Path of the mapping file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The mapping file is not valid TOML or has the wrong shape
    #[error("failed to parse mapping from '{}': {message}", path.display())]
    Parse {
        /// Path of the mapping file (`<inline>` for in-memory documents)
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// A rule has an empty `incorrect` key
    #[error("rule {index} has an empty 'incorrect' key")]
    EmptyKey {
        /// 0-based position of the rule in the file
        index: usize,
    },

    /// The mapping could not be serialized
    #[error("failed to serialize mapping: {0}")]
    Serialize(String),
}

/// Result type for mapping file operations
pub type Result<T> = std::result::Result<T, MappingError>;
