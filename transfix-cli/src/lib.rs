//! Transfix CLI library
//!
//! This library provides the command-line interface for fixing known
//! transcription errors in markdown transcripts.

pub mod commands;
pub mod error;
pub mod input;
pub mod mapping_source;
pub mod output;

pub use commands::FixArgs;
pub use error::{diagnostic, CliError, CliResult};
