//! Dictionary-based correction of transcription errors
//!
//! A [`Mapping`] holds ordered `incorrect -> correct` rules. The
//! [`Substituter`] applies them one after another to a piece of text:
//! single-token keys only match whole words, phrase keys (containing
//! whitespace) match anywhere as literal substrings.
//!
//! ```
//! use transfix_core::{apply, build_mapping};
//!
//! let mapping = build_mapping(None);
//! assert_eq!(apply("Swyggs met Lama", &mapping), "Swyx met Llama");
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod mapping;
pub mod rule;

// Re-export key types
pub use engine::{apply, Report, RuleCount, Substituter};
pub use error::{MappingError, Result};
pub use mapping::{build_mapping, Mapping};
pub use rule::{MatchKind, Rule};
