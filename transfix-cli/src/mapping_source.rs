//! Mapping source management for CLI

use crate::error::{CliError, CliResult};
use std::path::PathBuf;
use transfix_core::{build_mapping, Mapping};

/// Where the replacement rules come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSource {
    /// Built-in table only
    BuiltIn,
    /// Built-in table with rules from a TOML file merged on top
    WithOverrides {
        /// Path to the override mapping file
        path: PathBuf,
    },
}

impl MappingSource {
    /// Select the source from the optional `--mapping` path
    pub fn from_override_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => MappingSource::WithOverrides { path },
            None => MappingSource::BuiltIn,
        }
    }

    /// Get the display name for the mapping source
    pub fn display_name(&self) -> String {
        match self {
            MappingSource::BuiltIn => "Built-in mapping".to_string(),
            MappingSource::WithOverrides { path } => {
                format!("Built-in mapping + overrides from {}", path.display())
            }
        }
    }

    /// Build the mapping to apply
    pub fn load(&self) -> CliResult<Mapping> {
        match self {
            MappingSource::BuiltIn => Ok(build_mapping(None)),
            MappingSource::WithOverrides { path } => {
                let overrides = Mapping::from_file(path)
                    .map_err(|e| CliError::MappingError(e.to_string()))?;
                log::info!("Loaded {} override rules", overrides.len());
                Ok(build_mapping(Some(&overrides)))
            }
        }
    }
}
