//! CLI command implementations

pub mod defaults;
pub mod fix;

pub use fix::FixArgs;
