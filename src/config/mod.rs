//! Configuration module for the timestamp-renamer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - The timestamp format catalog
//! - Validation into a per-run configuration

pub mod formats;
pub mod loader;
pub mod run;
pub mod validation;

pub use formats::{TimestampFormat, PLACEHOLDER_LABEL};
pub use loader::{Config, OptionsConfig, ProbeConfig};
pub use run::RunConfig;
pub use validation::{resolve_format, validate_config, validate_directory, validate_probe};
