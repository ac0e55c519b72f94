//! Configuration validation logic.

use std::path::{Path, PathBuf};

use crate::config::formats::TimestampFormat;
use crate::config::loader::{Config, ProbeConfig};
use crate::config::run::RunConfig;
use crate::error::{Error, Result};

/// Turn the merged configuration into a run configuration.
///
/// Fails before anything on disk is touched when the folder or format is
/// missing or invalid.
pub fn validate_config(config: &Config) -> Result<RunConfig> {
    let directory = validate_directory(config.options.directory.as_deref())?;
    let format = resolve_format(config.options.format.as_deref())?;
    validate_probe(&config.probe)?;

    Ok(RunConfig {
        directory,
        format,
        keep_original_name: config.options.keep_original_name,
        create_day_folders: config.options.create_day_folders,
        dry_run: config.options.dry_run,
        fail_fast: config.options.fail_fast,
        show_progress: config.options.show_progress,
        show_renames: config.options.show_renames,
    })
}

/// Resolve a user-selected label against the format catalog.
pub fn resolve_format(label: Option<&str>) -> Result<TimestampFormat> {
    label.ok_or(Error::FormatNotSelected)?.parse()
}

/// Check that a directory was chosen and exists.
pub fn validate_directory(directory: Option<&Path>) -> Result<PathBuf> {
    let directory = directory.ok_or(Error::MissingDirectory)?;

    if directory.as_os_str().is_empty() {
        return Err(Error::MissingDirectory);
    }

    if !directory.is_dir() {
        return Err(Error::InvalidDirectory(directory.to_path_buf()));
    }

    Ok(directory.to_path_buf())
}

/// Validate the probe settings.
pub fn validate_probe(probe: &ProbeConfig) -> Result<()> {
    if probe.ffprobe_path.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "ffprobe_path".to_string(),
            message: "Path to ffprobe cannot be empty".to_string(),
        });
    }

    if probe.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Probe timeout must be at least 1 second".to_string(),
        });
    }

    Ok(())
}
