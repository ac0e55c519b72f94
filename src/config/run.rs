//! Validated, per-invocation run configuration.

use std::path::PathBuf;

use crate::config::formats::TimestampFormat;

/// Everything one rename run needs. Built once, never mutated during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Folder whose direct children are renamed.
    pub directory: PathBuf,

    /// Format used for the timestamp part of new names.
    pub format: TimestampFormat,

    /// Append the original file name after the timestamp.
    pub keep_original_name: bool,

    /// Move renamed files into YYYYMMDD subfolders.
    pub create_day_folders: bool,

    /// Compute names without renaming, moving or creating anything.
    pub dry_run: bool,

    /// Stop at the first relocation failure instead of recording it.
    pub fail_fast: bool,

    /// Draw a progress bar while files are processed.
    pub show_progress: bool,

    /// Log every rename at info level.
    pub show_renames: bool,
}

impl RunConfig {
    /// Minimal configuration with every optional behaviour switched off.
    pub fn new(directory: impl Into<PathBuf>, format: TimestampFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
            keep_original_name: false,
            create_day_folders: false,
            dry_run: false,
            fail_fast: false,
            show_progress: false,
            show_renames: false,
        }
    }
}
