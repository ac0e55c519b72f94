//! Run outcome tracking.

use std::path::PathBuf;

use serde::Serialize;

use crate::probe::UnavailableReason;

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    /// Renamed (or, in a dry run, would be renamed) from `from` to `to`.
    Renamed { from: PathBuf, to: PathBuf },
    /// No creation timestamp; left untouched.
    Skipped {
        path: PathBuf,
        reason: UnavailableReason,
    },
    /// Rename or move rejected by the filesystem. `path` is where the file
    /// is now, which is its renamed path when only the day-folder move failed.
    Failed { path: PathBuf, error: String },
}

/// Per-run report.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub dry_run: bool,

    /// Outcomes in processing order.
    pub files: Vec<FileOutcome>,

    // Statistics
    pub renamed_count: u64,
    pub skipped_count: u64,
    pub failed_count: u64,
    /// Entries that were never candidates (directories, the metadata sentinel).
    pub ignored_count: u64,
}

impl RunReport {
    /// Create an empty report for a run over `directory`.
    pub fn new(directory: PathBuf, dry_run: bool) -> Self {
        Self {
            directory,
            dry_run,
            ..Default::default()
        }
    }

    /// Record a successful (or planned) rename.
    pub fn record_renamed(&mut self, from: PathBuf, to: PathBuf) {
        self.renamed_count += 1;
        self.files.push(FileOutcome::Renamed { from, to });
    }

    /// Record a file left alone for lack of a timestamp.
    pub fn record_skipped(&mut self, path: PathBuf, reason: UnavailableReason) {
        self.skipped_count += 1;
        self.files.push(FileOutcome::Skipped { path, reason });
    }

    /// Record a file whose rename or move failed.
    pub fn record_failed(&mut self, path: PathBuf, error: String) {
        self.failed_count += 1;
        self.files.push(FileOutcome::Failed { path, error });
    }

    /// Increment the ignored entry count.
    pub fn increment_ignored(&mut self) {
        self.ignored_count += 1;
    }

    /// Files that failed, for reporting.
    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.files.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed { path, error } => Some((path, error.as_str())),
            _ => None,
        })
    }

    /// Whether every candidate file was either renamed or skipped.
    pub fn is_success(&self) -> bool {
        self.failed_count == 0
    }
}
