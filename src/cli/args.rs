//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Timestamp renamer CLI.
#[derive(Parser, Debug, Default)]
#[command(
    name = "timestamp-renamer",
    version,
    about = "Rename media files by their embedded creation timestamp",
    long_about = "Reads the creation_time tag of every file in a folder with ffprobe and renames\n\
                  the file after it, optionally keeping the original name and sorting files\n\
                  into YYYYMMDD day folders.\n\n\
                  Files without a creation time are left untouched."
)]
pub struct Args {
    /// Folder whose files should be renamed.
    pub directory: Option<PathBuf>,

    /// Timestamp format label, e.g. YYYYMMDD_HHMMSS (see --list-formats).
    #[arg(short, long)]
    pub format: Option<String>,

    /// Keep the original file name after the timestamp.
    #[arg(short, long, conflicts_with = "no_keep_name")]
    pub keep_name: bool,

    /// Replace the original file name (overrides the configuration file).
    #[arg(long)]
    pub no_keep_name: bool,

    /// Move renamed files into YYYYMMDD folders.
    #[arg(short = 'D', long, conflicts_with = "no_day_folders")]
    pub day_folders: bool,

    /// Leave renamed files in place (overrides the configuration file).
    #[arg(long)]
    pub no_day_folders: bool,

    /// Show what would be renamed without changing anything.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Stop at the first file that cannot be renamed or moved.
    #[arg(long)]
    pub fail_fast: bool,

    /// Path to configuration file.
    #[arg(short, long, env = "TIMESTAMP_RENAMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the effective options to the configuration file.
    #[arg(long)]
    pub save_config: bool,

    /// Path to the ffprobe executable.
    #[arg(long, env = "TIMESTAMP_RENAMER_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Seconds to wait for ffprobe on a single file.
    #[arg(long)]
    pub probe_timeout: Option<u64>,

    /// List the available timestamp formats and exit.
    #[arg(long)]
    pub list_formats: bool,

    /// Print the run report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Hide progress and per-file messages.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// Only options worth remembering are merged here; per-invocation
    /// switches go through [`Args::apply_run_switches`] so `--save-config`
    /// never persists them.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.directory {
            config.options.directory = Some(dir.clone());
        }

        if let Some(format) = &self.format {
            config.options.format = Some(format.clone());
        }

        // Boolean flags (only override if set to non-default)
        if self.keep_name {
            config.options.keep_original_name = true;
        }

        if self.no_keep_name {
            config.options.keep_original_name = false;
        }

        if self.day_folders {
            config.options.create_day_folders = true;
        }

        if self.no_day_folders {
            config.options.create_day_folders = false;
        }

        if let Some(ffprobe) = &self.ffprobe {
            config.probe.ffprobe_path = ffprobe.clone();
        }

        if let Some(timeout) = self.probe_timeout {
            config.probe.timeout_seconds = timeout;
        }
    }

    /// Apply switches that only affect this invocation.
    pub fn apply_run_switches(&self, config: &mut Config) {
        if self.dry_run {
            config.options.dry_run = true;
        }

        if self.fail_fast {
            config.options.fail_fast = true;
        }

        if self.quiet || self.json {
            config.options.show_progress = false;
        }

        if self.quiet {
            config.options.show_renames = false;
        }
    }
}
