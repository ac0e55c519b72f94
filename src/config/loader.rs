//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Rename options configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Folder whose files are renamed. Usually given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Timestamp format label (e.g. "YYYYMMDD_HHMMSS").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Append the original file name after the timestamp.
    #[serde(default)]
    pub keep_original_name: bool,

    /// Move renamed files into YYYYMMDD subfolders.
    #[serde(default)]
    pub create_day_folders: bool,

    /// Report what would happen without touching any file.
    #[serde(default, skip_serializing)]
    pub dry_run: bool,

    /// Stop at the first file that cannot be renamed or moved.
    #[serde(default)]
    pub fail_fast: bool,

    /// Whether to show the progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,

    /// Whether to log every rename.
    #[serde(default = "default_true")]
    pub show_renames: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            directory: None,
            format: None,
            keep_original_name: false,
            create_day_folders: false,
            dry_run: false,
            fail_fast: false,
            show_progress: true,
            show_renames: true,
        }
    }
}

/// External probe configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Path or name of the ffprobe executable.
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: PathBuf,

    /// Seconds to wait for one probe before giving up on that file.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: default_ffprobe_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl ProbeConfig {
    /// Probe timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_true() -> bool {
    true
}

fn default_ffprobe_path() -> PathBuf {
    PathBuf::from("ffprobe")
}

fn default_timeout_seconds() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating its parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // The target folder is per run; never persist it.
        let mut persisted = self.clone();
        persisted.options.directory = None;

        let content = toml::to_string_pretty(&persisted)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the configuration file for this platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "timestamp-renamer")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
