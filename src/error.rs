//! Error types for the timestamp-renamer application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Input validation errors
    #[error("No directory chosen. Pass the folder to rename as the first argument.")]
    MissingDirectory,

    #[error("Not a directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Please select a timestamp format (see --list-formats).")]
    FormatNotSelected,

    #[error("Invalid timestamp format selected: '{0}' (see --list-formats)")]
    UnknownFormat(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // File system errors
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} file(s) could not be renamed")]
    SomeFilesFailed(u64),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Whether this error was caused by bad user input, before anything was touched.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MissingDirectory
                | Error::InvalidDirectory(_)
                | Error::FormatNotSelected
                | Error::UnknownFormat(_)
                | Error::ConfigValidation { .. }
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const RENAME_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
    pub const SOME_FILES_FAILED: i32 = 6;
}
