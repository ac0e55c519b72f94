//! Timestamp Renamer - rename media files by their embedded creation time.
//!
//! Every regular file in a folder is probed with `ffprobe` for its
//! `creation_time` tag. Files with a timestamp are renamed after it, either
//! as `{timestamp}.MP4` or `{timestamp}-{original name}`, and can be sorted
//! into `YYYYMMDD` day folders. Files without one are left alone.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use timestamp_renamer::{FfprobeProbe, Renamer, RunConfig, TimestampFormat};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = RunConfig::new("/videos", TimestampFormat::YearFirstCompact);
//!     config.keep_original_name = true;
//!
//!     let probe = FfprobeProbe::new("ffprobe", Duration::from_secs(30));
//!     let report = Renamer::new(probe, config).run().await?;
//!     println!("{} renamed, {} skipped", report.renamed_count, report.skipped_count);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod output;
pub mod probe;
pub mod rename;

// Re-exports for convenience
pub use config::{Config, RunConfig, TimestampFormat};
pub use error::{Error, Result};
pub use probe::{CreationTimeProbe, FfprobeProbe, ProbeOutcome, UnavailableReason};
pub use rename::{FileOutcome, Renamer, RunReport};
