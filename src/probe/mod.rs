//! Probe module for reading embedded creation timestamps.
//!
//! Provides:
//! - The `CreationTimeProbe` seam used by the renamer
//! - An ffprobe implementation with a per-file timeout
//! - Parsing of the `creation_time` tag

pub mod ffprobe;
pub mod outcome;

use std::path::Path;

use async_trait::async_trait;

pub use ffprobe::FfprobeProbe;
pub use outcome::{parse_creation_time, ProbeOutcome, UnavailableReason, CREATION_TIME_PATTERN};

/// Something that can read a file's embedded creation time.
///
/// Implementations never fail: every problem is reported as
/// [`ProbeOutcome::Unavailable`] so one bad file cannot stop a run.
#[async_trait]
pub trait CreationTimeProbe: Send + Sync {
    async fn creation_time(&self, path: &Path) -> ProbeOutcome;
}
