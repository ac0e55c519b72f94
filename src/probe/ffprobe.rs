//! ffprobe-backed creation time probe.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;

use crate::config::ProbeConfig;
use crate::probe::outcome::{parse_creation_time, ProbeOutcome, UnavailableReason};
use crate::probe::CreationTimeProbe;

/// Arguments asking ffprobe for the container's `creation_time` tag, value only.
const FFPROBE_ARGS: [&str; 6] = [
    "-v",
    "error",
    "-show_entries",
    "format_tags=creation_time",
    "-of",
    "default=noprint_wrappers=1:nokey=1",
];

/// Runs one `ffprobe` process per file.
#[derive(Debug, Clone)]
pub struct FfprobeProbe {
    program: PathBuf,
    timeout: Duration,
}

impl FfprobeProbe {
    /// Create a probe for the given executable and per-file timeout.
    pub fn new(program: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    /// Create a probe from the `[probe]` configuration section.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(config.ffprobe_path.clone(), config.timeout())
    }

    /// Executable this probe runs.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl CreationTimeProbe for FfprobeProbe {
    async fn creation_time(&self, path: &Path) -> ProbeOutcome {
        let mut command = Command::new(&self.program);
        command
            .args(FFPROBE_ARGS)
            .arg(path)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        tracing::debug!("Probing {}", path.display());

        let output = match timeout(self.timeout, command.output()).await {
            Err(_) => {
                return ProbeOutcome::Unavailable(UnavailableReason::TimedOut(self.timeout));
            }
            Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
                return ProbeOutcome::Unavailable(UnavailableReason::ToolNotFound(
                    self.program.display().to_string(),
                ));
            }
            Ok(Err(e)) => {
                return ProbeOutcome::Unavailable(UnavailableReason::SpawnFailed(e.to_string()));
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            return ProbeOutcome::Unavailable(UnavailableReason::ToolFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        tracing::debug!("ffprobe output for {}: {:?}", path.display(), stdout.trim());

        parse_creation_time(&stdout)
    }
}
