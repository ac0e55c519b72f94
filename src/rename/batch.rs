//! Batch rename run loop.

use std::path::Path;

use indicatif::ProgressBar;

use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::fs::{destination_name, is_metadata_sentinel, list_entries, planned_destination, relocate};
use crate::output::create_item_bar;
use crate::probe::{CreationTimeProbe, ProbeOutcome};
use crate::rename::report::RunReport;

/// Renames every timestamped file in one directory.
pub struct Renamer<P> {
    probe: P,
    config: RunConfig,
}

impl<P: CreationTimeProbe> Renamer<P> {
    /// Create a renamer for one run.
    pub fn new(probe: P, config: RunConfig) -> Self {
        Self { probe, config }
    }

    /// Process the directory once.
    ///
    /// Entries are visited in listing order, one at a time. Files without a
    /// timestamp are skipped. Relocation failures are recorded and the run
    /// continues, unless `fail_fast` is set, in which case the first one is
    /// returned as the error.
    pub async fn run(&self) -> Result<RunReport> {
        let directory = &self.config.directory;
        let mut report = RunReport::new(directory.clone(), self.config.dry_run);

        let entries = list_entries(directory)?;
        tracing::info!(
            "Scanning {} ({} entries)",
            directory.display(),
            entries.len()
        );

        let progress = if self.config.show_progress {
            create_item_bar(entries.len() as u64, "Renaming")
        } else {
            ProgressBar::hidden()
        };

        for path in entries {
            let result = self.process_entry(&path, &progress, &mut report).await;
            progress.inc(1);

            if let Err(e) = result {
                if self.config.fail_fast {
                    progress.abandon();
                    return Err(e);
                }
                progress.suspend(|| tracing::warn!("Failed to rename {}: {}", path.display(), e));
                // An in-place rename may have succeeded before the move failed.
                let current = match &e {
                    Error::Relocate { from, .. } => from.clone(),
                    _ => path,
                };
                report.record_failed(current, e.to_string());
            }
        }

        progress.finish_and_clear();
        Ok(report)
    }

    /// Probe, name and relocate one directory entry.
    async fn process_entry(
        &self,
        path: &Path,
        progress: &ProgressBar,
        report: &mut RunReport,
    ) -> Result<()> {
        let Some(file_name) = path.file_name() else {
            report.increment_ignored();
            return Ok(());
        };

        if is_metadata_sentinel(file_name) || !path.is_file() {
            tracing::debug!("Ignoring {}", path.display());
            report.increment_ignored();
            return Ok(());
        }

        let timestamp = match self.probe.creation_time(path).await {
            ProbeOutcome::Timestamp(ts) => ts,
            ProbeOutcome::Unavailable(reason) => {
                progress.suspend(|| tracing::warn!("Skipping {}: {}", path.display(), reason));
                report.record_skipped(path.to_path_buf(), reason);
                return Ok(());
            }
        };

        let new_name = destination_name(
            file_name,
            &timestamp,
            self.config.format,
            self.config.keep_original_name,
        );
        let day_folder = self.config.create_day_folders.then_some(&timestamp);

        let target = if self.config.dry_run {
            planned_destination(&self.config.directory, &new_name, day_folder)
        } else {
            relocate(&self.config.directory, path, &new_name, day_folder)?
        };

        if self.config.show_renames {
            let verb = if self.config.dry_run { "Would rename" } else { "Renamed" };
            progress.suspend(|| {
                tracing::info!("{}: {} -> {}", verb, path.display(), target.display())
            });
        }

        report.record_renamed(path.to_path_buf(), target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimestampFormat;
    use crate::rename::FileOutcome;
    use crate::probe::{parse_creation_time, UnavailableReason};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Answers from a fixed table keyed by file name and records every call.
    #[derive(Default)]
    struct TableProbe {
        answers: HashMap<String, String>,
        calls: Mutex<Vec<String>>,
    }

    impl TableProbe {
        fn with(entries: &[(&str, &str)]) -> Self {
            Self {
                answers: entries
                    .iter()
                    .map(|(name, raw)| (name.to_string(), raw.to_string()))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CreationTimeProbe for TableProbe {
        async fn creation_time(&self, path: &Path) -> ProbeOutcome {
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            self.calls.lock().unwrap().push(name.clone());
            match self.answers.get(&name) {
                Some(raw) => parse_creation_time(raw),
                None => ProbeOutcome::Unavailable(UnavailableReason::EmptyOutput),
            }
        }
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), name.as_bytes()).unwrap();
    }

    fn run_config(dir: &Path) -> RunConfig {
        RunConfig::new(dir, TimestampFormat::YearFirstCompact)
    }

    #[tokio::test]
    async fn test_sentinel_only_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".DS_Store");
        let probe = TableProbe::with(&[(".DS_Store", "2024-03-05T10:15:30.000000Z")]);

        let renamer = Renamer::new(probe, run_config(dir.path()));
        let report = renamer.run().await.unwrap();

        assert_eq!(report.renamed_count, 0);
        assert_eq!(report.ignored_count, 1);
        assert!(report.is_success());
        assert!(renamer.probe.calls().is_empty());
        assert!(dir.path().join(".DS_Store").is_file());
    }

    #[tokio::test]
    async fn test_keep_name_rename() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "clip.mov");
        let probe = TableProbe::with(&[("clip.mov", "2024-03-05T10:15:30.000000Z")]);

        let mut config = run_config(dir.path());
        config.keep_original_name = true;
        let report = Renamer::new(probe, config).run().await.unwrap();

        assert_eq!(report.renamed_count, 1);
        assert!(dir.path().join("20240305_101530-clip.mov").is_file());
        assert!(!dir.path().join("clip.mov").exists());
    }

    #[tokio::test]
    async fn test_discard_name_rename() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "clip.mov");
        let probe = TableProbe::with(&[("clip.mov", "2024-03-05T10:15:30.000000Z")]);

        Renamer::new(probe, run_config(dir.path()))
            .run()
            .await
            .unwrap();

        assert!(dir.path().join("20240305_101530.MP4").is_file());
    }

    #[tokio::test]
    async fn test_day_folder_bucketing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.mov");
        touch(dir.path(), "b.mov");
        touch(dir.path(), "c.mov");
        let probe = TableProbe::with(&[
            ("a.mov", "2024-03-05T08:00:00.000000Z"),
            ("b.mov", "2024-03-05T21:30:00.000000Z"),
            ("c.mov", "2024-03-06T09:00:00.000000Z"),
        ]);

        let mut config = run_config(dir.path());
        config.keep_original_name = true;
        config.create_day_folders = true;
        let report = Renamer::new(probe, config).run().await.unwrap();

        assert_eq!(report.renamed_count, 3);
        let first_day = dir.path().join("20240305");
        let second_day = dir.path().join("20240306");
        assert!(first_day.join("20240305_080000-a.mov").is_file());
        assert!(first_day.join("20240305_213000-b.mov").is_file());
        assert!(second_day.join("20240306_090000-c.mov").is_file());
        assert_eq!(fs::read_dir(&first_day).unwrap().count(), 2);
        assert_eq!(fs::read_dir(&second_day).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_missing_metadata_is_skipped() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "clip.mov");
        let probe = TableProbe::with(&[("clip.mov", "2024-03-05T10:15:30.000000Z")]);

        let report = Renamer::new(probe, run_config(dir.path()))
            .run()
            .await
            .unwrap();

        assert_eq!(report.skipped_count, 1);
        assert_eq!(report.renamed_count, 1);
        assert_eq!(
            fs::read(dir.path().join("notes.txt")).unwrap(),
            b"notes.txt"
        );
        assert!(dir.path().join("20240305_101530.MP4").is_file());
    }

    #[tokio::test]
    async fn test_subdirectories_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("20240101")).unwrap();
        let probe = TableProbe::default();

        let renamer = Renamer::new(probe, run_config(dir.path()));
        let report = renamer.run().await.unwrap();

        assert_eq!(report.ignored_count, 1);
        assert!(renamer.probe.calls().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "clip.mov");
        let probe = TableProbe::with(&[("clip.mov", "2024-03-05T10:15:30.000000Z")]);

        let mut config = run_config(dir.path());
        config.dry_run = true;
        config.create_day_folders = true;
        let report = Renamer::new(probe, config).run().await.unwrap();

        assert!(report.dry_run);
        assert_eq!(report.renamed_count, 1);
        assert!(dir.path().join("clip.mov").is_file());
        assert!(!dir.path().join("20240305").exists());
        assert_eq!(
            report.files[0],
            FileOutcome::Renamed {
                from: dir.path().join("clip.mov"),
                to: dir.path().join("20240305").join("20240305_101530.MP4"),
            }
        );
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.mov");
        touch(dir.path(), "b.mov");
        // A plain file where a.mov's day folder belongs; b.mov lands on another day.
        fs::write(dir.path().join("20240305"), b"not a folder").unwrap();
        let probe = TableProbe::with(&[
            ("a.mov", "2024-03-05T08:00:00.000000Z"),
            ("b.mov", "2024-03-06T08:00:00.000000Z"),
        ]);

        let mut config = run_config(dir.path());
        config.create_day_folders = true;
        let report = Renamer::new(probe, config).run().await.unwrap();

        assert_eq!(report.failed_count, 1);
        assert_eq!(report.renamed_count, 1);
        assert!(!report.is_success());
        assert!(dir.path().join("20240306").join("20240306_080000.MP4").is_file());

        // a.mov was renamed in place before its move failed; the report says so.
        let renamed_in_place = dir.path().join("20240305_080000.MP4");
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, &renamed_in_place);
        assert!(renamed_in_place.is_file());
        assert!(!dir.path().join("a.mov").exists());
    }

    #[tokio::test]
    async fn test_run_with_visible_bar_and_rename_lines() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "clip.mov");
        touch(dir.path(), "notes.txt");
        let probe = TableProbe::with(&[("clip.mov", "2024-03-05T10:15:30.000000Z")]);

        let mut config = run_config(dir.path());
        config.show_progress = true;
        config.show_renames = true;
        let report = Renamer::new(probe, config).run().await.unwrap();

        assert_eq!(report.renamed_count, 1);
        assert_eq!(report.skipped_count, 1);
        assert!(dir.path().join("20240305_101530.MP4").is_file());
    }

    #[tokio::test]
    async fn test_fail_fast_returns_first_error() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.mov");
        fs::write(dir.path().join("20240305"), b"not a folder").unwrap();
        let probe = TableProbe::with(&[("a.mov", "2024-03-05T08:00:00.000000Z")]);

        let mut config = run_config(dir.path());
        config.create_day_folders = true;
        config.fail_fast = true;
        let result = Renamer::new(probe, config).run().await;

        assert!(matches!(result, Err(Error::Relocate { .. })));
    }
}
