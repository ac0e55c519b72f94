//! Path and directory management.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::{Error, Result};
use crate::fs::naming::day_folder_name;

/// Path of the day folder for a timestamp inside `directory`.
pub fn day_folder_path(directory: &Path, timestamp: &NaiveDateTime) -> PathBuf {
    directory.join(day_folder_name(timestamp))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// List the direct children of `directory` in the order the platform returns them.
pub fn list_entries(directory: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| Error::ReadDirectory {
        path: directory.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(directory).map_err(read_error)? {
        entries.push(entry.map_err(read_error)?.path());
    }

    Ok(entries)
}

/// Final location of a renamed file, without touching the filesystem.
pub fn planned_destination(
    directory: &Path,
    destination_name: &OsStr,
    day_folder: Option<&NaiveDateTime>,
) -> PathBuf {
    match day_folder {
        Some(timestamp) => day_folder_path(directory, timestamp).join(destination_name),
        None => directory.join(destination_name),
    }
}

/// Rename `original` to `destination_name` inside `directory`, then move it
/// into its day folder when `day_folder` is given.
///
/// An existing file at either target is replaced on platforms whose rename
/// replaces. Returns the final path.
pub fn relocate(
    directory: &Path,
    original: &Path,
    destination_name: &OsStr,
    day_folder: Option<&NaiveDateTime>,
) -> Result<PathBuf> {
    let renamed = directory.join(destination_name);
    move_file(original, &renamed)?;

    let Some(timestamp) = day_folder else {
        return Ok(renamed);
    };

    let folder = day_folder_path(directory, timestamp);
    ensure_dir(&folder).map_err(|e| match e {
        Error::Io(source) => Error::Relocate {
            from: renamed.clone(),
            to: folder.clone(),
            source,
        },
        other => other,
    })?;

    let target = folder.join(destination_name);
    move_file(&renamed, &target)?;
    Ok(target)
}

fn move_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| Error::Relocate {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
