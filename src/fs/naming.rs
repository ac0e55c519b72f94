//! Destination name generation.

use std::ffi::{OsStr, OsString};

use chrono::NaiveDateTime;

use crate::config::TimestampFormat;

/// Directory metadata file written by macOS Finder. Never renamed.
pub const METADATA_SENTINEL: &str = ".DS_Store";

/// Extension used when the original name is discarded, whatever the source type.
pub const DISCARDED_NAME_EXTENSION: &str = ".MP4";

/// Day folder pattern (YYYYMMDD).
const DAY_FOLDER_PATTERN: &str = "%Y%m%d";

/// Check whether a directory entry is the metadata sentinel.
pub fn is_metadata_sentinel(name: &OsStr) -> bool {
    name == OsStr::new(METADATA_SENTINEL)
}

/// Build the new file name for a timestamped file.
///
/// With `keep_original_name` the result is `{timestamp}-{original}`, which
/// keeps the original base name and extension. Otherwise it is
/// `{timestamp}.MP4`. Non-UTF-8 original names are carried through as-is.
pub fn destination_name(
    original: &OsStr,
    timestamp: &NaiveDateTime,
    format: TimestampFormat,
    keep_original_name: bool,
) -> OsString {
    let mut name = OsString::from(format.format(timestamp));

    if keep_original_name {
        name.push("-");
        name.push(original);
    } else {
        name.push(DISCARDED_NAME_EXTENSION);
    }

    name
}

/// Name of the day folder a timestamp belongs to.
pub fn day_folder_name(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DAY_FOLDER_PATTERN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_keep_original_name() {
        let name = destination_name(
            OsStr::new("clip.mov"),
            &at(2024, 3, 5, 10, 15, 30),
            TimestampFormat::YearFirstCompact,
            true,
        );
        assert_eq!(name, "20240305_101530-clip.mov");
    }

    #[test]
    fn test_discard_original_name() {
        let name = destination_name(
            OsStr::new("clip.mov"),
            &at(2024, 3, 5, 10, 15, 30),
            TimestampFormat::YearFirstCompact,
            false,
        );
        assert_eq!(name, "20240305_101530.MP4");
    }

    #[test]
    fn test_discard_uses_fixed_extension_for_any_type() {
        let name = destination_name(
            OsStr::new("photo.jpeg"),
            &at(2024, 3, 5, 10, 15, 30),
            TimestampFormat::DayFirstDashed,
            false,
        );
        assert_eq!(name, "05-03-2024_10-15-30.MP4");
    }

    #[test]
    fn test_keep_name_without_extension_or_with_many_dots() {
        let ts = at(2023, 12, 31, 23, 0, 1);
        assert_eq!(
            destination_name(OsStr::new("README"), &ts, TimestampFormat::YearFirstCompact, true),
            "20231231_230001-README"
        );
        assert_eq!(
            destination_name(
                OsStr::new("take.2.final.mp4"),
                &ts,
                TimestampFormat::ShortYearFirstCompact,
                true
            ),
            "231231_230001-take.2.final.mp4"
        );
    }

    #[test]
    fn test_no_timezone_shift_in_name() {
        let ts = crate::probe::parse_creation_time("2024-03-05T23:59:59.000000Z");
        let name = destination_name(
            OsStr::new("late.mov"),
            ts.timestamp().unwrap(),
            TimestampFormat::YearFirstDashed,
            false,
        );
        assert_eq!(name, "2024-03-05_23-59-59.MP4");
    }

    #[test]
    fn test_day_folder_name() {
        assert_eq!(day_folder_name(&at(2024, 3, 5, 0, 0, 0)), "20240305");
        assert_eq!(day_folder_name(&at(2024, 3, 6, 23, 59, 59)), "20240306");
    }

    #[test]
    fn test_is_metadata_sentinel() {
        assert!(is_metadata_sentinel(OsStr::new(".DS_Store")));
        assert!(!is_metadata_sentinel(OsStr::new(".ds_store.mov")));
        assert!(!is_metadata_sentinel(OsStr::new("clip.mov")));
    }
}
