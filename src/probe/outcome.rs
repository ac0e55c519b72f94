//! Probe outcomes and creation-time parsing.

use std::sync::OnceLock;
use std::time::Duration;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// chrono pattern for the `creation_time` tag written by most cameras and muxers.
pub const CREATION_TIME_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Result of probing one file for its creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Creation time, taken literally from the tag (no time zone conversion).
    Timestamp(NaiveDateTime),
    /// No usable timestamp; the file is left alone.
    Unavailable(UnavailableReason),
}

impl ProbeOutcome {
    /// The timestamp, if one was found.
    pub fn timestamp(&self) -> Option<&NaiveDateTime> {
        match self {
            ProbeOutcome::Timestamp(ts) => Some(ts),
            ProbeOutcome::Unavailable(_) => None,
        }
    }
}

/// Why a file has no usable creation timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    #[error("probe tool not found: {0}")]
    ToolNotFound(String),

    #[error("failed to run probe: {0}")]
    SpawnFailed(String),

    #[error("probe timed out after {:?}", .0)]
    TimedOut(Duration),

    #[error("probe exited with {status}: {stderr}")]
    ToolFailed { status: String, stderr: String },

    #[error("no creation_time tag")]
    EmptyOutput,

    #[error("unrecognised creation_time value: '{0}'")]
    Malformed(String),
}

fn creation_time_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{1,6}Z$").unwrap()
    })
}

/// Parse raw probe stdout into an outcome.
///
/// Accepts exactly one `YYYY-MM-DDTHH:MM:SS.ffffffZ` value (one to six
/// fractional digits) surrounded by optional whitespace. Date and time
/// fields must be zero-padded, as ffprobe always writes them.
pub fn parse_creation_time(raw: &str) -> ProbeOutcome {
    let value = raw.trim();

    if value.is_empty() {
        return ProbeOutcome::Unavailable(UnavailableReason::EmptyOutput);
    }

    if !creation_time_shape().is_match(value) {
        return ProbeOutcome::Unavailable(UnavailableReason::Malformed(value.to_string()));
    }

    match NaiveDateTime::parse_from_str(value, CREATION_TIME_PATTERN) {
        Ok(ts) => ProbeOutcome::Timestamp(ts),
        // Right shape, impossible date (e.g. month 13).
        Err(_) => ProbeOutcome::Unavailable(UnavailableReason::Malformed(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_valid() {
        let outcome = parse_creation_time("2024-03-05T10:15:30.000000Z\n");
        let expected = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 30)
            .unwrap();
        assert_eq!(outcome, ProbeOutcome::Timestamp(expected));
    }

    #[test]
    fn test_parse_keeps_fraction() {
        let outcome = parse_creation_time("2024-03-05T10:15:30.250Z");
        let ts = outcome.timestamp().unwrap();
        assert_eq!(ts.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_no_timezone_shift() {
        let outcome = parse_creation_time("2024-03-05T23:59:59.000000Z");
        let ts = outcome.timestamp().unwrap();
        assert_eq!(ts.hour(), 23);
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            parse_creation_time("  \n"),
            ProbeOutcome::Unavailable(UnavailableReason::EmptyOutput)
        );
    }

    #[test]
    fn test_parse_malformed() {
        for raw in [
            "2024-03-05 10:15:30",
            "2024-03-05T10:15:30Z",
            "2024-03-05T10:15:30.1234567Z",
            "2024-03-05T10:15:30.000000+01:00",
            "2024-13-05T10:15:30.000000Z",
            "2024-3-5T9:15:30.000000Z",
            "2024-03-05T10:15:30.000000Z\n2024-03-06T10:15:30.000000Z",
        ] {
            assert!(
                matches!(
                    parse_creation_time(raw),
                    ProbeOutcome::Unavailable(UnavailableReason::Malformed(_))
                ),
                "expected malformed for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_reason_display() {
        let reason = UnavailableReason::TimedOut(Duration::from_secs(30));
        assert_eq!(reason.to_string(), "probe timed out after 30s");
        assert_eq!(
            UnavailableReason::EmptyOutput.to_string(),
            "no creation_time tag"
        );
    }
}
