//! Timestamp format catalog.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::Error;

/// Prompt entry shown before a format is chosen. Never resolves to a pattern.
pub const PLACEHOLDER_LABEL: &str = "Select timestamp format";

/// Available filename timestamp formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimestampFormat {
    /// `YYYYMMDD_HHMMSS`
    YearFirstCompact,
    /// `YYYY-MM-DD_HH-MM-SS`
    YearFirstDashed,
    /// `YYMMDD_HHMMSS`
    ShortYearFirstCompact,
    /// `YY-MM-DD_HH-MM-SS`
    ShortYearFirstDashed,
    /// `YY-MM-DD_HHMMSS`
    ShortYearFirstDashedDate,
    /// `DDMMYYYY_HHMMSS`
    DayFirstCompact,
    /// `DD-MM-YYYY_HH-MM-SS`
    DayFirstDashed,
    /// `DDMMYY_HHMMSS`
    ShortDayFirstCompact,
    /// `DD-MM-YY_HH-MM-SS`
    ShortDayFirstDashed,
}

impl TimestampFormat {
    /// Every format, in the order they are offered to the user.
    pub const ALL: [TimestampFormat; 9] = [
        TimestampFormat::YearFirstCompact,
        TimestampFormat::YearFirstDashed,
        TimestampFormat::ShortYearFirstCompact,
        TimestampFormat::ShortYearFirstDashed,
        TimestampFormat::ShortYearFirstDashedDate,
        TimestampFormat::DayFirstCompact,
        TimestampFormat::DayFirstDashed,
        TimestampFormat::ShortDayFirstCompact,
        TimestampFormat::ShortDayFirstDashed,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            TimestampFormat::YearFirstCompact => "YYYYMMDD_HHMMSS",
            TimestampFormat::YearFirstDashed => "YYYY-MM-DD_HH-MM-SS",
            TimestampFormat::ShortYearFirstCompact => "YYMMDD_HHMMSS",
            TimestampFormat::ShortYearFirstDashed => "YY-MM-DD_HH-MM-SS",
            TimestampFormat::ShortYearFirstDashedDate => "YY-MM-DD_HHMMSS",
            TimestampFormat::DayFirstCompact => "DDMMYYYY_HHMMSS",
            TimestampFormat::DayFirstDashed => "DD-MM-YYYY_HH-MM-SS",
            TimestampFormat::ShortDayFirstCompact => "DDMMYY_HHMMSS",
            TimestampFormat::ShortDayFirstDashed => "DD-MM-YY_HH-MM-SS",
        }
    }

    /// chrono `strftime` pattern for this format.
    pub fn pattern(&self) -> &'static str {
        match self {
            TimestampFormat::YearFirstCompact => "%Y%m%d_%H%M%S",
            TimestampFormat::YearFirstDashed => "%Y-%m-%d_%H-%M-%S",
            TimestampFormat::ShortYearFirstCompact => "%y%m%d_%H%M%S",
            TimestampFormat::ShortYearFirstDashed => "%y-%m-%d_%H-%M-%S",
            TimestampFormat::ShortYearFirstDashedDate => "%y-%m-%d_%H%M%S",
            TimestampFormat::DayFirstCompact => "%d%m%Y_%H%M%S",
            TimestampFormat::DayFirstDashed => "%d-%m-%Y_%H-%M-%S",
            TimestampFormat::ShortDayFirstCompact => "%d%m%y_%H%M%S",
            TimestampFormat::ShortDayFirstDashed => "%d-%m-%y_%H-%M-%S",
        }
    }

    /// Render a timestamp with this format.
    pub fn format(&self, timestamp: &NaiveDateTime) -> String {
        timestamp.format(self.pattern()).to_string()
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimestampFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let label = s.trim();

        if label.is_empty() || label.eq_ignore_ascii_case(PLACEHOLDER_LABEL) {
            return Err(Error::FormatNotSelected);
        }

        TimestampFormat::ALL
            .into_iter()
            .find(|format| format.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| Error::UnknownFormat(label.to_string()))
    }
}
