//! Format detection for string values
//!
//! Accepted date/time grammar (no locale sensitivity):
//!
//! - RFC 3339 timestamps: `2024-01-15T10:30:00Z`, `2024-01-15T10:30:00.125+05:00`
//! - ISO 8601 local date-times: `2024-01-15T10:30:00`, `2024-01-15 10:30:00.5`
//! - ISO 8601 calendar dates: `2024-01-15`
//!
//! The shape is matched first, then the value is validated as a real
//! calendar date/time, so `2024-13-40` stays a plain string.
//!
//! UUIDs must use the canonical hyphenated 8-4-4-4-12 form.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detected string format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// ISO 8601 date (YYYY-MM-DD)
    Date,
    /// ISO 8601 / RFC 3339 date-time
    DateTime,
    /// Canonical hyphenated UUID
    Uuid,
    /// No specific format detected
    None,
}

impl Format {
    /// Whether the format is a date or date-time literal
    pub fn is_temporal(&self) -> bool {
        matches!(self, Format::Date | Format::DateTime)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Date => write!(f, "date"),
            Format::DateTime => write!(f, "date-time"),
            Format::Uuid => write!(f, "uuid"),
            Format::None => write!(f, "none"),
        }
    }
}

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DATETIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})?$").unwrap()
});

const UUID_LENGTH: usize = 36;

/// Detect the format of a string value
///
/// Date-times are checked before dates, and temporal formats before UUIDs.
pub fn detect_format(value: &str) -> Format {
    if value.is_empty() {
        return Format::None;
    }

    if is_date_time(value) {
        return Format::DateTime;
    }

    if is_date(value) {
        return Format::Date;
    }

    if is_uuid(value) {
        return Format::Uuid;
    }

    Format::None
}

fn is_date_time(value: &str) -> bool {
    if !DATETIME_REGEX.is_match(value) {
        return false;
    }

    // The regex admits either separator; chrono's RFC 3339 parser does too
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }

    let normalized = value.replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
}

fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

fn is_uuid(value: &str) -> bool {
    value.len() == UUID_LENGTH && Uuid::try_parse(value).is_ok()
}
