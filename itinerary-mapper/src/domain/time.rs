//! Timestamp handling for the booking API.
//!
//! The API delivers times either as ISO-8601 strings or as Unix epoch
//! seconds, depending on the endpoint. This module keeps the upstream
//! representation intact (so it can be echoed back to consumers) and
//! provides the minute-difference rule used for segment and sector
//! durations.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// ISO-8601 layouts carrying a zone designator, tried after RFC 3339.
///
/// `%#z` accepts `Z`, `+02`, `+0200` and `+02:00`.
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

/// Naive date-time layouts accepted when a string carries no offset.
///
/// Such strings are interpreted as UTC so parsing never depends on the
/// host timezone.
const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// A timestamp as delivered by the booking API.
///
/// # Examples
///
/// ```
/// use itinerary_mapper::domain::Timestamp;
///
/// let iso = Timestamp::from("2020-01-01T10:00:00Z");
/// let epoch = Timestamp::from(1_577_872_800);
/// assert_eq!(iso.to_utc(), epoch.to_utc());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Seconds since the Unix epoch, possibly fractional.
    Epoch(Number),
    /// An ISO-8601 date or date-time string.
    Iso(String),
}

impl Timestamp {
    /// Resolve this timestamp to an instant in UTC.
    ///
    /// Returns `None` for strings that are not a recognisable ISO-8601
    /// date or date-time, and for epoch values outside chrono's range.
    /// Fractional epoch seconds are truncated to whole milliseconds.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Epoch(secs) => match secs.as_i64() {
                Some(secs) => DateTime::from_timestamp(secs, 0),
                None => from_fractional_epoch(secs.as_f64()?),
            },
            Timestamp::Iso(s) => parse_iso(s),
        }
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Timestamp::Iso(s.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Timestamp::Iso(s)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Epoch(Number::from(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Epoch(secs) => write!(f, "{secs}"),
            Timestamp::Iso(s) => f.write_str(s),
        }
    }
}

fn from_fractional_epoch(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    // Saturating cast; anything that large is rejected by chrono's range check
    let millis = (secs * 1000.0).trunc() as i64;
    DateTime::from_timestamp_millis(millis)
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole minutes from `from` to `to`.
///
/// Returns `None` if either side is absent or unparseable. The result
/// keeps its sign (`to - from`) and is truncated toward zero, so 89.9
/// minutes is 89 and -0.5 minutes is 0.
///
/// # Examples
///
/// ```
/// use itinerary_mapper::domain::{Timestamp, difference_in_minutes};
///
/// let from = Timestamp::from("2020-01-01T10:00:00Z");
/// let to = Timestamp::from("2020-01-01T11:30:00Z");
/// assert_eq!(difference_in_minutes(Some(&from), Some(&to)), Some(90));
/// assert_eq!(difference_in_minutes(None, Some(&to)), None);
/// ```
pub fn difference_in_minutes(from: Option<&Timestamp>, to: Option<&Timestamp>) -> Option<i64> {
    let from = from?.to_utc()?;
    let to = to?.to_utc()?;
    Some(to.signed_duration_since(from).num_minutes())
}
