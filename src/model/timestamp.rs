//! Wire format for entity timestamps.
//!
//! Timestamps go out as RFC 3339 with millisecond precision and a `Z`
//! suffix (`2024-01-01T00:00:00.000Z`). Incoming values are accepted in a
//! few looser shapes, see [`parse`].

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// Formats a timestamp the way it appears in API responses.
pub fn format(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses a date/time string.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (or space
/// separated) datetime taken as UTC, or a bare `YYYY-MM-DD` date at
/// midnight UTC.
pub fn parse(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Years that render as four plain digits. Outside this range RFC 3339
/// text gains a sign or a fifth digit and no longer sorts as text.
pub const STORABLE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Whether `value` can be stored and ordered by every backend.
pub fn is_storable(value: &DateTime<Utc>) -> bool {
    STORABLE_YEARS.contains(&value.year())
}

/// Converts epoch milliseconds into a timestamp.
pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
}
