//! Time-of-day helpers.
//!
//! Fixed commitments are entered as wall-clock times (`"09:30"`), while the
//! scheduler works on concrete `NaiveDateTime` values and integer minutes.
//! This module converts between the two and provides serde adapters so
//! `"HH:MM"` strings round-trip through JSON and TOML.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

const HHMM: &str = "%H:%M";
const HHMMSS: &str = "%H:%M:%S";

/// Parses a time of day written as `HH:MM` (or `HH:MM:SS`).
///
/// Returns `None` for anything else.
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, HHMM)
        .or_else(|_| NaiveTime::parse_from_str(value, HHMMSS))
        .ok()
}

/// Formats a time of day as `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(HHMM).to_string()
}

/// Minutes elapsed since midnight (seconds are truncated).
#[inline]
pub fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Whole minutes from `start` to `end` (negative if `end` precedes `start`).
#[inline]
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    end.signed_duration_since(start).num_minutes()
}

/// Timestamp `minutes` after midnight of `date`.
///
/// `1440` yields midnight of the following day.
pub fn at_minute(date: NaiveDate, minutes: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
}

/// Serde adapter for `Option<NaiveTime>` as `"HH:MM"` / `null`.
///
/// Absent fields, `null`, and empty strings all deserialize to `None`.
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&super::format_hhmm(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_hhmm(text)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid time of day '{text}', expected HH:MM"))),
        }
    }
}
