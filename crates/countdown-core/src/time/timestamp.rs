//! Wall-clock instants in epoch milliseconds.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A point in time, milliseconds since the Unix epoch.
///
/// Carries no timezone; whatever the platform clock encodes is what we get.
/// Serialized as an ISO-8601 string (`2026-12-31T23:59:00.000Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Signed distance `self - earlier` in milliseconds.
    pub fn millis_since(self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }

    pub fn plus_millis(self, ms: i64) -> Self {
        Self(self.0.saturating_add(ms))
    }

    /// Whole second within the current minute (0..=59).
    pub fn second_of_minute(self) -> u32 {
        self.0.div_euclid(1_000).rem_euclid(60) as u32
    }

    /// Drops seconds and milliseconds, the resolution of the target picker.
    pub fn truncate_to_minute(self) -> Self {
        Self(self.0 - self.0.rem_euclid(60_000))
    }

    /// Out-of-range values collapse to the epoch.
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    pub fn to_iso_string(self) -> String {
        self.to_datetime()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Parse an RFC 3339 / ISO-8601 string with an explicit offset.
    pub fn parse_iso(input: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(input.trim())
            .ok()
            .map(|dt| Self::from(dt.with_timezone(&Utc)))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse_iso(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {raw}")))
    }
}

const LOCAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a user-supplied countdown target.
///
/// Accepts, in order:
/// - RFC 3339 with offset (`2026-12-31T23:59:00Z`, `2026-12-31T23:59:00+02:00`)
/// - local date and time (`2026-12-31 23:59`, `2026-12-31T23:59:30`)
/// - local date alone, meaning midnight (`2026-12-31`)
///
/// Local times that do not exist (inside a DST gap) are rejected.
pub fn parse_target(input: &str) -> Result<Timestamp, ValidationError> {
    let trimmed = input.trim();
    let invalid = || ValidationError::InvalidTimestamp {
        input: input.to_string(),
    };

    if let Some(ts) = Timestamp::parse_iso(trimmed) {
        return Ok(ts);
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(Timestamp::from)
        .ok_or_else(invalid)
}
