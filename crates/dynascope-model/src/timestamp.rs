//! ISO-8601 rendering for descriptor timestamps.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC instant that serializes as an ISO-8601 string.
///
/// The store reports table timestamps (creation time, throughput changes,
/// billing mode updates) as epoch seconds. Report output wants readable text,
/// so this type is the explicit serialization strategy for the date/time
/// value kind: it renders as ISO-8601 on encode and parses ISO-8601 on
/// decode. Every other value kind in a descriptor passes through its natural
/// serde encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap an existing UTC instant.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Build a timestamp from epoch seconds and a nanosecond remainder.
    ///
    /// Out-of-range inputs clamp to the epoch rather than failing; descriptor
    /// timestamps are informational.
    #[must_use]
    pub fn from_epoch(secs: i64, nanos: u32) -> Self {
        Self(DateTime::from_timestamp(secs, nanos).unwrap_or_default())
    }

    /// The wrapped UTC instant.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Render as an ISO-8601 string (`2024-12-15T10:30:00Z`).
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let parsed = DateTime::parse_from_rfc3339(&text).map_err(serde::de::Error::custom)?;
        Ok(Self(parsed.with_timezone(&Utc)))
    }
}
