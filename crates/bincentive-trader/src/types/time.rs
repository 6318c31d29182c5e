/*
[INPUT]:  Caller-supplied datetimes, zoned or naive
[OUTPUT]: Wire timestamps with an explicit UTC offset
[POS]:    Data layer - timestamp normalization for time-range queries
[UPDATE]: When the gateway timestamp format changes
*/

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, TimeZone};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// A wire timestamp with an explicit UTC offset.
///
/// Naive datetimes are resolved in the local time zone; zoned datetimes keep
/// the offset they were supplied with. Whatever the caller passes in, the
/// serialized form always carries the offset, so the gateway never has to
/// guess the zone of a range bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Textual form sent to the gateway, e.g. `2024-01-02T03:04:05+08:00`.
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        let resolved = match Local.from_local_datetime(&value) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
            // Nonexistent local times (DST gap) are read as UTC.
            LocalResult::None => Local.from_utc_datetime(&value),
        };
        Timestamp(resolved.fixed_offset())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Timestamp(value.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct WireVisitor;

        impl Visitor<'_> for WireVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a timestamp like 2024-01-02T03:04:05+00:00")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
                DateTime::parse_from_str(value, WIRE_FORMAT)
                    .map(Timestamp)
                    .map_err(E::custom)
            }
        }

        deserializer.deserialize_str(WireVisitor)
    }
}
