//! ---
//! wms_section: "01-core-functionality"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "Start-time parsing and timestamp formatting primitives."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Wire format for every timestamp the system emits or accepts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors raised while resolving a simulation start time. Both variants
/// surface before any record is generated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartTimeError {
    #[error("start time '{input}' does not match 'YYYY-MM-DD HH:MM:SS'")]
    Format { input: String },
    #[error("start time must be a 'YYYY-MM-DD HH:MM:SS' string or a timestamp, found {found}")]
    Type { found: &'static str },
}

/// Starting point of a simulation run. `Now` resolves to the wall clock at
/// generation start, matching an unspecified start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartTime {
    #[default]
    Now,
    At(NaiveDateTime),
}

impl StartTime {
    /// Resolve to a concrete timestamp. Called once, before the first record.
    pub fn resolve(self) -> NaiveDateTime {
        match self {
            Self::Now => Local::now().naive_local(),
            Self::At(timestamp) => timestamp,
        }
    }
}

impl From<NaiveDateTime> for StartTime {
    fn from(timestamp: NaiveDateTime) -> Self {
        Self::At(timestamp)
    }
}

impl FromStr for StartTime {
    type Err = StartTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT)
            .map(Self::At)
            .map_err(|_| StartTimeError::Format {
                input: input.to_owned(),
            })
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Now => f.write_str("now"),
            Self::At(timestamp) => write!(f, "{}", timestamp.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl Serialize for StartTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Now => serializer.serialize_none(),
            Self::At(timestamp) => {
                serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
            }
        }
    }
}

struct StartTimeVisitor;

impl<'de> Visitor<'de> for StartTimeVisitor {
    type Value = StartTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 'YYYY-MM-DD HH:MM:SS' string or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(StartTime::Now)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(StartTime::Now)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Err(E::custom(StartTimeError::Type { found: "a boolean" }))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
        Err(E::custom(StartTimeError::Type { found: "an integer" }))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
        Err(E::custom(StartTimeError::Type { found: "an integer" }))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
        Err(E::custom(StartTimeError::Type { found: "a number" }))
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(StartTimeError::Type {
            found: "a sequence",
        }))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, _: A) -> Result<Self::Value, A::Error> {
        Err(de::Error::custom(StartTimeError::Type { found: "a mapping" }))
    }
}

impl<'de> Deserialize<'de> for StartTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StartTimeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_exact_pattern() {
        let start: StartTime = "2025-05-03 08:00:00".parse().unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 5, 3)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        assert_eq!(start, StartTime::At(expected));
    }

    #[test]
    fn rejects_malformed_string() {
        let err = "05-03-2025".parse::<StartTime>().unwrap_err();
        assert!(matches!(err, StartTimeError::Format { .. }));
    }

    #[test]
    fn rejects_date_without_time() {
        assert!("2025-05-03".parse::<StartTime>().is_err());
    }

    #[test]
    fn deserializes_string_and_null() {
        let start: StartTime = serde_yaml::from_str("\"2025-05-03 08:00:00\"").unwrap();
        assert!(matches!(start, StartTime::At(_)));
        let start: StartTime = serde_yaml::from_str("null").unwrap();
        assert_eq!(start, StartTime::Now);
    }

    #[test]
    fn deserializing_integer_is_a_type_error() {
        let err = serde_yaml::from_str::<StartTime>("42").unwrap_err();
        assert!(err.to_string().contains("found an integer"));
    }

    #[test]
    fn deserializing_malformed_string_is_a_format_error() {
        let err = serde_yaml::from_str::<StartTime>("\"05-03-2025\"").unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn now_resolves_to_wall_clock() {
        let before = Local::now().naive_local();
        let resolved = StartTime::Now.resolve();
        let after = Local::now().naive_local();
        assert!(resolved >= before && resolved <= after);
    }

    #[test]
    fn display_round_trips_explicit_timestamps() {
        let start: StartTime = "2025-05-03 08:00:00".parse().unwrap();
        assert_eq!(start.to_string(), "2025-05-03 08:00:00");
        assert_eq!(start.to_string().parse::<StartTime>().unwrap(), start);
    }
}
