use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid preferred date `{0}`")]
pub struct PreferredDateError(pub String);

/// Calendar day a visitor would like to move in or visit.
///
/// Timestamps are reduced to the date in their own UTC offset, never in the
/// server's local zone, so the day picked on the form is the day rendered in
/// the emails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PreferredDate(NaiveDate);

impl PreferredDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// ISO-8601 timestamp sent on the wire: midnight UTC of the chosen day.
    pub fn to_iso_string(&self) -> String {
        format!("{}T00:00:00.000Z", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for PreferredDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for PreferredDate {
    type Err = PreferredDateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(timestamp.date_naive()));
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| PreferredDateError(value.to_owned()))
    }
}

impl fmt::Display for PreferredDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%-d %B %Y"))
    }
}

impl Serialize for PreferredDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for PreferredDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Absent, `null` and `""` all mean "not sent".
pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<PreferredDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
