//! Canonical per-day identity.
//!
//! Every piece of per-day data (notes, memories, event grouping) is keyed by
//! a `DateKey`. Its textual form is always `YYYY-MM-DD`, so lexicographic
//! order of the serialized keys matches chronological order. The store's
//! oldest-first eviction relies on that.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DaybookError;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        DateKey(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = DaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| DaybookError::InvalidDateKey(s.to_string()))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_through_string() {
        let key: DateKey = "2025-03-08".parse().unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 3, 8).unwrap());
        assert_eq!(key.to_string(), "2025-03-08");
    }

    #[test]
    fn test_rejects_invalid_dates() {
        assert!("2025-02-30".parse::<DateKey>().is_err());
        assert!("not-a-date".parse::<DateKey>().is_err());
        assert!("2025/03/08".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_ordering_matches_chronology_and_text() {
        let a: DateKey = "2024-12-31".parse().unwrap();
        let b: DateKey = "2025-01-01".parse().unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let key: DateKey = "2025-06-01".parse().unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2025-06-01\"");
        let back: DateKey = serde_json::from_str("\"2025-06-01\"").unwrap();
        assert_eq!(back, key);
    }
}
