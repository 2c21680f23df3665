//! Calendar events.
//!
//! Events are seeded from a static JSON document and mutated in memory for
//! completion and rescheduling. They are never written into the quota-bounded
//! store; the seed document is their only persistent home.

use std::fmt;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date_key::DateKey;
use crate::error::{DaybookError, DaybookResult};

/// A calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Unique id, assigned at creation time from a millisecond clock reading.
    pub id: i64,
    pub title: String,
    pub date: DateKey,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub completed: bool,
    #[serde(
        default,
        rename = "completedAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Millisecond clock reading used as an event id.
pub fn event_id_from(now: DateTime<Utc>) -> i64 {
    now.timestamp_millis()
}

/// Event category. Custom categories carry their label as data instead of
/// being smuggled through an "others: <label>" string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Birthday,
    Festival,
    Meeting,
    Important,
    Other(String),
}

impl EventKind {
    /// Parse the seed-file encoding ("birthday", "others: game night", ...).
    pub fn parse(s: &str) -> EventKind {
        match s {
            "birthday" => EventKind::Birthday,
            "festival" => EventKind::Festival,
            "meeting" => EventKind::Meeting,
            "important" => EventKind::Important,
            other => {
                let label = other.strip_prefix("others:").unwrap_or(other);
                EventKind::Other(label.trim().to_string())
            }
        }
    }

    /// Seed-file encoding, kept compatible with existing event documents.
    pub fn encode(&self) -> String {
        match self {
            EventKind::Birthday => "birthday".to_string(),
            EventKind::Festival => "festival".to_string(),
            EventKind::Meeting => "meeting".to_string(),
            EventKind::Important => "important".to_string(),
            EventKind::Other(label) => format!("others: {}", label),
        }
    }

    pub fn display_label(&self) -> &str {
        match self {
            EventKind::Birthday => "birthday",
            EventKind::Festival => "festival",
            EventKind::Meeting => "meeting",
            EventKind::Important => "important",
            EventKind::Other(label) => label,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventKind::Birthday => "🎂",
            EventKind::Festival => "🎉",
            EventKind::Meeting => "💼",
            EventKind::Important => "❗",
            EventKind::Other(_) => "➕",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(EventKind::parse(&s))
    }
}

/// Parse an "HH:MM" wall-clock time.
pub fn parse_time(s: &str) -> DaybookResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| DaybookError::InvalidTime(s.to_string()))
}

/// An event as submitted by the user, before validation.
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<DateKey>,
    pub time: Option<NaiveTime>,
    pub duration: Option<String>,
    pub kind: Option<EventKind>,
}

impl EventDraft {
    /// Validate the draft and turn it into an event with the given id.
    /// All field errors are collected; nothing is submitted partially.
    pub fn validate(self, id: i64) -> Result<Event, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required");
        }
        if self.date.is_none() {
            errors.date = Some("Date is required");
        }
        if self.time.is_none() {
            errors.time = Some("Time is required");
        }
        let kind = self.kind.unwrap_or(EventKind::Meeting);
        if let EventKind::Other(label) = &kind {
            if label.trim().is_empty() {
                errors.custom_label = Some("Custom event type is required");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Meetings without an explicit duration default to one hour.
        let duration = match (&kind, self.duration) {
            (EventKind::Meeting, None) => Some("1h".to_string()),
            (_, duration) => duration,
        };

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            date: self.date.unwrap(),
            time: self.time.unwrap(),
            duration,
            kind,
            completed: false,
            completed_at: None,
        })
    }
}

/// Per-field validation errors for an event draft.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<&'static str>,
    pub date: Option<&'static str>,
    pub time: Option<&'static str>,
    pub custom_label: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.custom_label.is_none()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [self.title, self.date, self.time, self.custom_label]
            .into_iter()
            .flatten()
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Serde helper for "HH:MM" times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: Some("2025-03-20".parse().unwrap()),
            time: Some(parse_time("15:00").unwrap()),
            duration: None,
            kind: Some(EventKind::Birthday),
        }
    }

    #[test]
    fn test_kind_roundtrips_custom_label_encoding() {
        let kind = EventKind::parse("others: game night");
        assert_eq!(kind, EventKind::Other("game night".to_string()));
        assert_eq!(kind.encode(), "others: game night");

        assert_eq!(EventKind::parse("birthday"), EventKind::Birthday);
        assert_eq!(EventKind::Birthday.encode(), "birthday");
    }

    #[test]
    fn test_event_json_uses_seed_file_shape() {
        let event = draft("Dentist").validate(1_700_000_000_000).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "birthday");
        assert_eq!(json["time"], "15:00");
        assert_eq!(json["date"], "2025-03-20");
        assert!(json.get("completedAt").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, event.id);
        assert_eq!(back.kind, EventKind::Birthday);
    }

    #[test]
    fn test_validation_collects_all_missing_fields() {
        let errors = EventDraft {
            kind: Some(EventKind::Other("  ".to_string())),
            ..Default::default()
        }
        .validate(1)
        .unwrap_err();

        assert_eq!(errors.title, Some("Title is required"));
        assert_eq!(errors.date, Some("Date is required"));
        assert_eq!(errors.time, Some("Time is required"));
        assert_eq!(errors.custom_label, Some("Custom event type is required"));
    }

    #[test]
    fn test_meetings_default_to_one_hour() {
        let mut d = draft("Standup");
        d.kind = Some(EventKind::Meeting);
        let event = d.validate(1).unwrap();
        assert_eq!(event.duration.as_deref(), Some("1h"));

        let mut d = draft("Standup");
        d.kind = Some(EventKind::Meeting);
        d.duration = Some("30m".to_string());
        assert_eq!(d.validate(1).unwrap().duration.as_deref(), Some("30m"));
    }
}
