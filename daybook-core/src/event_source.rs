//! The static event seed document.
//!
//! Events load from a JSON file shaped `{ "events": [...] }`. An unreadable
//! or malformed source is logged and treated as an empty list, never as a
//! fatal error. Mutations made through the CLI are written back to the same
//! document.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DaybookError, DaybookResult};
use crate::event::Event;

#[derive(Serialize, Deserialize)]
struct EventDocument {
    #[serde(default)]
    events: Vec<Event>,
}

/// Load the seed document. Missing or malformed files yield an empty list.
pub fn load_events(path: &Path) -> Vec<Event> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("Could not read events from {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    match serde_json::from_str::<EventDocument>(&raw) {
        Ok(document) => document.events,
        Err(e) => {
            log::warn!("Malformed event document {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Write the full event list back to the seed document, atomically.
pub fn save_events(path: &Path, events: &[Event]) -> DaybookResult<()> {
    let document = EventDocument {
        events: events.to_vec(),
    };
    let content = serde_json::to_string_pretty(&document)
        .map_err(|e| DaybookError::Serialization(e.to_string()))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventKind;

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_events(&dir.path().join("events.json")).is_empty());
    }

    #[test]
    fn test_malformed_document_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ events: oops").unwrap();
        assert!(load_events(&path).is_empty());
    }

    #[test]
    fn test_seed_document_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{
              "events": [
                {
                  "id": 1718000000000,
                  "title": "Town festival",
                  "date": "2025-06-10",
                  "time": "18:00",
                  "type": "festival"
                },
                {
                  "id": 1718000000001,
                  "title": "Game night",
                  "date": "2025-06-11",
                  "time": "20:00",
                  "type": "others: games",
                  "completed": true,
                  "completedAt": "2025-06-11T21:30:00Z"
                }
              ]
            }"#,
        )
        .unwrap();

        let events = load_events(&path);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Festival);
        assert!(!events[0].completed);
        assert_eq!(events[1].kind, EventKind::Other("games".to_string()));
        assert!(events[1].completed_at.is_some());

        save_events(&path, &events).unwrap();
        let reloaded = load_events(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded[1].kind, events[1].kind);
    }
}
