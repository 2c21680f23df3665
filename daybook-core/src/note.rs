//! Per-day journal notes.
//!
//! A note is a plain string, optionally prefixed with one mood emoji from a
//! fixed palette. At most one note exists per day; the store enforces that
//! by keying on the `DateKey`.

use serde::{Deserialize, Serialize};

/// The mood palette. A note carries at most one of these as its prefix.
pub const MOODS: [(&str, &str); 10] = [
    ("😊", "Happy"),
    ("😌", "Calm"),
    ("😴", "Tired"),
    ("😤", "Stressed"),
    ("🤔", "Thoughtful"),
    ("😢", "Sad"),
    ("😡", "Angry"),
    ("🤗", "Grateful"),
    ("😎", "Confident"),
    ("🥳", "Excited"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(String);

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Note(text.into())
    }

    pub fn with_mood(mood: &str, text: &str) -> Self {
        Note(format!("{} {}", mood, text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// The leading mood emoji, if the note starts with one from the palette.
    pub fn mood(&self) -> Option<&'static str> {
        MOODS
            .iter()
            .find(|(emoji, _)| self.0.starts_with(emoji))
            .map(|(emoji, _)| *emoji)
    }

    /// The note text with any mood prefix stripped.
    pub fn body(&self) -> &str {
        match self.mood() {
            Some(emoji) => self.0[emoji.len()..].trim_start(),
            None => &self.0,
        }
    }

    pub fn word_count(&self) -> usize {
        self.body().split_whitespace().count()
    }
}

/// A starting-point template for a journal note.
pub struct NoteTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub template: &'static str,
}

pub const TEMPLATES: [NoteTemplate; 5] = [
    NoteTemplate {
        id: "gratitude",
        name: "Gratitude Journal",
        icon: "🙏",
        template: "Today I'm grateful for:\n1. \n2. \n3. \n\nWhat made me smile today:\n\nHow I felt today:\n",
    },
    NoteTemplate {
        id: "reflection",
        name: "Daily Reflection",
        icon: "🤔",
        template: "What went well today:\n\nWhat could have been better:\n\nWhat I learned:\n\nTomorrow I will:\n",
    },
    NoteTemplate {
        id: "goals",
        name: "Goals & Progress",
        icon: "🎯",
        template: "Today's accomplishments:\n\nProgress on goals:\n\nChallenges faced:\n\nNext steps:\n",
    },
    NoteTemplate {
        id: "mood",
        name: "Mood Tracker",
        icon: "😊",
        template: "How I'm feeling: \n\nEnergy level (1-10): \n\nWhat influenced my mood:\n\nSelf-care activities:\n",
    },
    NoteTemplate {
        id: "free",
        name: "Free Writing",
        icon: "✍️",
        template: "",
    },
];

pub fn template(id: &str) -> Option<&'static NoteTemplate> {
    TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_prefix_is_recognized_and_stripped() {
        let note = Note::with_mood("😊", "Great day at the lake");
        assert_eq!(note.mood(), Some("😊"));
        assert_eq!(note.body(), "Great day at the lake");
    }

    #[test]
    fn test_plain_note_has_no_mood() {
        let note = Note::new("Just a regular entry");
        assert_eq!(note.mood(), None);
        assert_eq!(note.body(), "Just a regular entry");
    }

    #[test]
    fn test_unknown_emoji_is_not_a_mood() {
        let note = Note::new("🚀 launch day");
        assert_eq!(note.mood(), None);
        assert_eq!(note.body(), "🚀 launch day");
    }

    #[test]
    fn test_word_count_ignores_the_mood_marker() {
        let note = Note::with_mood("🥳", "we shipped it");
        assert_eq!(note.word_count(), 3);
    }

    #[test]
    fn test_templates_are_looked_up_by_id() {
        assert_eq!(template("gratitude").unwrap().name, "Gratitude Journal");
        assert!(template("nope").is_none());
    }
}
