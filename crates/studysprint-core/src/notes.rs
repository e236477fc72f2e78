//! Free-form study notes for the current session.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Maximum note length in characters.
pub const MAX_NOTES_LEN: usize = 200;

/// A single block of text, saved verbatim up to [`MAX_NOTES_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notes {
    text: String,
}

impl Notes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the notes. Longer input is cut at [`MAX_NOTES_LEN`]
    /// characters; an empty string clears them.
    pub fn set_notes(&mut self, text: &str) -> Option<Event> {
        let text: String = text.chars().take(MAX_NOTES_LEN).collect();
        if text == self.text {
            return None;
        }
        self.text = text;
        Some(Event::NotesUpdated {
            length: self.text.chars().count(),
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_text() {
        let mut notes = Notes::new();
        let event = notes.set_notes("chapter 3 problems").unwrap();
        assert!(matches!(event, Event::NotesUpdated { length: 18, .. }));
        assert_eq!(notes.text(), "chapter 3 problems");

        notes.set_notes("");
        assert!(notes.is_empty());
    }

    #[test]
    fn long_text_is_cut_by_characters() {
        let mut notes = Notes::new();
        let long = "é".repeat(MAX_NOTES_LEN + 25);
        notes.set_notes(&long);
        assert_eq!(notes.text().chars().count(), MAX_NOTES_LEN);
    }

    #[test]
    fn unchanged_text_is_no_op() {
        let mut notes = Notes::new();
        notes.set_notes("review flashcards");
        assert!(notes.set_notes("review flashcards").is_none());
        assert!(Notes::new().set_notes("").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let mut notes = Notes::new();
        notes.set_notes("  spaced  ");
        assert_eq!(serde_json::to_string(&notes).unwrap(), "\"  spaced  \"");
        let back: Notes = serde_json::from_str("\"saved\"").unwrap();
        assert_eq!(back.text(), "saved");
    }
}
