//! # Data Model
//!
//! A [`Note`] is an id plus the two editable fields, [`NoteFields`]. Notes live in a
//! [`NoteCollection`], an ordered list that is persisted as a whole under a single
//! storage key.
//!
//! ## Wire Format
//!
//! The collection is a plain JSON array:
//!
//! ```json
//! [{"id": "6f1c...", "title": "Groceries", "content": "eggs"}]
//! ```
//!
//! Collections written by older clients used numeric ids (`{"id": 481516, ...}`).
//! Those still load: the number is kept as its decimal string, and is written back
//! as a string on the next save.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Opaque, stable identifier of a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Generates a fresh id for a note that is about to be persisted for the first time.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in listings.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Number(u64),
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawNoteId::deserialize(deserializer)? {
            RawNoteId::Text(text) => NoteId(text),
            RawNoteId::Number(n) => NoteId(n.to_string()),
        })
    }
}

/// The user-editable part of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NoteFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    #[serde(flatten)]
    pub fields: NoteFields,
}

impl Note {
    /// A note with a freshly generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(NoteId::generate(), NoteFields::new(title, content))
    }

    pub fn with_id(id: NoteId, fields: NoteFields) -> Self {
        Self { id, fields }
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn content(&self) -> &str {
        &self.fields.content
    }
}

/// Ordered list of notes. Ids are unique within a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteCollection {
    notes: Vec<Note>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn position(&self, id: &NoteId) -> Option<usize> {
        self.notes.iter().position(|n| &n.id == id)
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.position(id).is_some()
    }

    /// Replaces the note with the same id in place, or inserts it at the front.
    /// Returns `true` when the note was inserted.
    pub fn upsert(&mut self, note: Note) -> bool {
        match self.position(&note.id) {
            Some(idx) => {
                self.notes[idx] = note;
                false
            }
            None => {
                self.notes.insert(0, note);
                true
            }
        }
    }

    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        let idx = self.position(id)?;
        Some(self.notes.remove(idx))
    }

    /// Drops later duplicates of an id, keeping the first occurrence.
    /// Returns how many notes were dropped.
    pub fn dedup_ids(&mut self) -> usize {
        let before = self.notes.len();
        let mut seen = HashSet::new();
        self.notes.retain(|n| seen.insert(n.id.clone()));
        before - self.notes.len()
    }
}

impl From<Vec<Note>> for NoteCollection {
    fn from(notes: Vec<Note>) -> Self {
        let mut collection = Self { notes };
        collection.dedup_ids();
        collection
    }
}

impl<'a> IntoIterator for &'a NoteCollection {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}
