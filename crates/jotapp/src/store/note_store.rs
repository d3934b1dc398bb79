use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::{Note, NoteCollection, NoteId};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key under which the collection is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "notes";

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    notes: NoteCollection,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Opens the store and loads whatever is persisted under `key`.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            notes: NoteCollection::new(),
        };
        store.load_all();
        store
    }

    pub fn with_backend(backend: B) -> Self {
        Self::open(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Re-reads the collection from storage and makes it the in-memory state.
    ///
    /// Missing, unreadable or malformed data yields an empty collection.
    pub fn load_all(&mut self) -> NoteCollection {
        self.notes = self.read_collection();
        self.notes.clone()
    }

    fn read_collection(&self) -> NoteCollection {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return NoteCollection::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read stored notes, starting empty");
                return NoteCollection::new();
            }
        };

        match serde_json::from_str::<NoteCollection>(&raw) {
            Ok(mut collection) => {
                let dropped = collection.dedup_ids();
                if dropped > 0 {
                    warn!(key = %self.key, dropped, "stored notes contained duplicate ids");
                }
                debug!(key = %self.key, count = collection.len(), "loaded notes");
                collection
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored notes are malformed, starting empty");
                NoteCollection::new()
            }
        }
    }

    /// Replaces the note with the same id in place, or inserts it at the front,
    /// then persists the whole collection. In-memory state only changes once the
    /// write succeeded.
    pub fn upsert(&mut self, note: Note) -> Result<NoteCollection> {
        let mut next = self.notes.clone();
        let id = note.id.clone();
        let inserted = next.upsert(note);
        self.persist(&next)?;
        self.notes = next;
        debug!(id = %id, inserted, "note saved");
        Ok(self.notes.clone())
    }

    /// Removes the note with `id`. Removing an absent id changes nothing and writes nothing.
    pub fn remove(&mut self, id: &NoteId) -> Result<NoteCollection> {
        if !self.exists(id) {
            return Ok(self.notes.clone());
        }
        let mut next = self.notes.clone();
        next.remove(id);
        self.persist(&next)?;
        self.notes = next;
        debug!(id = %id, "note removed");
        Ok(self.notes.clone())
    }

    pub fn exists(&self, id: &NoteId) -> bool {
        self.notes.contains(id)
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn notes(&self) -> &NoteCollection {
        &self.notes
    }

    /// Where the collection is persisted.
    pub fn location(&self) -> PathBuf {
        self.backend.location(&self.key)
    }

    fn persist(&self, collection: &NoteCollection) -> Result<()> {
        let raw = serde_json::to_string_pretty(collection)?;
        self.backend.write(&self.key, &raw)
    }
}
