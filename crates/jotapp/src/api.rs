//! # API Facade
//!
//! The API layer is a **thin facade** and the single entry point for UI clients.
//! It owns the one [`NoteStore`] and the one [`AutosaveController`] of a session and
//! hands the store to the controller by `&mut` when a commit is needed.
//!
//! ## Two Kinds of Callers
//!
//! - **Editors** (the CLI session, or any other interactive UI) use the autosave
//!   boundary: `schedule_autosave`, `poll`, `flush`, `cancel`, `save`, `select`,
//!   `new_note`, `delete_selected`, and read `status`.
//! - **One-shot commands** (`jot list`, `jot create`, ...) go through the command
//!   layer: `list_notes`, `view_notes`, `create_note`, `update_note`, `delete_notes`.
//!
//! The store boundary (`load_all`, `upsert`, `remove`, `exists`) is exposed as-is.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`, `store/` and `autosave/`
//! - **I/O to the user**: Returns data structures, not strings
//! - **Commit on drop**: Clients must `flush` (or `cancel`) before going away
//!
//! ## Generic Over Backend and Clock
//!
//! `JotApi<B: StorageBackend, C: Clock>`:
//! - Production: `JotApi<FsBackend, SystemClock>`
//! - Testing: `JotApi<MemBackend, ManualClock>`

use crate::autosave::{AutosaveController, Clock, SaveStatus};
use crate::commands::{self, helpers, CmdResult, DisplayNote, NoteUpdate};
use crate::error::Result;
use crate::model::{Note, NoteCollection, NoteFields, NoteId};
use crate::store::{NoteStore, StorageBackend};
use std::path::PathBuf;

pub struct JotApi<B: StorageBackend, C: Clock> {
    store: NoteStore<B>,
    autosave: AutosaveController<C>,
}

impl<B: StorageBackend, C: Clock> JotApi<B, C> {
    pub fn new(store: NoteStore<B>, autosave: AutosaveController<C>) -> Self {
        Self { store, autosave }
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    pub fn autosave(&self) -> &AutosaveController<C> {
        &self.autosave
    }

    // --- Store boundary ---

    /// Reloads from storage. A selected note that no longer exists is dropped,
    /// one that changed is rebased.
    pub fn load_all(&mut self) -> NoteCollection {
        let notes = self.store.load_all();
        self.autosave.refresh(&self.store);
        notes
    }

    pub fn upsert(&mut self, note: Note) -> Result<NoteCollection> {
        let notes = self.store.upsert(note)?;
        self.autosave.refresh(&self.store);
        Ok(notes)
    }

    pub fn remove(&mut self, id: &NoteId) -> Result<NoteCollection> {
        let notes = self.store.remove(id)?;
        self.autosave.forget(id);
        Ok(notes)
    }

    pub fn exists(&self, id: &NoteId) -> bool {
        self.store.exists(id)
    }

    pub fn notes(&self) -> &NoteCollection {
        self.store.notes()
    }

    /// Where the collection is persisted.
    pub fn note_path(&self) -> PathBuf {
        self.store.location()
    }

    // --- Autosave boundary ---

    pub fn status(&self) -> SaveStatus {
        self.autosave.status()
    }

    pub fn schedule_autosave(&mut self, fields: NoteFields) {
        self.autosave.schedule_autosave(fields);
    }

    pub fn edit_title(&mut self, title: impl Into<String>) {
        self.autosave.edit_title(title);
    }

    pub fn edit_content(&mut self, content: impl Into<String>) {
        self.autosave.edit_content(content);
    }

    pub fn poll(&mut self) -> Result<bool> {
        self.autosave.poll(&mut self.store)
    }

    pub fn flush(&mut self) -> Result<bool> {
        self.autosave.flush(&mut self.store)
    }

    pub fn cancel(&mut self) {
        self.autosave.cancel();
    }

    pub fn save(&mut self) -> Result<bool> {
        self.autosave.save(&mut self.store)
    }

    pub fn select(&mut self, id: &NoteId) -> Result<()> {
        self.autosave.select(&mut self.store, id)
    }

    /// Selects the note a user-facing selector (`2`, `id:42`, an id prefix) points at.
    /// Pending edits are committed first, so indexes refer to the listing after that commit.
    pub fn open(&mut self, selector: &str) -> Result<DisplayNote> {
        let selector: helpers::NoteSelector = selector.parse()?;
        self.autosave.flush(&mut self.store)?;
        let found = helpers::resolve_selector(self.store.notes(), &selector)?;
        self.autosave.select(&mut self.store, &found.note.id)?;
        Ok(found)
    }

    pub fn new_note(&mut self) -> Result<()> {
        self.autosave.new_note(&mut self.store)
    }

    pub fn delete_selected(&mut self) -> Result<bool> {
        self.autosave.delete_selected(&mut self.store)
    }

    // --- One-shot commands ---

    pub fn list_notes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = helpers::parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn create_note(&mut self, fields: NoteFields) -> Result<CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_note(&mut self, selector: &str, update: NoteUpdate) -> Result<CmdResult> {
        let selector: helpers::NoteSelector = selector.parse()?;
        let result = commands::update::run(&mut self.store, &selector, update)?;
        self.autosave.refresh(&self.store);
        Ok(result)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = helpers::parse_selectors(selectors)?;
        // A failed write can stop the batch after the selected note is already gone.
        let result = commands::delete::run(&mut self.store, &selectors);
        self.autosave.refresh(&self.store);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autosave::{AutosaveConfig, ManualClock};
    use crate::store::mem_backend::MemBackend;
    use std::time::Duration;

    fn api() -> (ManualClock, JotApi<MemBackend, ManualClock>) {
        let clock = ManualClock::new();
        let config = AutosaveConfig {
            autosave_delay: Duration::from_millis(500),
            save_delay: Duration::ZERO,
        };
        let api = JotApi::new(
            NoteStore::with_backend(MemBackend::new()),
            AutosaveController::new(config, clock.clone()),
        );
        (clock, api)
    }

    #[test]
    fn open_by_index_selects_note() {
        let (_clock, mut api) = api();
        api.create_note(NoteFields::new("A", "alpha")).unwrap();
        api.create_note(NoteFields::new("B", "beta")).unwrap();

        let opened = api.open("2").unwrap();
        assert_eq!(opened.note.title(), "A");
        assert_eq!(api.autosave().fields().content, "alpha");
        assert_eq!(api.status(), SaveStatus::Saved);
    }

    #[test]
    fn deleting_selected_note_by_command_resets_editor() {
        let (clock, mut api) = api();
        api.create_note(NoteFields::new("A", "")).unwrap();
        api.open("1").unwrap();
        api.edit_title("would resurrect");

        api.delete_notes(&["1"]).unwrap();
        clock.advance(Duration::from_millis(600));
        assert!(!api.poll().unwrap());

        assert!(api.notes().is_empty());
        assert_eq!(api.status(), SaveStatus::Idle);
    }

    #[test]
    fn remove_of_other_note_keeps_selection() {
        let (_clock, mut api) = api();
        api.create_note(NoteFields::new("A", "")).unwrap();
        api.create_note(NoteFields::new("B", "")).unwrap();
        let opened = api.open("1").unwrap();
        let other = api.notes().as_slice()[1].id.clone();

        api.remove(&other).unwrap();
        assert_eq!(api.autosave().selected(), Some(&opened.note.id));
    }

    #[test]
    fn update_of_open_note_rebases_editor() {
        let (clock, mut api) = api();
        api.create_note(NoteFields::new("Old", "body")).unwrap();
        api.open("1").unwrap();

        api.update_note(
            "1",
            NoteUpdate {
                title: Some("New".into()),
                content: None,
            },
        )
        .unwrap();
        assert_eq!(api.status(), SaveStatus::Saved);
        assert_eq!(api.autosave().fields().title, "New");

        api.edit_content("body2");
        clock.advance(Duration::from_millis(500));
        assert!(api.poll().unwrap());

        let stored = api.notes().iter().next().unwrap();
        assert_eq!(stored.title(), "New");
        assert_eq!(stored.content(), "body2");
    }

    #[test]
    fn cancel_after_upsert_reverts_to_stored_fields() {
        let (_clock, mut api) = api();
        api.create_note(NoteFields::new("Old", "")).unwrap();
        let opened = api.open("1").unwrap();

        api.upsert(Note::with_id(opened.note.id.clone(), NoteFields::new("Stored", ""))).unwrap();
        api.edit_title("draft");
        api.cancel();

        assert_eq!(api.autosave().fields().title, "Stored");
        assert_eq!(api.status(), SaveStatus::Saved);
    }

    #[test]
    fn pending_edit_survives_reload() {
        let (_clock, mut api) = api();
        api.create_note(NoteFields::new("A", "")).unwrap();
        api.open("1").unwrap();
        api.edit_title("typing");

        api.load_all();
        assert_eq!(api.status(), SaveStatus::Pending);
        assert_eq!(api.autosave().fields().title, "typing");
    }

    #[test]
    fn failed_batch_delete_still_drops_removed_selection() {
        let (clock, mut api) = api();
        api.create_note(NoteFields::new("A", "")).unwrap();
        api.create_note(NoteFields::new("B", "")).unwrap();
        let opened = api.open("1").unwrap();
        api.edit_title("would resurrect");

        api.store().backend().fail_after_writes(1);
        assert!(api.delete_notes(&["1", "2"]).is_err());
        api.store().backend().clear_write_failures();

        clock.advance(Duration::from_millis(600));
        assert!(!api.poll().unwrap());
        assert!(!api.exists(&opened.note.id));
        assert_eq!(api.notes().len(), 1);
        assert_eq!(api.status(), SaveStatus::Idle);
    }

    #[test]
    fn save_then_path() {
        let (_clock, mut api) = api();
        api.schedule_autosave(NoteFields::new("A", "x"));
        assert!(api.save().unwrap());
        assert_eq!(api.note_path(), PathBuf::from("memory://notes"));
        assert_eq!(api.list_notes().unwrap().listed_notes.len(), 1);
    }
}
