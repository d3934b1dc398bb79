use super::clock::Clock;
use super::timer::{CommitReason, DebounceTimer};
use crate::error::{JotError, Result};
use crate::model::{Note, NoteFields, NoteId};
use crate::store::{NoteStore, StorageBackend};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Quiet period after the last edit before it is committed.
    pub autosave_delay: Duration,
    /// Delay between an explicit save and its commit, so "Saving…" is visible.
    pub save_delay: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            autosave_delay: Duration::from_millis(500),
            save_delay: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    /// Blank form, nothing to save.
    Idle,
    /// The draft matches the last commit.
    Saved,
    /// A commit is scheduled.
    Pending,
    /// The last commit failed; the draft is still unsaved.
    Failed,
}

impl SaveStatus {
    pub fn is_unsaved(self) -> bool {
        matches!(self, SaveStatus::Pending | SaveStatus::Failed)
    }
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaveStatus::Idle => "New note",
            SaveStatus::Saved => "Saved",
            SaveStatus::Pending => "Saving…",
            SaveStatus::Failed => "Save failed",
        };
        f.write_str(label)
    }
}

pub struct AutosaveController<C: Clock> {
    config: AutosaveConfig,
    clock: C,
    /// `None` while editing a blank form.
    selected: Option<NoteId>,
    draft: NoteFields,
    committed: NoteFields,
    timer: DebounceTimer,
    status: SaveStatus,
    last_error: Option<String>,
    last_saved_at: Option<DateTime<Utc>>,
}

impl<C: Clock> AutosaveController<C> {
    pub fn new(config: AutosaveConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            selected: None,
            draft: NoteFields::default(),
            committed: NoteFields::default(),
            timer: DebounceTimer::new(),
            status: SaveStatus::Idle,
            last_error: None,
            last_saved_at: None,
        }
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn selected(&self) -> Option<&NoteId> {
        self.selected.as_ref()
    }

    pub fn fields(&self) -> &NoteFields {
        &self.draft
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        self.last_saved_at
    }

    /// When the armed commit is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Records new field values and (re)arms the debounce timer.
    pub fn schedule_autosave(&mut self, fields: NoteFields) {
        self.draft = fields;
        let now = self.clock.now();
        if self
            .timer
            .arm(now, self.config.autosave_delay, CommitReason::Autosave)
            .is_some()
        {
            trace!("pending commit replaced by newer edit");
        }
        self.status = SaveStatus::Pending;
        debug!(
            note = ?self.selected,
            delay_ms = self.config.autosave_delay.as_millis() as u64,
            "autosave armed"
        );
    }

    pub fn edit_title(&mut self, title: impl Into<String>) {
        let fields = NoteFields {
            title: title.into(),
            ..self.draft.clone()
        };
        self.schedule_autosave(fields);
    }

    pub fn edit_content(&mut self, content: impl Into<String>) {
        let fields = NoteFields {
            content: content.into(),
            ..self.draft.clone()
        };
        self.schedule_autosave(fields);
    }

    /// Commits if the armed timer has expired. Returns whether a commit happened.
    pub fn poll<B: StorageBackend>(&mut self, store: &mut NoteStore<B>) -> Result<bool> {
        let now = self.clock.now();
        match self.timer.take_due(now) {
            Some(pending) => self.commit(store, pending.reason).map(|_| true),
            None => Ok(false),
        }
    }

    /// Commits a pending (or previously failed) change right away.
    pub fn flush<B: StorageBackend>(&mut self, store: &mut NoteStore<B>) -> Result<bool> {
        match self.timer.take() {
            Some(pending) => self.commit(store, pending.reason).map(|_| true),
            None if self.status == SaveStatus::Failed => {
                self.commit(store, CommitReason::Autosave).map(|_| true)
            }
            None => Ok(false),
        }
    }

    /// Drops the pending commit and reverts the draft to what was last committed.
    pub fn cancel(&mut self) {
        if self.timer.cancel().is_some() {
            debug!(note = ?self.selected, "pending commit cancelled");
        }
        self.draft = self.committed.clone();
        self.last_error = None;
        self.status = self.resting_status();
    }

    /// Explicit save. Commits after the cosmetic `save_delay`, or at once when it is zero.
    pub fn save<B: StorageBackend>(&mut self, store: &mut NoteStore<B>) -> Result<bool> {
        self.timer.cancel();
        self.status = SaveStatus::Pending;
        if self.config.save_delay.is_zero() {
            return self.commit(store, CommitReason::ExplicitSave).map(|_| true);
        }
        let now = self.clock.now();
        self.timer
            .arm(now, self.config.save_delay, CommitReason::ExplicitSave);
        Ok(false)
    }

    /// Switches to an existing note, flushing the current one first.
    /// If the flush fails the switch does not happen.
    pub fn select<B: StorageBackend>(
        &mut self,
        store: &mut NoteStore<B>,
        id: &NoteId,
    ) -> Result<()> {
        if !store.exists(id) {
            return Err(JotError::NoteNotFound(id.to_string()));
        }
        self.flush(store)?;

        let note = store
            .get(id)
            .cloned()
            .ok_or_else(|| JotError::NoteNotFound(id.to_string()))?;
        self.selected = Some(note.id);
        self.committed = note.fields.clone();
        self.draft = note.fields;
        self.last_error = None;
        self.status = SaveStatus::Saved;
        debug!(note = %id, "note selected");
        Ok(())
    }

    /// Switches to a blank form, flushing the current note first.
    pub fn new_note<B: StorageBackend>(&mut self, store: &mut NoteStore<B>) -> Result<()> {
        self.flush(store)?;
        self.reset_blank();
        Ok(())
    }

    /// Deletes the selected note without committing pending edits, then switches to a
    /// blank form. On a blank form this only discards the draft and returns `false`.
    pub fn delete_selected<B: StorageBackend>(
        &mut self,
        store: &mut NoteStore<B>,
    ) -> Result<bool> {
        let Some(id) = self.selected.clone() else {
            self.timer.cancel();
            self.reset_blank();
            return Ok(false);
        };

        store.remove(&id)?;
        self.timer.cancel();
        self.reset_blank();
        info!(note = %id, "note deleted");
        Ok(true)
    }

    /// Drops the selection if it points at `id`, e.g. after the note was removed
    /// outside the controller. Pending edits for it are discarded.
    pub fn forget(&mut self, id: &NoteId) {
        if self.selected.as_ref() == Some(id) {
            self.timer.cancel();
            self.reset_blank();
        }
    }

    /// Rebases the selected note on what the store holds now, after the store was
    /// written or reloaded outside the controller. Unsaved drafts are kept and will
    /// overwrite the stored fields on their commit; otherwise the draft follows the
    /// store. A selected note that is gone is forgotten.
    pub fn refresh<B: StorageBackend>(&mut self, store: &NoteStore<B>) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        let Some(note) = store.get(&id) else {
            self.forget(&id);
            return;
        };
        if note.fields == self.committed {
            return;
        }

        self.committed = note.fields.clone();
        if !self.status.is_unsaved() {
            self.draft = note.fields.clone();
            self.status = SaveStatus::Saved;
        }
        debug!(note = %id, "selection refreshed from store");
    }

    fn commit<B: StorageBackend>(
        &mut self,
        store: &mut NoteStore<B>,
        reason: CommitReason,
    ) -> Result<()> {
        let id = self.selected.clone().unwrap_or_else(NoteId::generate);
        let created = self.selected.is_none();
        let note = Note::with_id(id.clone(), self.draft.clone());

        match store.upsert(note) {
            Ok(_) => {
                if created {
                    info!(note = %id, "note created");
                }
                self.selected = Some(id);
                self.committed = self.draft.clone();
                self.last_error = None;
                self.last_saved_at = Some(Utc::now());
                self.status = SaveStatus::Saved;
                debug!(?reason, "commit done");
                Ok(())
            }
            Err(e) => {
                warn!(?reason, error = %e, "commit failed");
                self.last_error = Some(e.to_string());
                self.status = SaveStatus::Failed;
                Err(e)
            }
        }
    }

    fn reset_blank(&mut self) {
        self.selected = None;
        self.draft = NoteFields::default();
        self.committed = NoteFields::default();
        self.last_error = None;
        self.status = SaveStatus::Idle;
    }

    fn resting_status(&self) -> SaveStatus {
        if self.selected.is_some() {
            SaveStatus::Saved
        } else {
            SaveStatus::Idle
        }
    }
}
