//! # Command Layer
//!
//! One-shot operations on the note collection. Each command lives in its own
//! submodule and is a plain function over a [`NoteStore`](crate::store::NoteStore).
//!
//! Commands are what the CLI calls for `jot list`, `jot create`, and friends. The
//! interactive editing path (debounced autosave) goes through
//! [`autosave`](crate::autosave) instead; both end up in the same `NoteStore`.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings:
//! - `affected_notes`: notes that were created, changed or removed
//! - `listed_notes`: notes to display, each with its display index
//! - `messages`: structured messages with levels (success, warning)
//!
//! ## Command Modules
//!
//! - [`create`]: Create a note
//! - [`list`]: List all notes
//! - [`view`]: Retrieve selected notes
//! - [`update`]: Change title and/or content
//! - [`delete`]: Remove notes
//! - [`helpers`]: Selector parsing and resolution

use crate::model::Note;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod update;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A note paired with its 1-based position in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNote {
    pub index: usize,
    #[serde(flatten)]
    pub note: Note,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }
}

/// Field changes for `update`. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl NoteUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Title for messages; empty titles read as "(untitled)".
pub(crate) fn display_title(note: &Note) -> &str {
    if note.title().is_empty() {
        "(untitled)"
    } else {
        note.title()
    }
}
