use crate::commands::helpers::{resolve_selectors, NoteSelector};
use crate::commands::{display_title, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selectors: &[NoteSelector],
) -> Result<CmdResult> {
    // Resolve everything up front: indexes shift as notes are removed.
    let resolved = resolve_selectors(store.notes(), selectors)?;
    let mut result = CmdResult::default();

    for display_note in resolved {
        store.remove(&display_note.note.id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            display_note.index,
            display_title(&display_note.note)
        )));
        result.affected_notes.push(display_note.note);
    }

    Ok(result)
}
