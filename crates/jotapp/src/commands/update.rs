use crate::commands::helpers::{resolve_selector, NoteSelector};
use crate::commands::{display_title, CmdMessage, CmdResult, NoteUpdate};
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selector: &NoteSelector,
    update: NoteUpdate,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut target = resolve_selector(store.notes(), selector)?;

    if update.is_empty() {
        result.add_message(CmdMessage::warning("Nothing to update"));
        return Ok(result);
    }

    if let Some(title) = update.title {
        target.note.fields.title = title;
    }
    if let Some(content) = update.content {
        target.note.fields.content = content;
    }
    store.upsert(target.note.clone())?;

    result.add_message(CmdMessage::success(format!(
        "Note updated ({}): {}",
        target.index,
        display_title(&target.note)
    )));
    result.affected_notes.push(target.note);
    Ok(result)
}
