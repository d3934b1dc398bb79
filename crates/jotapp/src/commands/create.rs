use crate::commands::{display_title, CmdMessage, CmdResult, DisplayNote};
use crate::error::Result;
use crate::model::{Note, NoteFields, NoteId};
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut NoteStore<B>, fields: NoteFields) -> Result<CmdResult> {
    let note = Note::with_id(NoteId::generate(), fields);
    store.upsert(note.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created: {}",
        display_title(&note)
    )));
    // New notes go to the front, so they are always #1
    result.listed_notes.push(DisplayNote {
        index: 1,
        note: note.clone(),
    });
    result.affected_notes.push(note);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn creates_note_at_front() {
        let mut store = NoteStore::with_backend(MemBackend::new());
        run(&mut store, NoteFields::new("First", "")).unwrap();
        let result = run(&mut store, NoteFields::new("Second", "body")).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(result.listed_notes[0].index, 1);
        let first = store.notes().iter().next().unwrap();
        assert_eq!(first.title(), "Second");
        assert_eq!(first.content(), "body");
    }

    #[test]
    fn untitled_note_message() {
        let mut store = NoteStore::with_backend(MemBackend::new());
        let result = run(&mut store, NoteFields::default()).unwrap();
        assert_eq!(result.messages[0].content, "Note created: (untitled)");
    }
}
