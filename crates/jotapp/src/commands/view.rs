use crate::commands::helpers::{resolve_selectors, NoteSelector};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &NoteStore<B>,
    selectors: &[NoteSelector],
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store.notes(), selectors)?;
    Ok(CmdResult::default().with_listed_notes(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::error::JotError;
    use crate::model::NoteFields;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn views_selected_notes() {
        let mut store = NoteStore::with_backend(MemBackend::new());
        create::run(&mut store, NoteFields::new("A", "alpha")).unwrap();
        create::run(&mut store, NoteFields::new("B", "beta")).unwrap();

        let result = run(&store, &[NoteSelector::Index(2)]).unwrap();
        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.content(), "alpha");
    }

    #[test]
    fn missing_note_is_an_error() {
        let store = NoteStore::with_backend(MemBackend::new());
        let err = run(&store, &[NoteSelector::Index(1)]).unwrap_err();
        assert!(matches!(err, JotError::NoteNotFound(_)));
    }
}
