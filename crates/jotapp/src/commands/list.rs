use crate::commands::helpers::indexed_notes;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{NoteStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &NoteStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(indexed_notes(store.notes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::NoteFields;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn lists_newest_first_with_indexes() {
        let mut store = NoteStore::with_backend(MemBackend::new());
        create::run(&mut store, NoteFields::new("A", "")).unwrap();
        create::run(&mut store, NoteFields::new("B", "")).unwrap();

        let result = run(&store).unwrap();
        let listed: Vec<_> = result
            .listed_notes
            .iter()
            .map(|d| (d.index, d.note.title()))
            .collect();
        assert_eq!(listed, vec![(1, "B"), (2, "A")]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = NoteStore::with_backend(MemBackend::new());
        assert!(run(&store).unwrap().listed_notes.is_empty());
    }
}
