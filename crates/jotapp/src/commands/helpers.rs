use crate::commands::DisplayNote;
use crate::error::{JotError, Result};
use crate::model::{Note, NoteCollection};
use std::fmt;
use std::str::FromStr;

/// How the user points at a note on the command line.
///
/// - `3` → the third note in the listing
/// - `id:481516` → the note whose id is exactly, or starts with, `481516`
/// - anything else → an id or id prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(usize),
    Id(String),
}

impl FromStr for NoteSelector {
    type Err = JotError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(id) = s.strip_prefix("id:") {
            if id.is_empty() {
                return Err(JotError::Api("Empty id selector".to_string()));
            }
            return Ok(NoteSelector::Id(id.to_string()));
        }
        if s.is_empty() {
            return Err(JotError::Api("Empty note selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(JotError::Api("Note indexes start at 1".to_string())),
            Ok(n) => Ok(NoteSelector::Index(n)),
            Err(_) => Ok(NoteSelector::Id(s.to_string())),
        }
    }
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(n) => write!(f, "{}", n),
            NoteSelector::Id(id) => write!(f, "id:{}", id),
        }
    }
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<NoteSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}

/// Indexes every note in display order.
pub fn indexed_notes(notes: &NoteCollection) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(i, note)| DisplayNote {
            index: i + 1,
            note: note.clone(),
        })
        .collect()
}

pub fn resolve_selector(notes: &NoteCollection, selector: &NoteSelector) -> Result<DisplayNote> {
    let (position, note) = match selector {
        NoteSelector::Index(n) => notes
            .as_slice()
            .get(n - 1)
            .map(|note| (n - 1, note))
            .ok_or_else(|| JotError::NoteNotFound(format!("#{}", n)))?,
        NoteSelector::Id(id) => find_by_id(notes.as_slice(), id)?,
    };
    Ok(DisplayNote {
        index: position + 1,
        note: note.clone(),
    })
}

/// Resolves each selector, skipping repeats of a note already resolved.
pub fn resolve_selectors(
    notes: &NoteCollection,
    selectors: &[NoteSelector],
) -> Result<Vec<DisplayNote>> {
    let mut resolved: Vec<DisplayNote> = Vec::new();
    for selector in selectors {
        let found = resolve_selector(notes, selector)?;
        if !resolved.iter().any(|d| d.note.id == found.note.id) {
            resolved.push(found);
        }
    }
    Ok(resolved)
}

fn find_by_id<'a>(notes: &'a [Note], id: &str) -> Result<(usize, &'a Note)> {
    if let Some(exact) = notes.iter().enumerate().find(|(_, n)| n.id.as_str() == id) {
        return Ok(exact);
    }

    let mut matches = notes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.id.as_str().starts_with(id));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(JotError::Api(format!(
            "Id prefix '{}' matches more than one note",
            id
        ))),
        (None, _) => Err(JotError::NoteNotFound(id.to_string())),
    }
}
