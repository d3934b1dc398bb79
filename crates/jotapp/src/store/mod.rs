//! # Storage Layer
//!
//! Jot keeps every note in one collection, persisted under a single key of a
//! key-value backend. There is no per-note file and no partial update: every
//! mutation re-serializes the full collection and writes it in one go.
//!
//! ## Two Layers
//!
//! 1. [`backend::StorageBackend`]: raw key-value I/O. Knows nothing about notes.
//! 2. [`note_store::NoteStore`]: the single source of truth. Holds the in-memory
//!    [`NoteCollection`](crate::model::NoteCollection), enforces id uniqueness and
//!    ordering, and decides when to write.
//!
//! ## Failure Model
//!
//! - **Reads are forgiving**: a missing key, an unreadable file or malformed JSON all
//!   load as an empty collection (with a warning in the log).
//! - **Writes are atomic**: backends must replace the value in one step, so a crash
//!   mid-write loses at most that write. `NoteStore` swaps its in-memory state only
//!   after the write succeeded.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one `<key>.json` file per key.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── notes.json   # The whole collection (JSON array)
//! └── jot.toml     # Optional configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::{NoteStore, DEFAULT_STORAGE_KEY};
