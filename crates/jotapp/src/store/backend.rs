use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (the collection and its invariants).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Get the "file path" for a key.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self, key: &str) -> PathBuf;
}
