use super::backend::StorageBackend;
use crate::error::{JotError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since jot is single-threaded.
/// This keeps `StorageBackend` on `&self` without reaching for locks.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    /// Writes still allowed before failures start.
    write_budget: Cell<Option<usize>>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw value, e.g. a corrupt or legacy payload.
    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::default();
        backend
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Lets the next `n` writes succeed and fails every write after them.
    pub fn fail_after_writes(&self, n: usize) {
        self.write_budget.set(Some(n));
    }

    pub fn clear_write_failures(&self) {
        self.simulate_write_error.set(false);
        self.write_budget.set(None);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(JotError::Store("Simulated write error".to_string()));
        }
        match self.write_budget.get() {
            Some(0) => return Err(JotError::Store("Simulated write error".to_string())),
            Some(n) => self.write_budget.set(Some(n - 1)),
            None => {}
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
