//! # Configuration
//!
//! Jot configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `JOT__AUTOSAVE_DELAY_MS`, `JOT__SAVE_DELAY_MS`, etc.
//! 2. **Data-dir Config**: `<data dir>/jot.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage_key` | `notes` | Key (file stem) the collection is stored under |
//! | `autosave_delay_ms` | `500` | Quiet period after the last edit before autosave |
//! | `save_delay_ms` | `250` | Delay before an explicit save commits; `0` saves at once |

use crate::autosave::AutosaveConfig;
use crate::store::DEFAULT_STORAGE_KEY;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Configuration for jot, stored in `jot.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JotConfig {
    /// Key the note collection is stored under (`<key>.json` in the data dir)
    #[config(default = "notes")]
    pub storage_key: String,

    /// Milliseconds of quiet after the last edit before it is saved
    #[config(default = 500)]
    pub autosave_delay_ms: u64,

    /// Milliseconds an explicit save waits before committing, so "Saving…" shows
    #[config(default = 250)]
    pub save_delay_ms: u64,
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            storage_key: "notes".to_string(),
            autosave_delay_ms: 500,
            save_delay_ms: 250,
        }
    }
}

impl JotConfig {
    /// Timer settings for the autosave controller.
    pub fn autosave(&self) -> AutosaveConfig {
        AutosaveConfig {
            autosave_delay: Duration::from_millis(self.autosave_delay_ms),
            save_delay: Duration::from_millis(self.save_delay_ms),
        }
    }

    /// Storage key, falling back to the default when blank or when it would
    /// leave the data directory.
    pub fn storage_key(&self) -> &str {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return DEFAULT_STORAGE_KEY;
        }
        if key.contains(['/', '\\']) || key == ".." {
            warn!(key, "storage key may not contain path separators, using default");
            return DEFAULT_STORAGE_KEY;
        }
        key
    }
}
