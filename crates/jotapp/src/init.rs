//! # Initialization
//!
//! Resolves where notes live, loads configuration, and wires the production
//! store and autosave controller into a [`JotApi`].
//!
//! ## Data Directory
//!
//! Chosen in priority order:
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `JOT_DATA` environment variable (primarily for testing).
//! 3. The OS data directory (via the `directories` crate), e.g.
//!    `~/.local/share/jot` on Linux.
//! 4. `./.jot` if the OS gives us no home.

use crate::api::JotApi;
use crate::autosave::{AutosaveController, SystemClock};
use crate::config::JotConfig;
use crate::store::fs_backend::FsBackend;
use crate::store::NoteStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_ENV_VAR: &str = "JOT_DATA";
pub const CONFIG_FILE_NAME: &str = "jot.toml";

pub struct JotContext {
    pub api: JotApi<FsBackend, SystemClock>,
    pub config: JotConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> PathBuf {
    if let Some(path) = data_override {
        return path;
    }
    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|v| !v.is_empty()) {
        return PathBuf::from(path);
    }
    match ProjectDirs::from("com", "jot", "jot") {
        Some(dirs) => dirs.data_dir().to_path_buf(),
        None => PathBuf::from(".jot"),
    }
}

/// Loads `jot.toml` from `data_dir` layered over defaults and `JOT__*` env vars.
/// Any load error falls back to defaults.
pub fn load_config(data_dir: &Path) -> JotConfig {
    let loaded: Result<JotConfig, _> = Clapfig::builder()
        .app_name("jot")
        .file_name(CONFIG_FILE_NAME)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load();

    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not load configuration, using defaults");
            JotConfig::default()
        }
    }
}

/// Initialize the jot context: data dir, config, store and autosave controller.
///
/// ```ignore
/// let ctx = initialize(None);
/// let ctx = initialize(Some(PathBuf::from("/tmp/notes")));
/// ```
pub fn initialize(data_override: Option<PathBuf>) -> JotContext {
    let data_dir = resolve_data_dir(data_override);
    let config = load_config(&data_dir);
    debug!(data_dir = %data_dir.display(), ?config, "initializing");

    let store = NoteStore::open(FsBackend::new(data_dir.clone()), config.storage_key());
    let autosave = AutosaveController::new(config.autosave(), SystemClock);
    let api = JotApi::new(store, autosave);

    JotContext {
        api,
        config,
        data_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_override_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            resolve_data_dir(Some(dir.path().to_path_buf())),
            dir.path().to_path_buf()
        );
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.storage_key(), "notes");
    }

    #[test]
    fn initialize_reads_existing_notes() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("notes.json"),
            r#"[{"id": 7, "title": "From before", "content": ""}]"#,
        )
        .unwrap();

        let ctx = initialize(Some(dir.path().to_path_buf()));
        assert_eq!(ctx.data_dir, dir.path().to_path_buf());
        assert_eq!(ctx.api.notes().len(), 1);
        assert!(ctx.api.exists(&"7".into()));
    }
}
