//! # Jot Architecture
//!
//! Jot is a **UI-agnostic note-taking library**: a flat list of title/content notes,
//! persisted as one JSON blob under one storage key, with a debounced autosave
//! controller on top. The `jot` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the jot CLI, or any other UI)                      │
//! │  - Parses input, renders output, owns the event loop        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns one NoteStore and one AutosaveController            │
//! │  - Autosave boundary + one-shot commands                    │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Autosave (autosave/)         │ │  Commands (commands/)     │
//! │  - Debounce timer, status     │ │  - list/view/create/...   │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: the collection, single source of truth        │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process, never sleeps and never spawns threads. Time is read from a
//! [`autosave::Clock`]; the client decides when to wake up and `poll`.
//!
//! ## Testing Strategy
//!
//! - **Store and commands**: unit tests against [`store::mem_backend::MemBackend`],
//!   which can count writes and simulate write failures.
//! - **Autosave**: unit tests driven by [`autosave::ManualClock`], so debounce
//!   behavior is checked without real waiting.
//! - **Filesystem**: integration tests in `tests/` with `tempfile`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`autosave`]: Debounced autosave state machine
//! - [`commands`]: One-shot operations
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Note`, `NoteId`, `NoteCollection`)
//! - [`config`]: Configuration
//! - [`init`]: Data directory resolution and production wiring
//! - [`error`]: Error types

pub mod api;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
