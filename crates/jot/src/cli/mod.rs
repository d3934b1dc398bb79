//! # CLI Behavior
//!
//! This is **one possible UI client** for jot, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, threads
//! and output formatting.
//!
//! ## Naked Execution (`jot`)
//!
//! Running `jot` with no arguments defaults to `jot list`.
//!
//! ## One-shot Commands
//!
//! `list`, `view`, `create`, `update`, `delete` and `path` go through the
//! command layer and write immediately. There is no debounce involved.
//!
//! ## Session (`jot session`)
//!
//! A line-oriented editor over the autosave controller. Each `title`/`content`
//! line is an edit; the note is committed once edits stop for the configured
//! delay, or right away on `save`, `open`, `new` or `quit`.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Output formatting
//! - `session`: The interactive event loop
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
mod session;
pub mod setup;

pub use commands::run;
