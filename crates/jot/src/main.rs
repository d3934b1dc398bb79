//! # Jot CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/jot/src/cli/)                            │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Interactive editing session (session.rs)                 │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  jotapp (crates/jotapp)                                     │
//! │  - JotApi facade, autosave, commands, storage               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in `jotapp` is UI agnostic. The CLI is responsible for **all**
//! user-facing concerns: argument parsing, logging setup, the session event loop,
//! error reporting and rendering.

mod cli;
mod logging;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
