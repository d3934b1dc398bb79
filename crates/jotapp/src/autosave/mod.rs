//! # Autosave
//!
//! Turns bursts of edits into a few commits, and keeps a status the UI can show.
//!
//! ## States
//!
//! ```text
//!            edit / save                 deadline passed (poll) or flush
//!   Idle ─────────────────▶ Pending ───────────────────────────────────▶ Saved
//!    ▲                        ▲  │                                         │
//!    │ new_note / delete      │  └──── write error ───▶ Failed             │
//!    │                        └────────────── edit / save ◀────────────────┘
//! ```
//!
//! - **Idle**: blank form. Typing or saving creates a note on the first commit.
//! - **Pending**: a commit is scheduled. Every edit re-arms the single timer, so a
//!   burst of edits yields one commit carrying the last values.
//! - **Saved**: the draft matches what was last written.
//! - **Failed**: the last write failed. The draft is kept, and the next edit, save
//!   or flush tries again. The UI never sees `Saved` for a write that did not land.
//!
//! ## Timers Without Threads
//!
//! The controller never sleeps and never spawns. The [`DebounceTimer`] is a deadline;
//! the client calls [`AutosaveController::poll`] whenever it wakes up (the CLI session
//! waits on [`AutosaveController::next_deadline`]). Time comes from a [`Clock`], so
//! tests drive it with [`ManualClock`].
//!
//! ## Switching Context
//!
//! `select` and `new_note` flush the pending commit before switching. If that flush
//! fails, the switch is refused so unsaved text is not dropped. `delete_selected`
//! cancels instead: a late commit must not bring the deleted note back.
//!
//! The controller does not own the store. Operations that write take
//! `&mut NoteStore` from the caller (normally [`crate::api::JotApi`]).

pub mod clock;
pub mod controller;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{AutosaveConfig, AutosaveController, SaveStatus};
pub use timer::{CommitReason, DebounceTimer, PendingCommit};
