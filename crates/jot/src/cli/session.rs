//! Interactive editing session.
//!
//! Stdin is read on a helper thread and forwarded line by line over a channel.
//! The main loop waits for the next line, but never past the autosave deadline:
//! when the wait times out it polls the controller, which commits the draft.
//! All store access stays on the main thread.

use super::render::{render_full_notes, render_list, render_status};
use anyhow::Result;
use console::style;
use jotapp::api::JotApi;
use jotapp::autosave::{Clock, SaveStatus, SystemClock};
use jotapp::store::StorageBackend;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  list                 List notes
  new                  Start a blank note
  open <note>          Edit a note (index, id or id prefix)
  title <text>         Set the title
  content <text>       Replace the content
  append <text>        Add a line to the content
  save                 Save now
  flush                Commit pending edits immediately
  cancel               Discard pending edits
  delete               Delete the note being edited
  status               Show the save status
  show                 Show the note being edited
  quit                 Save pending edits and leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run<B: StorageBackend>(api: &mut JotApi<B, SystemClock>) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut stdout = io::stdout();
    if interactive {
        writeln!(stdout, "{}", style("jot session. Type `help` for commands.").dim())?;
    }

    loop {
        if interactive {
            write!(stdout, "{} > ", status_line(api))?;
            stdout.flush()?;
        }

        let received = match api.autosave().next_deadline() {
            Some(deadline) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(line) => match handle_line(api, &line, &mut stdout) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => eprintln!("{}", style(format!("Error: {}", e)).red()),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                debug!("stdin closed");
                break;
            }
        }

        poll_and_report(api);
    }

    finish(api, &mut stdout)
}

/// Applies one session command. Errors are reported by the caller, the session goes on.
pub fn handle_line<B: StorageBackend, C: Clock>(
    api: &mut JotApi<B, C>,
    line: &str,
    out: &mut impl Write,
) -> Result<Flow> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, arg) = match line.trim_start().split_once(' ') {
        Some((command, arg)) => (command, arg),
        None => (line.trim(), ""),
    };

    match command {
        "" => {}
        "help" | "?" => write!(out, "{}", HELP)?,
        "list" | "ls" => {
            let result = api.list_notes()?;
            write!(out, "{}", render_list(&result.listed_notes))?;
        }
        "new" => {
            api.new_note()?;
            writeln!(out, "{}", SaveStatus::Idle)?;
        }
        "open" => {
            let opened = api.open(arg.trim())?;
            write!(out, "{}", render_full_notes(std::slice::from_ref(&opened)))?;
        }
        "title" => api.edit_title(arg),
        "content" => api.edit_content(arg),
        "append" => {
            let current = &api.autosave().fields().content;
            let content = if current.is_empty() {
                arg.to_string()
            } else {
                format!("{}\n{}", current, arg)
            };
            api.edit_content(content);
        }
        "save" => {
            api.save()?;
            writeln!(out, "{}", status_line(api))?;
        }
        "flush" => {
            api.flush()?;
            writeln!(out, "{}", status_line(api))?;
        }
        "cancel" => {
            api.cancel();
            writeln!(out, "Changes discarded")?;
        }
        "delete" => {
            if api.delete_selected()? {
                writeln!(out, "Note deleted")?;
            } else {
                writeln!(out, "Draft discarded")?;
            }
        }
        "status" => writeln!(out, "{}", status_line(api))?,
        "show" => {
            let fields = api.autosave().fields();
            let title = if fields.title.is_empty() {
                "(untitled)"
            } else {
                fields.title.as_str()
            };
            writeln!(out, "{}", style(title).bold())?;
            if !fields.content.is_empty() {
                writeln!(out, "{}", fields.content)?;
            }
        }
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        other => writeln!(out, "Unknown command: {} (try `help`)", other)?,
    }
    Ok(Flow::Continue)
}

/// A failed autosave is reported and kept; the next flush retries it.
fn poll_and_report<B: StorageBackend, C: Clock>(api: &mut JotApi<B, C>) {
    match api.poll() {
        Ok(true) => debug!("autosaved"),
        Ok(false) => {}
        Err(e) => {
            warn!(error = %e, "autosave failed");
            eprintln!("{}", style(status_line(api)).red());
        }
    }
}

/// Commits whatever is pending before the session ends.
fn finish<B: StorageBackend, C: Clock>(
    api: &mut JotApi<B, C>,
    out: &mut impl Write,
) -> Result<()> {
    if api.flush()? {
        writeln!(out, "{}", status_line(api))?;
    }
    Ok(())
}

fn status_line<B: StorageBackend, C: Clock>(api: &JotApi<B, C>) -> String {
    let autosave = api.autosave();
    render_status(
        autosave.status(),
        autosave.last_saved_at(),
        autosave.last_error(),
    )
}
