//! Terminal rendering. Everything here returns strings; printing happens in the
//! callers so the output can be tested.

use chrono::{DateTime, Utc};
use console::style;
use jotapp::autosave::SaveStatus;
use jotapp::commands::{CmdMessage, DisplayNote, MessageLevel};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const ID_WIDTH: usize = 8;
const UNTITLED: &str = "(untitled)";

pub fn render_list(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return "No notes yet. Create one with `jot create <title>` or `jot session`.\n"
            .to_string();
    }

    let mut out = String::new();
    for dn in notes {
        let idx_str = format!("{:>3}. ", dn.index);
        let id_str = format!("  {:<width$}", dn.note.id.short(), width = ID_WIDTH);
        let available = LINE_WIDTH.saturating_sub(idx_str.width() + id_str.width());

        let title = if dn.note.title().is_empty() {
            UNTITLED
        } else {
            dn.note.title()
        };
        let preview: String = dn
            .note
            .content()
            .chars()
            .take(60)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let line = if preview.is_empty() {
            title.to_string()
        } else {
            format!("{} {}", title, preview)
        };

        let shown = truncate_to_width(&line, available);
        let padding = available.saturating_sub(shown.width());
        let (shown_title, shown_rest) = split_at_width(&shown, title.width());

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            style(idx_str).yellow(),
            style(shown_title).bold(),
            style(shown_rest).dim(),
            " ".repeat(padding),
            style(id_str).dim()
        ));
    }
    out
}

pub fn render_full_notes(notes: &[DisplayNote]) -> String {
    let mut out = String::new();
    for (i, dn) in notes.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        let title = if dn.note.title().is_empty() {
            UNTITLED
        } else {
            dn.note.title()
        };
        out.push_str(&format!(
            "{} {}\n",
            style(format!("{}.", dn.index)).yellow(),
            style(title).bold()
        ));
        out.push_str("--------------------------------\n");
        out.push_str(dn.note.content());
        if !dn.note.content().ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Success => style(&message.content).green(),
            MessageLevel::Warning => style(&message.content).yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// One-line save indicator for the session.
pub fn render_status(
    status: SaveStatus,
    last_saved_at: Option<DateTime<Utc>>,
    last_error: Option<&str>,
) -> String {
    match (status, last_error) {
        (SaveStatus::Failed, Some(err)) => format!("{}: {}", style(status).red(), err),
        (SaveStatus::Failed, None) => style(status).red().to_string(),
        (SaveStatus::Pending, _) => style(status).yellow().to_string(),
        (SaveStatus::Saved, _) => match last_saved_at {
            Some(at) => format!(
                "{} {}",
                style(status).green(),
                style(format_time_ago(at)).dim()
            ),
            None => style(status).green().to_string(),
        },
        (SaveStatus::Idle, _) => style(status).dim().to_string(),
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// Splits `s` so the first part is at most `width` columns wide.
fn split_at_width(s: &str, width: usize) -> (&str, &str) {
    let mut current = 0;
    for (i, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if current + w > width {
            return s.split_at(i);
        }
        current += w;
    }
    (s, "")
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jotapp::model::{Note, NoteFields};

    fn display(index: usize, id: &str, title: &str, content: &str) -> DisplayNote {
        DisplayNote {
            index,
            note: Note::with_id(id.into(), NoteFields::new(title, content)),
        }
    }

    fn plain() {
        console::set_colors_enabled(false);
    }

    #[test]
    fn test_render_list_empty() {
        plain();
        assert!(render_list(&[]).starts_with("No notes yet."));
    }

    #[test]
    fn test_render_list_lines() {
        plain();
        let out = render_list(&[
            display(1, "0123456789", "Groceries", "eggs\nmilk"),
            display(2, "42", "", ""),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. Groceries eggs milk"));
        assert!(lines[0].trim_end().ends_with("01234567"));
        assert!(lines[1].contains("(untitled)"));
        assert_eq!(lines[0].width(), LINE_WIDTH);
    }

    #[test]
    fn test_render_full_notes_separator() {
        plain();
        let out = render_full_notes(&[display(1, "a", "A", "alpha"), display(2, "b", "B", "")]);
        assert!(out.starts_with("1. A\n"));
        assert!(out.contains("alpha\n"));
        assert!(out.contains("================================"));
        assert!(out.contains("2. B\n"));
    }

    #[test]
    fn test_render_messages() {
        plain();
        let out = render_messages(&[CmdMessage::success("Note created: A")]);
        assert_eq!(out, "Note created: A\n");
    }

    #[test]
    fn test_render_status() {
        plain();
        assert_eq!(render_status(SaveStatus::Pending, None, None), "Saving…");
        assert_eq!(
            render_status(SaveStatus::Failed, None, Some("disk full")),
            "Save failed: disk full"
        );
        assert!(render_status(SaveStatus::Saved, Some(Utc::now()), None).starts_with("Saved "));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_split_at_width() {
        assert_eq!(split_at_width("Title rest", 5), ("Title", " rest"));
        assert_eq!(split_at_width("Tit…", 5), ("Tit…", ""));
    }
}
