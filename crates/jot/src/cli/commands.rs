use super::render::{render_full_notes, render_list, render_messages};
use super::session;
use super::setup::{parse_cli, Commands};
use crate::logging::{init_logging, Verbosity};
use anyhow::Result;
use jotapp::api::JotApi;
use jotapp::autosave::Clock;
use jotapp::commands::{CmdResult, NoteUpdate};
use jotapp::init::initialize;
use jotapp::model::NoteFields;
use jotapp::store::StorageBackend;
use tracing::debug;

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_logging(Verbosity::from_occurrences(cli.verbose));

    let ctx = initialize(cli.data);
    debug!(data_dir = %ctx.data_dir.display(), config = ?ctx.config, "context ready");
    let mut api = ctx.api;

    match cli.command {
        None => handle_list(&api, false),
        Some(Commands::List { json }) => handle_list(&api, json),
        Some(Commands::View { selectors }) => handle_view(&api, &selectors),
        Some(Commands::Create { title, content }) => handle_create(&mut api, title, content),
        Some(Commands::Update {
            selector,
            title,
            content,
        }) => handle_update(&mut api, &selector, title, content),
        Some(Commands::Delete { selectors }) => handle_delete(&mut api, &selectors),
        Some(Commands::Path) => handle_path(&api),
        Some(Commands::Session) => session::run(&mut api),
    }
}

fn handle_list<B: StorageBackend, C: Clock>(api: &JotApi<B, C>, json: bool) -> Result<()> {
    let result = api.list_notes()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_notes)?);
        return Ok(());
    }
    print!("{}", render_list(&result.listed_notes));
    print_messages(&result);
    Ok(())
}

fn handle_view<B: StorageBackend, C: Clock>(
    api: &JotApi<B, C>,
    selectors: &[String],
) -> Result<()> {
    let result = api.view_notes(selectors)?;
    print!("{}", render_full_notes(&result.listed_notes));
    print_messages(&result);
    Ok(())
}

fn handle_create<B: StorageBackend, C: Clock>(
    api: &mut JotApi<B, C>,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let fields = NoteFields::new(title.unwrap_or_default(), content.unwrap_or_default());
    let result = api.create_note(fields)?;
    print_messages(&result);
    Ok(())
}

fn handle_update<B: StorageBackend, C: Clock>(
    api: &mut JotApi<B, C>,
    selector: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let result = api.update_note(selector, NoteUpdate { title, content })?;
    print_messages(&result);
    Ok(())
}

fn handle_delete<B: StorageBackend, C: Clock>(
    api: &mut JotApi<B, C>,
    selectors: &[String],
) -> Result<()> {
    let result = api.delete_notes(selectors)?;
    print_messages(&result);
    Ok(())
}

fn handle_path<B: StorageBackend, C: Clock>(api: &JotApi<B, C>) -> Result<()> {
    println!("{}", api.note_path().display());
    Ok(())
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}
