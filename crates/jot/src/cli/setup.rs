use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jot",
    bin_name = "jot",
    version,
    disable_help_subcommand = true,
    after_help = "Run `jot session` to edit notes with autosave."
)]
#[command(about = "Terminal note pad with debounced autosave", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $JOT_DATA, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Print notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// View one or more notes
    #[command(alias = "v")]
    View {
        /// Notes to show: display index (1, 2, ...), id, id prefix or id:<id>
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Create a note
    #[command(alias = "n")]
    Create {
        /// Title of the note
        title: Option<String>,

        /// Content of the note
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Change a note's title and/or content
    #[command(alias = "e")]
    Update {
        /// Note to change
        selector: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Notes to delete
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Print the path of the notes file
    Path,

    /// Interactive editing session with autosave
    #[command(alias = "s")]
    Session,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
