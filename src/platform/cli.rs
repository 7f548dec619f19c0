//! Command-line shell for native builds

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::NotesApp;
use crate::platform::native::TerminalUi;
use crate::platform::{Clock, KeyValueStorage};
use crate::ui::Prompt;

pub const DEFAULT_DIR: &str = ".local-notes";

#[derive(Debug, Parser)]
#[command(
    name = "local-notes",
    version,
    about = "Keep short text notes in a local directory"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DIR,
        help = "Directory holding the notes and exports"
    )]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    #[command(about = "Add a note (words are joined with spaces)")]
    Add {
        #[arg(required = true, num_args = 1.., help = "Note text")]
        text: Vec<String>,
    },

    #[command(about = "Show all notes")]
    List,

    #[command(about = "Write every note to the export file")]
    Export,

    #[command(about = "Delete every note after confirmation")]
    Clear,
}

/// Run one command against `app`; false means the process should fail
pub fn execute<S, C>(command: &Command, app: &mut NotesApp<S, C>, ui: &TerminalUi) -> bool
where
    S: KeyValueStorage,
    C: Clock,
{
    match command {
        Command::Add { text } => {
            let text = text.join(" ");
            if text.trim().is_empty() {
                ui.notify("Nothing to add: note text is empty");
                return false;
            }
            let added = app.submit(&text, ui);
            ui.print_list();
            added
        }
        Command::List => {
            ui.print_list();
            true
        }
        Command::Export => app.download(ui),
        Command::Clear => {
            app.clear(ui);
            ui.print_list();
            true
        }
    }
}
