//! Local Notes - a tiny local-first note-taking widget
//!
//! Core modules:
//! - `note`: The note record
//! - `store`: Write-through note store over a key/value slot
//! - `persistence`: JSON codec for the persisted note list
//! - `render`: Full-rebuild projection of the store onto a list view
//! - `export`: Plain-text export document and download
//! - `exit_guard`: Unload-signal handling
//! - `app`: Command handlers tying it all together
//! - `platform`: Browser/native storage, clock and UI bindings
//! - `settings`: Persisted preferences

pub mod app;
pub mod error;
pub mod exit_guard;
pub mod export;
pub mod note;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod store;
pub mod ui;

pub use app::{KeyAction, NotesApp};
pub use error::{NotesError, Result};
pub use exit_guard::{ExitGuard, GuardState, UnloadPolicy, UnloadVerdict};
pub use note::Note;
pub use settings::Settings;
pub use store::NoteStore;

/// Fixed names and user-facing strings
pub mod consts {
    /// Default storage key for the note list
    pub const NOTES_STORAGE_KEY: &str = "chatNotes";
    /// Storage key for settings
    pub const SETTINGS_STORAGE_KEY: &str = "local_notes_settings";

    /// Export file defaults
    pub const EXPORT_FILENAME: &str = "my_notes.txt";
    pub const EXPORT_MIME: &str = "text/plain";
    pub const EXPORT_HEADER: &str = "MY NOTES";

    /// Shown in place of an empty list
    pub const EMPTY_MESSAGE: &str = "No notes yet. Add one above.";

    /// Prompts and notices
    pub const CLEAR_CONFIRM_MESSAGE: &str = "Are you sure you want to clear all notes?";
    pub const NOTHING_TO_EXPORT_MESSAGE: &str = "No notes to download.";
    pub const UNLOAD_MESSAGE: &str =
        "You have unsaved notes. Would you like to download them before leaving?";
    pub const CORRUPT_NOTES_MESSAGE: &str =
        "Saved notes could not be read and were skipped. Adding a note will overwrite them.";
}
