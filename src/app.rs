//! Command handlers
//!
//! `NotesApp` is the one value the front ends hold on to. Every handler takes
//! the UI context explicitly, mutates the store if it has to, and re-renders.
//! Failures are logged and shown to the user through `Prompt::notify`; nothing
//! propagates out of a handler.

use crate::consts::CORRUPT_NOTES_MESSAGE;
use crate::error::NotesError;
use crate::exit_guard::{ExitGuard, UnloadVerdict};
use crate::export;
use crate::platform::{Clock, KeyValueStorage, SystemClock};
use crate::render::render;
use crate::settings::Settings;
use crate::store::NoteStore;
use crate::ui::Ui;

/// What a key press in the note input means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Add the note and suppress the default newline
    Submit,
    Ignore,
}

pub struct NotesApp<S: KeyValueStorage, C: Clock = SystemClock> {
    store: NoteStore<S, C>,
    guard: ExitGuard,
    settings: Settings,
}

impl<S: KeyValueStorage, C: Clock> NotesApp<S, C> {
    /// Load settings and notes from `storage` and draw the initial list
    pub fn start(storage: S, clock: C, ui: &impl Ui) -> Self {
        let settings = Settings::load(&storage);
        Self::with_settings(storage, clock, settings, ui)
    }

    pub fn with_settings(storage: S, clock: C, settings: Settings, ui: &impl Ui) -> Self {
        let mut store = NoteStore::load(storage, settings.storage_key.clone(), clock);
        if store.take_load_warning().is_some() {
            ui.notify(CORRUPT_NOTES_MESSAGE);
        }
        render(store.notes(), ui);

        Self {
            store,
            guard: ExitGuard::new(settings.unload_policy),
            settings,
        }
    }

    pub fn key_action(key: &str, shift: bool) -> KeyAction {
        if key == "Enter" && !shift {
            KeyAction::Submit
        } else {
            KeyAction::Ignore
        }
    }

    /// Add a note from the input text
    ///
    /// Returns true when a note was added, i.e. when the input should be
    /// cleared.
    pub fn submit(&mut self, text: &str, ui: &impl Ui) -> bool {
        match self.store.add(text) {
            Ok(Some(_)) => {
                render(self.store.notes(), ui);
                true
            }
            Ok(None) => false,
            Err(e) => {
                ui.notify(&e.to_string());
                false
            }
        }
    }

    /// Download button. Returns true when a file was handed over.
    pub fn download(&self, ui: &impl Ui) -> bool {
        match export::export(self.store.notes(), &self.settings.export_filename, ui) {
            Ok(()) => true,
            // Already reported by the exporter
            Err(NotesError::NothingToExport) => false,
            Err(e) => {
                log::error!("{}", e);
                ui.notify(&e.to_string());
                false
            }
        }
    }

    /// Clear button. Returns true when the user confirmed and the notes went.
    pub fn clear(&mut self, ui: &impl Ui) -> bool {
        match self.store.clear(ui) {
            Ok(true) => {
                render(self.store.notes(), ui);
                true
            }
            Ok(false) => false,
            Err(e) => {
                ui.notify(&e.to_string());
                false
            }
        }
    }

    pub fn before_unload(&mut self, ui: &impl Ui) -> UnloadVerdict {
        let filename = &self.settings.export_filename;
        self.guard.on_unload(self.store.notes(), filename, ui)
    }

    pub fn modal_download(&mut self, ui: &impl Ui) {
        let filename = &self.settings.export_filename;
        match self.guard.download_and_dismiss(self.store.notes(), filename, ui) {
            Ok(()) | Err(NotesError::NothingToExport) => {}
            Err(e) => {
                log::error!("{}", e);
                ui.notify(&e.to_string());
            }
        }
    }

    pub fn modal_cancel(&mut self, ui: &impl Ui) {
        self.guard.dismiss(ui);
    }

    pub fn store(&self) -> &NoteStore<S, C> {
        &self.store
    }

    pub fn guard(&self) -> &ExitGuard {
        &self.guard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NOTES_STORAGE_KEY, NOTHING_TO_EXPORT_MESSAGE, SETTINGS_STORAGE_KEY};
    use crate::exit_guard::{GuardState, UnloadPolicy};
    use crate::platform::MemoryStorage;
    use crate::platform::clock::FixedClock;
    use crate::platform::storage::ReadOnlyStorage;
    use crate::ui::testing::{RecordingUi, Shown};

    fn app(ui: &RecordingUi) -> NotesApp<MemoryStorage, FixedClock> {
        NotesApp::start(MemoryStorage::new(), FixedClock("T1".into()), ui)
    }

    #[test]
    fn test_start_renders_placeholder() {
        let ui = RecordingUi::default();
        let app = app(&ui);
        assert!(app.store().is_empty());
        assert_eq!(ui.shown(), vec![Shown::Placeholder]);
    }

    #[test]
    fn test_start_with_saved_notes_renders_them() {
        let ui = RecordingUi::default();
        let storage =
            MemoryStorage::with_item(NOTES_STORAGE_KEY, r#"[{"text":"kept","timestamp":"T0"}]"#);
        NotesApp::start(storage, FixedClock("T1".into()), &ui);
        assert_eq!(
            ui.shown(),
            vec![Shown::Note {
                text: "kept".into(),
                timestamp: "T0".into(),
            }]
        );
    }

    #[test]
    fn test_start_with_corrupt_notes_warns() {
        let ui = RecordingUi::default();
        let storage = MemoryStorage::with_item(NOTES_STORAGE_KEY, "garbage");
        let app = NotesApp::start(storage, FixedClock("T1".into()), &ui);
        assert!(app.store().is_empty());
        assert_eq!(ui.notices(), vec![CORRUPT_NOTES_MESSAGE.to_string()]);
        assert_eq!(ui.shown(), vec![Shown::Placeholder]);
    }

    #[test]
    fn test_start_uses_configured_key() {
        let ui = RecordingUi::default();
        let mut storage = MemoryStorage::with_item(
            SETTINGS_STORAGE_KEY,
            r#"{"storage_key":"work","unload_policy":"confirm"}"#,
        );
        storage
            .set_item("work", r#"[{"text":"w","timestamp":"T0"}]"#)
            .unwrap();
        let app = NotesApp::start(storage, FixedClock("T1".into()), &ui);
        assert_eq!(app.store().key(), "work");
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.guard().policy(), UnloadPolicy::Confirm);
    }

    #[test]
    fn test_key_action() {
        type App = NotesApp<MemoryStorage, FixedClock>;
        assert_eq!(App::key_action("Enter", false), KeyAction::Submit);
        assert_eq!(App::key_action("Enter", true), KeyAction::Ignore);
        assert_eq!(App::key_action("a", false), KeyAction::Ignore);
    }

    #[test]
    fn test_submit_adds_and_renders() {
        let ui = RecordingUi::default();
        let mut app = app(&ui);

        assert!(!app.submit("   ", &ui));
        assert_eq!(ui.resets.get(), 1);

        assert!(app.submit(" hello ", &ui));
        assert_eq!(
            ui.shown(),
            vec![Shown::Note {
                text: "hello".into(),
                timestamp: "T1".into(),
            }]
        );
    }

    #[test]
    fn test_submit_write_failure_notifies() {
        let ui = RecordingUi::default();
        let mut app = NotesApp::start(ReadOnlyStorage::default(), FixedClock("T".into()), &ui);
        assert!(!app.submit("hello", &ui));
        assert!(app.store().is_empty());
        assert_eq!(ui.notices().len(), 1);
        assert!(ui.notices()[0].contains("chatNotes"));
    }

    #[test]
    fn test_download_empty_notifies_once() {
        let ui = RecordingUi::default();
        let app = app(&ui);
        assert!(!app.download(&ui));
        assert_eq!(ui.notices(), vec![NOTHING_TO_EXPORT_MESSAGE.to_string()]);
        assert!(ui.downloads().is_empty());
    }

    #[test]
    fn test_download_exports_all_notes() {
        let ui = RecordingUi::default();
        let mut app = app(&ui);
        app.submit("a", &ui);
        app.submit("b", &ui);
        assert!(app.download(&ui));
        assert_eq!(
            ui.downloads()[0].contents,
            "MY NOTES\n\n[T1]\na\n\n[T1]\nb\n\n"
        );
    }

    #[test]
    fn test_clear_confirmed_rerenders_placeholder() {
        let ui = RecordingUi::confirming();
        let mut app = app(&ui);
        app.submit("a", &ui);

        assert!(app.clear(&ui));
        assert!(app.store().is_empty());
        assert_eq!(ui.shown(), vec![Shown::Placeholder]);
        assert_eq!(
            app.store().storage().get_item(NOTES_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_clear_declined_keeps_list() {
        let ui = RecordingUi::declining();
        let mut app = app(&ui);
        app.submit("a", &ui);
        let resets = ui.resets.get();

        assert!(!app.clear(&ui));
        assert_eq!(app.store().len(), 1);
        assert_eq!(ui.resets.get(), resets);
    }

    #[test]
    fn test_unload_flow() {
        let ui = RecordingUi::default();
        let mut app = app(&ui);
        assert_eq!(app.before_unload(&ui), UnloadVerdict::Allow);

        app.submit("a", &ui);
        assert!(matches!(app.before_unload(&ui), UnloadVerdict::Prevent { .. }));
        assert_eq!(app.guard().state(), GuardState::Confirming);
        assert_eq!(ui.downloads().len(), 1);

        app.modal_cancel(&ui);
        assert_eq!(app.guard().state(), GuardState::Idle);
        assert!(!ui.modal_visible.get());

        app.before_unload(&ui);
        app.modal_download(&ui);
        assert_eq!(app.guard().state(), GuardState::Idle);
        assert_eq!(ui.downloads().len(), 3);
    }
}
