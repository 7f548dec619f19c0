//! Capabilities the core needs from whatever is drawing the widget
//!
//! The DOM binding implements these on the web, the terminal shell natively.
//! All methods take `&self`: UI handles are shared, and the core never holds
//! on to one past a single handler call.

use crate::error::Result;
use crate::export::ExportFile;
use crate::note::Note;

/// Modal yes/no questions and notices
pub trait Prompt {
    /// Blocks until the user answers
    fn confirm(&self, message: &str) -> bool;
    /// User-visible, non-fatal notice
    fn notify(&self, message: &str);
}

/// List container the renderer rebuilds
pub trait RenderTarget {
    /// Remove everything currently shown
    fn reset(&self);
    fn show_placeholder(&self);
    fn append_note(&self, note: &Note);
}

/// Hands a finished document to the user
pub trait Downloader {
    fn download(&self, file: &ExportFile) -> Result<()>;
}

/// "Download before leaving?" dialog
pub trait ExitModal {
    fn set_exit_modal_visible(&self, visible: bool);
}

/// Everything the command handlers use
pub trait Ui: Prompt + RenderTarget + Downloader + ExitModal {}

impl<T: Prompt + RenderTarget + Downloader + ExitModal> Ui for T {}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::NotesError;

    /// What a render target currently shows
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum Shown {
        Placeholder,
        Note { text: String, timestamp: String },
    }

    /// UI double that records every call
    #[derive(Debug, Default)]
    pub(crate) struct RecordingUi {
        pub(crate) answer: bool,
        pub(crate) fail_downloads: bool,
        pub(crate) confirmations: RefCell<Vec<String>>,
        pub(crate) notices: RefCell<Vec<String>>,
        pub(crate) shown: RefCell<Vec<Shown>>,
        pub(crate) resets: Cell<usize>,
        pub(crate) downloads: RefCell<Vec<ExportFile>>,
        pub(crate) modal_visible: Cell<bool>,
    }

    impl RecordingUi {
        pub(crate) fn confirming() -> Self {
            Self {
                answer: true,
                ..Self::default()
            }
        }

        pub(crate) fn declining() -> Self {
            Self::default()
        }

        pub(crate) fn confirmations(&self) -> Vec<String> {
            self.confirmations.borrow().clone()
        }

        pub(crate) fn notices(&self) -> Vec<String> {
            self.notices.borrow().clone()
        }

        pub(crate) fn shown(&self) -> Vec<Shown> {
            self.shown.borrow().clone()
        }

        pub(crate) fn downloads(&self) -> Vec<ExportFile> {
            self.downloads.borrow().clone()
        }
    }

    impl Prompt for RecordingUi {
        fn confirm(&self, message: &str) -> bool {
            self.confirmations.borrow_mut().push(message.to_string());
            self.answer
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
    }

    impl RenderTarget for RecordingUi {
        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
            self.shown.borrow_mut().clear();
        }

        fn show_placeholder(&self) {
            self.shown.borrow_mut().push(Shown::Placeholder);
        }

        fn append_note(&self, note: &Note) {
            self.shown.borrow_mut().push(Shown::Note {
                text: note.text.clone(),
                timestamp: note.timestamp.clone(),
            });
        }
    }

    impl Downloader for RecordingUi {
        fn download(&self, file: &ExportFile) -> Result<()> {
            if self.fail_downloads {
                return Err(NotesError::Download {
                    filename: file.filename.clone(),
                    reason: "blocked".into(),
                });
            }
            self.downloads.borrow_mut().push(file.clone());
            Ok(())
        }
    }

    impl ExitModal for RecordingUi {
        fn set_exit_modal_visible(&self, visible: bool) {
            self.modal_visible.set(visible);
        }
    }
}
