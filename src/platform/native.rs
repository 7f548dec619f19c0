//! Terminal front end for native builds

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::consts::EMPTY_MESSAGE;
use crate::error::{NotesError, Result};
use crate::export::ExportFile;
use crate::note::Note;
use crate::ui::{Downloader, ExitModal, Prompt, RenderTarget};

/// Asks on stdin, saves exports into `export_dir`
///
/// Rendering goes to a buffer so a command that renders more than once prints
/// only the final list.
pub struct TerminalUi {
    export_dir: PathBuf,
    lines: RefCell<Vec<String>>,
}

impl TerminalUi {
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            lines: RefCell::new(Vec::new()),
        }
    }

    /// Lines of the last rendered list
    pub fn rendered(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn print_list(&self) {
        for line in self.lines.borrow().iter() {
            println!("{line}");
        }
    }
}

impl Prompt for TerminalUi {
    fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

impl RenderTarget for TerminalUi {
    fn reset(&self) {
        self.lines.borrow_mut().clear();
    }

    fn show_placeholder(&self) {
        self.lines.borrow_mut().push(EMPTY_MESSAGE.to_string());
    }

    fn append_note(&self, note: &Note) {
        let mut lines = self.lines.borrow_mut();
        lines.push(note.text.clone());
        lines.push(format!("  {}", note.timestamp));
    }
}

impl Downloader for TerminalUi {
    fn download(&self, file: &ExportFile) -> Result<()> {
        let path = self.export_dir.join(&file.filename);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, &file.contents)
            .and_then(|_| std::fs::rename(&tmp, &path))
            .map_err(|e| NotesError::Download {
                filename: file.filename.clone(),
                reason: e.to_string(),
            })?;
        println!("Saved {}", path.display());
        Ok(())
    }
}

impl ExitModal for TerminalUi {
    // A terminal session has no page to leave
    fn set_exit_modal_visible(&self, _visible: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::scratch_dir;

    #[test]
    fn test_download_writes_file() {
        let dir = scratch_dir("terminal-download");
        std::fs::create_dir_all(&dir).unwrap();
        let ui = TerminalUi::new(&dir);
        let file = ExportFile {
            filename: "my_notes.txt".into(),
            mime: "text/plain",
            contents: "MY NOTES\n\n".into(),
        };

        ui.download(&file).unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.join("my_notes.txt")).unwrap(),
            "MY NOTES\n\n"
        );
        assert!(!dir.join("my_notes.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_render_keeps_only_last_list() {
        let ui = TerminalUi::new(".");
        crate::render::render(&[], &ui);
        let notes = [Note {
            text: "a".into(),
            timestamp: "T1".into(),
        }];
        crate::render::render(&notes, &ui);
        assert_eq!(ui.rendered(), vec!["a".to_string(), "  T1".to_string()]);
    }

    #[test]
    fn test_download_into_missing_dir_fails() {
        let dir = scratch_dir("terminal-missing");
        let ui = TerminalUi::new(dir.join("nope"));
        let file = ExportFile {
            filename: "my_notes.txt".into(),
            mime: "text/plain",
            contents: String::new(),
        };
        assert!(matches!(ui.download(&file), Err(NotesError::Download { .. })));
    }
}
