//! Plain-text export of the whole note list

use crate::consts::{EXPORT_HEADER, EXPORT_MIME, NOTHING_TO_EXPORT_MESSAGE};
use crate::error::{NotesError, Result};
use crate::note::Note;
use crate::ui::{Downloader, Prompt};

/// A document ready to hand to a downloader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime: &'static str,
    pub contents: String,
}

/// Header line, then one `[timestamp]\ntext\n\n` block per note
pub fn export_document(notes: &[Note]) -> Result<String> {
    if notes.is_empty() {
        return Err(NotesError::NothingToExport);
    }

    let mut doc = format!("{EXPORT_HEADER}\n\n");
    for note in notes {
        doc.push_str(&format!("[{}]\n{}\n\n", note.timestamp, note.text));
    }
    Ok(doc)
}

/// Build the document and download it as `filename`
///
/// With no notes the user gets a notice and nothing is downloaded.
pub fn export<U: Prompt + Downloader>(notes: &[Note], filename: &str, ui: &U) -> Result<()> {
    let contents = match export_document(notes) {
        Ok(contents) => contents,
        Err(e) => {
            ui.notify(NOTHING_TO_EXPORT_MESSAGE);
            return Err(e);
        }
    };

    let file = ExportFile {
        filename: filename.to_string(),
        mime: EXPORT_MIME,
        contents,
    };
    ui.download(&file)?;
    log::info!("Exported {} notes to {}", notes.len(), filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::EXPORT_FILENAME;
    use crate::ui::testing::RecordingUi;

    fn note(text: &str, timestamp: &str) -> Note {
        Note {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }

    #[test]
    fn test_document_format() {
        let doc = export_document(&[note("a", "T1"), note("b", "T2")]).unwrap();
        assert_eq!(doc, "MY NOTES\n\n[T1]\na\n\n[T2]\nb\n\n");
    }

    #[test]
    fn test_multiline_note_kept_verbatim() {
        let doc = export_document(&[note("one\ntwo", "T1")]).unwrap();
        assert_eq!(doc, "MY NOTES\n\n[T1]\none\ntwo\n\n");
    }

    #[test]
    fn test_export_empty_notifies_without_download() {
        let ui = RecordingUi::default();
        let err = export(&[], EXPORT_FILENAME, &ui).unwrap_err();
        assert!(matches!(err, NotesError::NothingToExport));
        assert!(ui.downloads().is_empty());
        assert_eq!(ui.notices(), vec![NOTHING_TO_EXPORT_MESSAGE.to_string()]);
    }

    #[test]
    fn test_export_downloads_text_file() {
        let ui = RecordingUi::default();
        export(&[note("a", "T1")], EXPORT_FILENAME, &ui).unwrap();
        assert_eq!(
            ui.downloads(),
            vec![ExportFile {
                filename: "my_notes.txt".into(),
                mime: "text/plain",
                contents: "MY NOTES\n\n[T1]\na\n\n".into(),
            }]
        );
        assert!(ui.notices().is_empty());
    }

    #[test]
    fn test_export_propagates_download_failure() {
        let ui = RecordingUi {
            fail_downloads: true,
            ..RecordingUi::default()
        };
        let err = export(&[note("a", "T1")], EXPORT_FILENAME, &ui).unwrap_err();
        assert!(matches!(err, NotesError::Download { .. }));
    }
}
