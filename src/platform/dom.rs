//! DOM bindings for the browser build
//!
//! Expects the page markup to provide the elements named in [`ids`]. The
//! placeholder is taken from the container on first bind and re-attached
//! whenever the list is empty.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Blob, BlobPropertyBag, Document, Element, EventTarget, HtmlAnchorElement, HtmlElement,
    HtmlInputElement, HtmlTextAreaElement, Url, Window,
};

use crate::consts::EMPTY_MESSAGE;
use crate::error::{NotesError, Result, js_reason};
use crate::export::ExportFile;
use crate::note::Note;
use crate::ui::{Downloader, ExitModal, Prompt, RenderTarget};

/// Element ids the widget binds to
pub mod ids {
    pub const NOTE_INPUT: &str = "noteInput";
    pub const ADD_BUTTON: &str = "addNoteBtn";
    pub const DOWNLOAD_BUTTON: &str = "downloadBtn";
    pub const CLEAR_BUTTON: &str = "clearBtn";
    pub const NOTES_CONTAINER: &str = "notesContainer";
    pub const EXIT_MODAL: &str = "closeModal";
    pub const MODAL_DOWNLOAD_BUTTON: &str = "modalDownloadBtn";
    pub const MODAL_CANCEL_BUTTON: &str = "modalCancelBtn";
    pub const EMPTY_MESSAGE_SELECTOR: &str = ".empty-message";
}

/// The note text field, either a single-line input or a textarea
pub enum NoteInput {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl NoteInput {
    fn from_element(element: Element) -> Result<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Ok(Self::Input(input)),
            Err(element) => element
                .dyn_into::<HtmlTextAreaElement>()
                .map(Self::TextArea)
                .map_err(|_| NotesError::MissingElement {
                    id: ids::NOTE_INPUT.to_string(),
                }),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Input(el) => el.set_value(""),
            Self::TextArea(el) => el.set_value(""),
        }
    }

    pub fn focus(&self) {
        let _ = match self {
            Self::Input(el) => el.focus(),
            Self::TextArea(el) => el.focus(),
        };
    }

    pub fn event_target(&self) -> &EventTarget {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::TextArea(el) => el.as_ref(),
        }
    }
}

/// Live handles into the page
pub struct DomUi {
    window: Window,
    document: Document,
    container: Element,
    placeholder: Element,
    modal: Option<HtmlElement>,
    pub input: NoteInput,
}

fn element(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| NotesError::MissingElement { id: id.to_string() })
}

impl DomUi {
    pub fn bind(window: &Window) -> Result<Self> {
        let document = window.document().ok_or_else(|| NotesError::MissingElement {
            id: "document".into(),
        })?;

        let container = element(&document, ids::NOTES_CONTAINER)?;
        let input = NoteInput::from_element(element(&document, ids::NOTE_INPUT)?)?;

        let placeholder = match document
            .query_selector(ids::EMPTY_MESSAGE_SELECTOR)
            .ok()
            .flatten()
        {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("p")
                    .map_err(|_| NotesError::MissingElement {
                        id: ids::EMPTY_MESSAGE_SELECTOR.to_string(),
                    })?;
                el.set_class_name("empty-message");
                el.set_text_content(Some(EMPTY_MESSAGE));
                el
            }
        };

        let modal = document
            .get_element_by_id(ids::EXIT_MODAL)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if modal.is_none() {
            log::warn!("No #{} element, exit modal disabled", ids::EXIT_MODAL);
        }

        Ok(Self {
            window: window.clone(),
            document,
            container,
            placeholder,
            modal,
            input,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn note_element(&self, note: &Note) -> std::result::Result<Element, JsValue> {
        let item = self.document.create_element("div")?;
        item.set_class_name("note");

        let text = self.document.create_element("div")?;
        text.set_text_content(Some(&note.text));

        let timestamp = self.document.create_element("span")?;
        timestamp.set_class_name("timestamp");
        timestamp.set_text_content(Some(&note.timestamp));

        item.append_child(&text)?;
        item.append_child(&timestamp)?;
        Ok(item)
    }

    /// Temporary `<a download>` appended, clicked and removed
    fn click_download_link(&self, href: &str, filename: &str) -> std::result::Result<(), JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;
        let link: HtmlAnchorElement = self
            .document
            .create_element("a")?
            .dyn_into()
            .map_err(JsValue::from)?;
        link.set_href(href);
        link.set_download(filename);

        body.append_child(&link)?;
        link.click();
        body.remove_child(&link)?;
        Ok(())
    }
}

/// Object URL revoked when dropped, on success and error paths alike
struct ObjectUrl(String);

impl ObjectUrl {
    fn create(blob: &Blob) -> std::result::Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke {}: {}", self.0, js_reason(&e));
        }
    }
}

impl Prompt for DomUi {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {}", js_reason(&e));
        }
    }
}

impl RenderTarget for DomUi {
    fn reset(&self) {
        self.container.set_inner_html("");
    }

    fn show_placeholder(&self) {
        if let Err(e) = self.container.append_child(&self.placeholder) {
            log::warn!("Failed to show placeholder: {}", js_reason(&e));
        }
    }

    fn append_note(&self, note: &Note) {
        let appended = self
            .note_element(note)
            .and_then(|item| self.container.append_child(&item));
        if let Err(e) = appended {
            log::warn!("Failed to render note: {}", js_reason(&e));
        }
    }
}

impl Downloader for DomUi {
    fn download(&self, file: &ExportFile) -> Result<()> {
        let to_error = |e: JsValue| NotesError::Download {
            filename: file.filename.clone(),
            reason: js_reason(&e),
        };

        let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
        let options = BlobPropertyBag::new();
        options.set_type(file.mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(to_error)?;

        let url = ObjectUrl::create(&blob).map_err(to_error)?;
        self.click_download_link(&url.0, &file.filename)
            .map_err(to_error)
    }
}

impl ExitModal for DomUi {
    fn set_exit_modal_visible(&self, visible: bool) {
        let Some(modal) = &self.modal else {
            return;
        };
        let display = if visible { "flex" } else { "none" };
        if let Err(e) = modal.style().set_property("display", display) {
            log::warn!("Failed to toggle exit modal: {}", js_reason(&e));
        }
    }
}
