//! Local Notes entry point
//!
//! On the web this binds the widget to the page; natively it is a small
//! command-line shell over the same store.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{BeforeUnloadEvent, Document, KeyboardEvent, MouseEvent};

    use local_notes::platform::dom::{DomUi, ids};
    use local_notes::platform::{KeyValueStorage, LocalStorage, MemoryStorage, SystemClock};
    use local_notes::{KeyAction, NotesApp, UnloadVerdict};

    type App = NotesApp<Box<dyn KeyValueStorage>>;

    /// The app plus the page it is drawn on
    struct Widget {
        app: App,
        ui: DomUi,
    }

    impl Widget {
        fn submit(&mut self) {
            let text = self.ui.input.value();
            if self.app.submit(&text, &self.ui) {
                self.ui.input.clear();
                if self.app.settings().refocus_input {
                    self.ui.input.focus();
                }
            }
        }

        fn download(&mut self) {
            self.app.download(&self.ui);
        }

        fn clear(&mut self) {
            self.app.clear(&self.ui);
        }

        fn modal_download(&mut self) {
            self.app.modal_download(&self.ui);
        }

        fn modal_cancel(&mut self) {
            self.app.modal_cancel(&self.ui);
        }

        fn before_unload(&mut self) -> UnloadVerdict {
            self.app.before_unload(&self.ui)
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Local Notes starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };

        let ui = match DomUi::bind(&window) {
            Ok(ui) => ui,
            Err(e) => {
                log::error!("Cannot bind to page: {}", e);
                return;
            }
        };

        let storage: Box<dyn KeyValueStorage> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; notes will not survive a reload", e);
                Box::new(MemoryStorage::new())
            }
        };

        let app = NotesApp::start(storage, SystemClock, &ui);
        let document = ui.document().clone();
        let widget = Rc::new(RefCell::new(Widget { app, ui }));

        on_click(&document, ids::ADD_BUTTON, widget.clone(), Widget::submit);
        on_click(&document, ids::DOWNLOAD_BUTTON, widget.clone(), Widget::download);
        on_click(&document, ids::CLEAR_BUTTON, widget.clone(), Widget::clear);
        on_click(
            &document,
            ids::MODAL_DOWNLOAD_BUTTON,
            widget.clone(),
            Widget::modal_download,
        );
        on_click(
            &document,
            ids::MODAL_CANCEL_BUTTON,
            widget.clone(),
            Widget::modal_cancel,
        );
        setup_enter_to_add(widget.clone());
        setup_exit_guard(&window, widget);

        log::info!("Local Notes running!");
    }

    fn on_click(
        document: &Document,
        id: &str,
        widget: Rc<RefCell<Widget>>,
        handler: fn(&mut Widget),
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{} element, skipping", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            handler(&mut widget.borrow_mut());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Enter adds the note, Shift+Enter falls through to a newline
    fn setup_enter_to_add(widget: Rc<RefCell<Widget>>) {
        let target = widget.borrow().ui.input.event_target().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if App::key_action(&event.key(), event.shift_key()) == KeyAction::Submit {
                event.prevent_default();
                widget.borrow_mut().submit();
            }
        });
        let _ =
            target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_exit_guard(window: &web_sys::Window, widget: Rc<RefCell<Widget>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: BeforeUnloadEvent| {
            if let UnloadVerdict::Prevent { message } = widget.borrow_mut().before_unload() {
                event.prevent_default();
                event.set_return_value(message);
            }
        });
        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use clap::Parser;
    use local_notes::NotesApp;
    use local_notes::platform::cli::{self, Cli};
    use local_notes::platform::native::TerminalUi;
    use local_notes::platform::{FileStorage, SystemClock};

    env_logger::init();

    let cli = Cli::parse();

    let storage = match FileStorage::open(&cli.dir) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("Using notes directory {}", storage.dir().display());

    let ui = TerminalUi::new(storage.dir());
    let mut app = NotesApp::start(storage, SystemClock, &ui);

    if cli::execute(&cli.command, &mut app, &ui) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
