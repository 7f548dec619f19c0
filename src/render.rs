//! Projection of the note list onto a render target

use crate::note::Note;
use crate::ui::RenderTarget;

/// Rebuild the target from scratch
///
/// An empty list shows only the placeholder; otherwise one item per note, in
/// order.
pub fn render(notes: &[Note], target: &impl RenderTarget) {
    target.reset();

    if notes.is_empty() {
        target.show_placeholder();
        return;
    }

    for note in notes {
        target.append_note(note);
    }
}
