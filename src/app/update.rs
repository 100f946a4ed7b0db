//! Messages and state transitions.

use tracing::{debug, warn};

use crate::app::Model;
use crate::editor::{EditOp, NavOp, SelectOp};

/// All possible events and actions in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move the caret.
    Nav(NavOp),
    /// Extend or cancel the selection.
    Select(SelectOp),
    /// Mutate the buffer.
    Edit(EditOp),
    /// Flip between insert and overwrite typing.
    ToggleOverwrite,
    /// Write the buffer to its file.
    Save,
    /// Terminal was resized to (width, height).
    Resize(u16, u16),
    /// Leave the event loop.
    Quit,
}

/// Apply a message to the model.
pub fn update(model: &mut Model, message: Message) {
    // Any activity replaces the previous transient note
    model.status = None;

    match message {
        Message::Nav(op) => model.buffer.navigate(op),
        Message::Select(op) => model.buffer.select(op),
        Message::Edit(op) => {
            if model.buffer.edit(op) {
                model.dirty = true;
            }
        }
        Message::ToggleOverwrite => model.overwrite = !model.overwrite,
        Message::Save => save(model),
        Message::Resize(width, height) => {
            let (columns, lines) = crate::ui::text_area_size(width, height);
            model
                .buffer
                .set_page_size(usize::from(columns), usize::from(lines));
            debug!(width, height, "resized");
        }
        Message::Quit => model.should_quit = true,
    }
}

fn save(model: &mut Model) {
    let Some(path) = model.file_path.clone() else {
        model.show_status("no file to save to");
        return;
    };
    match std::fs::write(&path, model.buffer.text()) {
        Ok(()) => {
            model.dirty = false;
            model.show_status(format!("saved {}", path.display()));
            debug!(path = %path.display(), "saved");
        }
        Err(err) => {
            model.show_status(format!("save failed: {err}"));
            warn!(path = %path.display(), %err, "save failed");
        }
    }
}
