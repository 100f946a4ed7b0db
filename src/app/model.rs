//! The complete application state.

use std::path::PathBuf;

use crate::editor::LineBuffer;

/// Application state: the buffer under edit plus UI-level bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The document and its caret.
    pub buffer: LineBuffer,
    /// Where [`Message::Save`](super::Message::Save) writes to.
    pub file_path: Option<PathBuf>,
    /// Whether the buffer changed since load or last save.
    pub dirty: bool,
    /// Overwrite mode: typing replaces instead of inserting.
    pub overwrite: bool,
    /// Transient note shown in the status bar.
    pub status: Option<String>,
    /// Set by [`Message::Quit`](super::Message::Quit); ends the event loop.
    pub should_quit: bool,
}

impl Model {
    /// Create a model around a buffer.
    pub fn new(buffer: LineBuffer, file_path: Option<PathBuf>) -> Self {
        Self {
            buffer,
            file_path,
            dirty: false,
            overwrite: false,
            status: None,
            should_quit: false,
        }
    }

    /// The name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .and_then(std::path::Path::file_name)
            .map_or_else(
                || "[untitled]".to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Show a transient note in the status bar.
    pub fn show_status(&mut self, note: impl Into<String>) {
        self.status = Some(note.into());
    }
}
