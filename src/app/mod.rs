//! Application state and main event loop.
//!
//! The app follows The Elm Architecture (TEA):
//! - [`Model`]: the complete application state
//! - [`Message`]: all possible events and actions
//! - [`update`]: state transitions
//! - [`App::run`]: main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

use crate::editor::CaretOptions;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    indent_width: Option<usize>,
    options: CaretOptions,
    overwrite: bool,
}

impl App {
    /// Create a new application, editing the given file if provided.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            indent_width: None,
            options: CaretOptions::default(),
            overwrite: false,
        }
    }

    /// Override the caret's indent width.
    pub const fn with_indent_width(mut self, width: Option<usize>) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the caret's editing policy flags.
    pub const fn with_options(mut self, options: CaretOptions) -> Self {
        self.options = options;
        self
    }

    /// Start in overwrite mode.
    pub const fn with_overwrite(mut self, enabled: bool) -> Self {
        self.overwrite = enabled;
        self
    }
}

#[cfg(test)]
mod tests;
