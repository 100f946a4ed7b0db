//! Terminal lifecycle and the draw/poll loop.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::app::{App, Model, update};
use crate::editor::{Caret, LineBuffer};

/// How long one poll waits before redrawing anyway.
const TICK: Duration = Duration::from_millis(250);

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, reading the file, or
    /// the event loop encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut caret = Caret::new();
        caret.set_options(self.options);
        if let Some(width) = self.indent_width {
            caret.set_indent_width(width);
        }
        let mut buffer = LineBuffer::with_caret(caret);

        // A missing path is a new, unsaved document
        if let Some(path) = &self.file_path {
            if path.exists() {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                buffer.set_lines(text.split('\n').map(ToOwned::to_owned).collect());
            }
        }

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal; linebox requires an interactive terminal")?;
        let size = terminal.size()?;
        let (columns, lines) = crate::ui::text_area_size(size.width, size.height);
        buffer.set_page_size(usize::from(columns), usize::from(lines));

        let mut model = Model::new(buffer, self.file_path.clone());
        model.overwrite = self.overwrite;
        debug!(
            lines = model.buffer.line_count(),
            width = size.width,
            height = size.height,
            "starting event loop"
        );

        let result = Self::event_loop(&mut terminal, &mut model);
        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(frame, model))?;
            if event::poll(TICK)? {
                let event = event::read()?;
                if let Some(message) = super::input::handle_event(&event, model) {
                    update(model, message);
                }
            }
            if model.should_quit {
                debug!("quit");
                return Ok(());
            }
        }
    }
}
