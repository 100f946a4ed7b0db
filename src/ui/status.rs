//! Status bar: file name, dirty marker, input mode, caret position.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::Model;

pub(super) fn render_status(frame: &mut Frame, area: Rect, model: &Model) {
    let text = status_line(model, area.width as usize);
    frame.render_widget(
        Paragraph::new(text).style(Style::default().add_modifier(Modifier::REVERSED)),
        area,
    );
}

/// The status bar content, padded or truncated to `width` cells.
fn status_line(model: &Model, width: usize) -> String {
    let caret = model.buffer.caret();

    let mut left = format!(" {}", model.display_name());
    if model.dirty {
        left.push_str(" *");
    }
    if let Some(note) = &model.status {
        left.push_str(" | ");
        left.push_str(note);
    }

    let mode = if model.overwrite { "OVR" } else { "INS" };
    let mut right = String::new();
    if caret.selecting() {
        right.push_str("SEL  ");
    }
    right.push_str(mode);
    right.push_str(&format!("  Ln {}, Col {} ", caret.line() + 1, caret.column() + 1));

    let used = left.width() + right.width();
    if used <= width {
        let mut bar = left;
        bar.push_str(&" ".repeat(width - used));
        bar.push_str(&right);
        bar
    } else {
        let mut bar = left;
        bar.push(' ');
        bar.push_str(&right);
        bar.chars().take(width).collect()
    }
}
