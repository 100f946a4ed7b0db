//! Rendering of the buffer's visible page.
//!
//! Draws the line slice `page_first_line..page_last_line`, each line
//! starting at the page's first column with a cell budget of the page
//! width, highlights the selection, and places the terminal cursor on the
//! caret's cell.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::Model;
use crate::editor::{byte_at, char_len};

/// Draw the whole frame: text area plus status bar.
pub fn render(frame: &mut Frame, model: &Model) {
    let [text_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(super::STATUS_BAR_HEIGHT)])
            .areas(frame.area());
    render_text(frame, text_area, model);
    super::status::render_status(frame, status_area, model);
}

fn render_text(frame: &mut Frame, area: Rect, model: &Model) {
    let caret = model.buffer.caret();
    let (first_col, first_line) = caret.page_pos();
    let selection = model.buffer.selection_span();

    let mut rows: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in 0..area.height as usize {
        let index = first_line + row;
        let Some(text) = model.buffer.line(index) else {
            break;
        };
        let selected = selection.and_then(|span| span.columns_on_line(index, char_len(text)));
        rows.push(styled_row(text, first_col, area.width as usize, selected));
    }
    frame.render_widget(Paragraph::new(rows), area);

    if let Some(position) = caret_cell(model, area) {
        frame.set_cursor_position(position);
    }
}

/// One visible row: the slice of `text` starting at char `first_col`,
/// budgeted to `width` cells, with the selected char range (full-line
/// coordinates) drawn reversed.
fn styled_row(
    text: &str,
    first_col: usize,
    width: usize,
    selected: Option<std::ops::Range<usize>>,
) -> Line<'_> {
    let visible = visible_slice(text, first_col, width);
    let visible_len = char_len(visible);

    let Some(selected) = selected else {
        return Line::from(visible);
    };
    // Rebase the selection onto the visible slice
    let from = selected.start.saturating_sub(first_col).min(visible_len);
    let to = selected.end.saturating_sub(first_col).min(visible_len);
    if from >= to {
        return Line::from(visible);
    }
    let from_byte = byte_at(visible, from);
    let to_byte = byte_at(visible, to);
    Line::from(vec![
        Span::raw(&visible[..from_byte]),
        Span::styled(
            &visible[from_byte..to_byte],
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::raw(&visible[to_byte..]),
    ])
}

/// The slice of `line` from char `first_col` that fits in `width` cells.
///
/// Wide glyphs that would straddle the right edge are excluded whole.
fn visible_slice(line: &str, first_col: usize, width: usize) -> &str {
    let start = byte_at(line, first_col);
    let rest = &line[start..];
    let mut budget = width;
    for (offset, ch) in rest.char_indices() {
        let cells = ch.width().unwrap_or(0);
        if cells > budget {
            return &rest[..offset];
        }
        budget -= cells;
    }
    rest
}

/// Screen cell for the caret, if it is inside the text area.
fn caret_cell(model: &Model, area: Rect) -> Option<Position> {
    let caret = model.buffer.caret();
    let (first_col, first_line) = caret.page_pos();
    let row = caret.line().checked_sub(first_line)?;
    if row >= area.height as usize || caret.column() < first_col {
        return None;
    }
    // Cursor x is the display width of the visible prefix left of the caret
    let text = model.buffer.line(caret.line())?;
    let from = byte_at(text, first_col);
    let to = byte_at(text, caret.column());
    let x = text[from.min(to)..to].width();
    if x >= area.width as usize {
        return None;
    }
    let x = u16::try_from(x).ok()?;
    let y = u16::try_from(row).ok()?;
    Some(Position::new(area.x + x, area.y + y))
}
