//! Maps terminal events to [`Message`]s.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Message, Model};
use crate::editor::{EditOp, NavOp, SelectOp};

pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model.overwrite),
        Event::Resize(width, height) => Some(Message::Resize(*width, *height)),
        _ => None,
    }
}

/// Shift extends the selection; Ctrl switches to the text/page/word
/// variants of a motion.
pub(super) fn handle_key(key: KeyEvent, overwrite: bool) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let message = match key.code {
        KeyCode::Char('q') if ctrl => Message::Quit,
        KeyCode::Char('s') if ctrl => Message::Save,

        KeyCode::Left => match (ctrl, shift) {
            (true, true) => Message::Select(SelectOp::PrevWord),
            (true, false) => Message::Nav(NavOp::PrevWord),
            (false, true) => Message::Select(SelectOp::PrevChar),
            (false, false) => Message::Nav(NavOp::PrevChar),
        },
        KeyCode::Right => match (ctrl, shift) {
            (true, true) => Message::Select(SelectOp::NextWord),
            (true, false) => Message::Nav(NavOp::NextWord),
            (false, true) => Message::Select(SelectOp::NextChar),
            (false, false) => Message::Nav(NavOp::NextChar),
        },
        KeyCode::Up if shift => Message::Select(SelectOp::PrevLine),
        KeyCode::Up => Message::Nav(NavOp::PrevLine),
        KeyCode::Down if shift => Message::Select(SelectOp::NextLine),
        KeyCode::Down => Message::Nav(NavOp::NextLine),

        KeyCode::Home => match (ctrl, shift) {
            (true, true) => Message::Select(SelectOp::TextHome),
            (true, false) => Message::Nav(NavOp::TextHome),
            (false, true) => Message::Select(SelectOp::LineHome),
            (false, false) => Message::Nav(NavOp::LineHome),
        },
        KeyCode::End => match (ctrl, shift) {
            (true, true) => Message::Select(SelectOp::TextEnd),
            (true, false) => Message::Nav(NavOp::TextEnd),
            (false, true) => Message::Select(SelectOp::LineEnd),
            (false, false) => Message::Nav(NavOp::LineEnd),
        },
        KeyCode::PageUp => match (ctrl, shift) {
            (true, _) => Message::Nav(NavOp::PageTop),
            (false, true) => Message::Select(SelectOp::PageUp),
            (false, false) => Message::Nav(NavOp::PageUp),
        },
        KeyCode::PageDown => match (ctrl, shift) {
            (true, _) => Message::Nav(NavOp::PageBottom),
            (false, true) => Message::Select(SelectOp::PageDown),
            (false, false) => Message::Nav(NavOp::PageDown),
        },

        KeyCode::Insert => Message::ToggleOverwrite,
        KeyCode::Esc => Message::Select(SelectOp::Cancel),

        KeyCode::Enter => Message::Edit(EditOp::InsertNewline),
        KeyCode::Tab => Message::Edit(EditOp::InsertTab),
        KeyCode::Backspace if ctrl => Message::Edit(EditOp::EraseWord),
        KeyCode::Backspace => Message::Edit(EditOp::EraseChar),
        KeyCode::Delete => match (ctrl, shift) {
            (true, _) => Message::Edit(EditOp::DeleteWord),
            (false, true) => Message::Edit(EditOp::DeleteLine),
            (false, false) => Message::Edit(EditOp::DeleteChar),
        },

        KeyCode::Char(ch) if !ctrl => {
            if overwrite {
                Message::Edit(EditOp::ReplaceChar(ch))
            } else {
                Message::Edit(EditOp::InsertChar(ch))
            }
        }

        _ => return None,
    };
    Some(message)
}
