use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::input::{handle_event, handle_key};
use super::{Message, Model, update};
use crate::editor::{EditOp, LineBuffer, NavOp, SelectOp};

fn model_with(lines: &[&str]) -> Model {
    let mut buffer = LineBuffer::new();
    buffer.set_lines(lines.iter().map(ToString::to_string).collect());
    Model::new(buffer, None)
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

// --- Key mapping ---

#[test]
fn test_plain_arrows_map_to_navigation() {
    assert_eq!(
        handle_key(key(KeyCode::Left, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::PrevChar))
    );
    assert_eq!(
        handle_key(key(KeyCode::Right, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::NextChar))
    );
    assert_eq!(
        handle_key(key(KeyCode::Up, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::PrevLine))
    );
    assert_eq!(
        handle_key(key(KeyCode::Down, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::NextLine))
    );
}

#[test]
fn test_shift_arrows_map_to_selection() {
    assert_eq!(
        handle_key(key(KeyCode::Left, KeyModifiers::SHIFT), false),
        Some(Message::Select(SelectOp::PrevChar))
    );
    assert_eq!(
        handle_key(key(KeyCode::Down, KeyModifiers::SHIFT), false),
        Some(Message::Select(SelectOp::NextLine))
    );
}

#[test]
fn test_ctrl_arrows_map_to_word_motions() {
    assert_eq!(
        handle_key(key(KeyCode::Right, KeyModifiers::CONTROL), false),
        Some(Message::Nav(NavOp::NextWord))
    );
    assert_eq!(
        handle_key(
            key(KeyCode::Left, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            false
        ),
        Some(Message::Select(SelectOp::PrevWord))
    );
}

#[test]
fn test_home_end_variants() {
    assert_eq!(
        handle_key(key(KeyCode::Home, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::LineHome))
    );
    assert_eq!(
        handle_key(key(KeyCode::End, KeyModifiers::CONTROL), false),
        Some(Message::Nav(NavOp::TextEnd))
    );
    assert_eq!(
        handle_key(key(KeyCode::End, KeyModifiers::SHIFT), false),
        Some(Message::Select(SelectOp::LineEnd))
    );
    assert_eq!(
        handle_key(
            key(KeyCode::Home, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            false
        ),
        Some(Message::Select(SelectOp::TextHome))
    );
}

#[test]
fn test_page_key_variants() {
    assert_eq!(
        handle_key(key(KeyCode::PageUp, KeyModifiers::NONE), false),
        Some(Message::Nav(NavOp::PageUp))
    );
    assert_eq!(
        handle_key(key(KeyCode::PageUp, KeyModifiers::CONTROL), false),
        Some(Message::Nav(NavOp::PageTop))
    );
    assert_eq!(
        handle_key(key(KeyCode::PageDown, KeyModifiers::SHIFT), false),
        Some(Message::Select(SelectOp::PageDown))
    );
    assert_eq!(
        handle_key(key(KeyCode::PageDown, KeyModifiers::CONTROL), false),
        Some(Message::Nav(NavOp::PageBottom))
    );
}

#[test]
fn test_typing_inserts_or_replaces_by_mode() {
    assert_eq!(
        handle_key(key(KeyCode::Char('a'), KeyModifiers::NONE), false),
        Some(Message::Edit(EditOp::InsertChar('a')))
    );
    assert_eq!(
        handle_key(key(KeyCode::Char('a'), KeyModifiers::NONE), true),
        Some(Message::Edit(EditOp::ReplaceChar('a')))
    );
    // Shifted chars arrive uppercased and still insert
    assert_eq!(
        handle_key(key(KeyCode::Char('A'), KeyModifiers::SHIFT), false),
        Some(Message::Edit(EditOp::InsertChar('A')))
    );
}

#[test]
fn test_editing_keys() {
    assert_eq!(
        handle_key(key(KeyCode::Enter, KeyModifiers::NONE), false),
        Some(Message::Edit(EditOp::InsertNewline))
    );
    assert_eq!(
        handle_key(key(KeyCode::Backspace, KeyModifiers::NONE), false),
        Some(Message::Edit(EditOp::EraseChar))
    );
    assert_eq!(
        handle_key(key(KeyCode::Backspace, KeyModifiers::CONTROL), false),
        Some(Message::Edit(EditOp::EraseWord))
    );
    assert_eq!(
        handle_key(key(KeyCode::Delete, KeyModifiers::NONE), false),
        Some(Message::Edit(EditOp::DeleteChar))
    );
    assert_eq!(
        handle_key(key(KeyCode::Delete, KeyModifiers::SHIFT), false),
        Some(Message::Edit(EditOp::DeleteLine))
    );
    assert_eq!(
        handle_key(key(KeyCode::Delete, KeyModifiers::CONTROL), false),
        Some(Message::Edit(EditOp::DeleteWord))
    );
    assert_eq!(
        handle_key(key(KeyCode::Tab, KeyModifiers::NONE), false),
        Some(Message::Edit(EditOp::InsertTab))
    );
}

#[test]
fn test_mode_and_session_keys() {
    assert_eq!(
        handle_key(key(KeyCode::Insert, KeyModifiers::NONE), false),
        Some(Message::ToggleOverwrite)
    );
    assert_eq!(
        handle_key(key(KeyCode::Esc, KeyModifiers::NONE), false),
        Some(Message::Select(SelectOp::Cancel))
    );
    assert_eq!(
        handle_key(key(KeyCode::Char('q'), KeyModifiers::CONTROL), false),
        Some(Message::Quit)
    );
    assert_eq!(
        handle_key(key(KeyCode::Char('s'), KeyModifiers::CONTROL), false),
        Some(Message::Save)
    );
}

#[test]
fn test_release_events_are_ignored() {
    let mut released = key(KeyCode::Char('a'), KeyModifiers::NONE);
    released.kind = KeyEventKind::Release;
    assert_eq!(handle_key(released, false), None);
}

#[test]
fn test_unknown_keys_are_ignored() {
    assert_eq!(handle_key(key(KeyCode::F(5), KeyModifiers::NONE), false), None);
}

#[test]
fn test_resize_event_maps_to_message() {
    let model = model_with(&[""]);
    assert_eq!(
        handle_event(&Event::Resize(100, 40), &model),
        Some(Message::Resize(100, 40))
    );
}

// --- update ---

#[test]
fn test_update_nav_moves_caret() {
    let mut model = model_with(&["hello"]);
    update(&mut model, Message::Nav(NavOp::NextChar));
    assert_eq!(model.buffer.caret().column(), 1);
    assert!(!model.dirty);
}

#[test]
fn test_update_edit_marks_dirty() {
    let mut model = model_with(&["hello"]);
    update(&mut model, Message::Edit(EditOp::InsertChar('x')));
    assert!(model.dirty);
}

#[test]
fn test_update_noop_edit_stays_clean() {
    let mut model = model_with(&["hello"]);
    update(&mut model, Message::Edit(EditOp::InsertTab));
    assert!(!model.dirty);
}

#[test]
fn test_update_toggle_overwrite() {
    let mut model = model_with(&[""]);
    update(&mut model, Message::ToggleOverwrite);
    assert!(model.overwrite);
    update(&mut model, Message::ToggleOverwrite);
    assert!(!model.overwrite);
}

#[test]
fn test_update_quit() {
    let mut model = model_with(&[""]);
    update(&mut model, Message::Quit);
    assert!(model.should_quit);
}

#[test]
fn test_update_resize_feeds_page_size() {
    let mut model = model_with(&[""]);
    update(&mut model, Message::Resize(100, 40));
    assert_eq!(model.buffer.caret().page_size(), (100, 39));
}

#[test]
fn test_update_save_without_path_sets_status() {
    let mut model = model_with(&["hello"]);
    update(&mut model, Message::Save);
    assert_eq!(model.status.as_deref(), Some("no file to save to"));
}

#[test]
fn test_update_save_writes_file_and_clears_dirty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut model = model_with(&["hello", "world"]);
    model.file_path = Some(path.clone());
    update(&mut model, Message::Edit(EditOp::InsertChar('x')));
    assert!(model.dirty);

    update(&mut model, Message::Save);
    assert!(!model.dirty);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "xhello\nworld");
}

#[test]
fn test_update_clears_previous_status() {
    let mut model = model_with(&[""]);
    model.show_status("note");
    update(&mut model, Message::Nav(NavOp::NextChar));
    assert_eq!(model.status, None);
}
