//! Line-oriented text buffer with an owned caret.
//!
//! [`LineBuffer`] owns the line store and the single [`Caret`] that moves
//! over it. All caret mutation goes through the buffer's operation methods
//! so caret bounds stay consistent with the line count.

use thiserror::Error;

use super::caret::Caret;
use super::selection::SelectionSpan;

/// Errors from the strict single-line replacement contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The target line does not exist. Nothing was changed.
    #[error("line index {index} out of range for buffer of {len} lines")]
    LineOutOfRange { index: usize, len: usize },
}

/// Caret navigation. Never mutates the line store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOp {
    /// One char left, wrapping to the end of the previous line.
    PrevChar,
    /// One char right, wrapping to the start of the next line.
    NextChar,
    /// One line up, restoring the memorized column.
    PrevLine,
    /// One line down, restoring the memorized column.
    NextLine,
    /// Previous word boundary. Not implemented yet; declared no-op.
    PrevWord,
    /// Next word boundary. Not implemented yet; declared no-op.
    NextWord,
    /// Start of the text.
    TextHome,
    /// End of the text.
    TextEnd,
    /// Column zero of the current line.
    LineHome,
    /// End of the current line.
    LineEnd,
    /// One page up (see [`Caret::prev_page_line`]).
    PageUp,
    /// One page down.
    PageDown,
    /// First line of the current page.
    PageTop,
    /// Last line of the current page.
    PageBottom,
}

/// Selection operations: each motion anchors a selection and then moves
/// like its [`NavOp`] counterpart; [`Cancel`](SelectOp::Cancel) deactivates
/// the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOp {
    PrevChar,
    NextChar,
    PrevLine,
    NextLine,
    PrevWord,
    NextWord,
    TextHome,
    TextEnd,
    LineHome,
    LineEnd,
    PageUp,
    PageDown,
    /// Deactivate the selection without moving the caret.
    Cancel,
}

impl SelectOp {
    /// The navigation op this selection op extends the selection with.
    const fn motion(self) -> Option<NavOp> {
        match self {
            Self::PrevChar => Some(NavOp::PrevChar),
            Self::NextChar => Some(NavOp::NextChar),
            Self::PrevLine => Some(NavOp::PrevLine),
            Self::NextLine => Some(NavOp::NextLine),
            Self::PrevWord => Some(NavOp::PrevWord),
            Self::NextWord => Some(NavOp::NextWord),
            Self::TextHome => Some(NavOp::TextHome),
            Self::TextEnd => Some(NavOp::TextEnd),
            Self::LineHome => Some(NavOp::LineHome),
            Self::LineEnd => Some(NavOp::LineEnd),
            Self::PageUp => Some(NavOp::PageUp),
            Self::PageDown => Some(NavOp::PageDown),
            Self::Cancel => None,
        }
    }
}

/// Mutation operations. The only family that changes the line store.
///
/// Several codes are declared ahead of word-boundary and selection-aware
/// editing: they are accepted and do nothing, by contract, so the dispatch
/// surface will not change when they are filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Insert a char at the caret; the caret advances past it.
    InsertChar(char),
    /// Overwrite the char at the caret; the caret advances past it.
    ReplaceChar(char),
    /// Backspace: drop the char left of the caret, or merge onto the
    /// previous line at column zero.
    EraseChar,
    /// Forward delete: drop the char at the caret, or merge the next line
    /// in at end of line.
    DeleteChar,
    /// Remove the current line. The last remaining line is emptied, never
    /// removed.
    DeleteLine,
    /// Split the current line at the caret; the caret moves to column zero
    /// of the new line.
    InsertNewline,
    /// Declared, not yet supported: no state change.
    InsertTab,
    /// Declared, not yet supported: no state change.
    InsertWord(String),
    /// Declared, not yet supported: no state change.
    InsertLine(String),
    /// Declared, not yet supported: no state change.
    EraseWord,
    /// Declared, not yet supported: no state change.
    EraseLine,
    /// Declared, not yet supported: no state change.
    DeleteWord,
    /// Declared, not yet supported: no state change.
    DeleteSelection,
    /// Declared, not yet supported: no state change.
    MoveSelection,
}

/// An ordered sequence of text lines plus the caret that edits them.
///
/// The buffer is never empty: a fresh buffer holds one empty line, and the
/// last line can be emptied but not removed. Columns are char indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    caret: Caret,
}

impl LineBuffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self::with_caret(Caret::new())
    }

    /// Create a buffer around a pre-configured caret.
    pub fn with_caret(caret: Caret) -> Self {
        Self {
            lines: vec![String::new()],
            caret,
        }
    }

    /// Create a buffer from text, split on `\n`.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.set_lines(text.split('\n').map(ToOwned::to_owned).collect());
        buffer
    }

    /// Read access to the caret.
    pub const fn caret(&self) -> &Caret {
        &self.caret
    }

    /// The line store.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single line, if it exists.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines. At least one.
    pub const fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole document.
    ///
    /// An empty sequence becomes a single empty line. The caret is clamped
    /// back into bounds and any selection is deactivated, since its anchor
    /// refers to the old text.
    pub fn set_lines(&mut self, lines: Vec<String>) {
        self.lines = lines;
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.caret.cancel_selection();
        let line = self.caret.line().min(self.last_line());
        self.caret.set_line(line);
        let column = self.caret.column().min(self.last_column());
        self.caret.set_column(column);
        self.caret.memorize();
    }

    /// Replace one line, all-or-nothing.
    ///
    /// # Errors
    ///
    /// [`BufferError::LineOutOfRange`] when `index` does not name an
    /// existing line; the buffer is untouched.
    pub fn replace_line(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), BufferError> {
        if index >= self.lines.len() {
            return Err(BufferError::LineOutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        self.lines[index] = text.into();
        Ok(())
    }

    /// Resize the caret's page (viewport plumbing for the UI layer).
    pub fn set_page_size(&mut self, columns: usize, lines: usize) {
        self.caret.set_page_size(columns, lines);
    }

    /// Shift the caret's page without moving the caret.
    pub const fn page_scroll(&mut self, dx: isize, dy: isize) {
        self.caret.page_scroll(dx, dy);
    }

    /// Perform a navigation operation. Never mutates the line store.
    pub fn navigate(&mut self, op: NavOp) {
        match op {
            NavOp::NextChar => {
                if self.caret.column() < self.last_column() {
                    self.caret.set_column(self.caret.column() + 1);
                } else if !self.is_last_line() {
                    self.caret.set_line(self.caret.line() + 1);
                    self.caret.set_column(0);
                }
                self.caret.memorize();
            }
            NavOp::PrevChar => {
                if self.caret.column() > 0 {
                    self.caret.set_column(self.caret.column() - 1);
                } else if !self.is_first_line() {
                    self.caret.set_line(self.caret.line() - 1);
                    self.caret.set_column(self.last_column());
                }
                self.caret.memorize();
            }
            NavOp::PrevLine => {
                if !self.is_first_line() {
                    self.caret.set_line(self.caret.line() - 1);
                    self.correct_column(self.caret.line());
                }
            }
            NavOp::NextLine => {
                if !self.is_last_line() {
                    self.caret.set_line(self.caret.line() + 1);
                    self.correct_column(self.caret.line());
                }
            }
            NavOp::TextHome => {
                self.caret.set_line(0);
                self.caret.set_column(0);
                self.caret.memorize();
            }
            NavOp::TextEnd => {
                self.caret.set_line(self.last_line());
                self.caret.set_column(self.last_column());
                self.caret.memorize();
            }
            NavOp::LineHome => {
                self.caret.set_column(0);
                self.caret.memorize();
            }
            NavOp::LineEnd => {
                self.caret.set_column(self.last_column());
                self.caret.memorize();
            }
            NavOp::PageUp => {
                self.caret.set_line(self.caret.prev_page_line());
                self.correct_column(self.caret.line());
            }
            NavOp::PageDown => {
                let jump = self.caret.page_size().1 - 1;
                let line = (self.caret.line() + jump).min(self.last_line());
                self.caret.set_line(line);
                self.correct_column(self.caret.line());
            }
            NavOp::PageTop => {
                let line = self.caret.page_first_line().min(self.last_line());
                self.caret.set_line(line);
                self.correct_column(self.caret.line());
            }
            NavOp::PageBottom => {
                let jump = self.caret.page_first_line() + self.caret.page_size().1 - 1;
                self.caret.set_line(jump.min(self.last_line()));
                self.correct_column(self.caret.line());
            }
            // Word boundaries are out of scope for now
            NavOp::PrevWord | NavOp::NextWord => {}
        }
    }

    /// Perform a selection operation.
    pub fn select(&mut self, op: SelectOp) {
        if let Some(motion) = op.motion() {
            self.caret.start_selection();
            self.navigate(motion);
        } else {
            self.caret.cancel_selection();
        }
    }

    /// Perform a mutation operation.
    ///
    /// Returns `true` when the line store changed, so callers can track
    /// dirtiness. Declared-unsupported codes return `false` and leave all
    /// state untouched.
    pub fn edit(&mut self, op: EditOp) -> bool {
        match op {
            EditOp::InsertChar(ch) => {
                let index = self.caret.line();
                let column = self.caret.column();
                let (left, right) = self.split_line(index, column);
                self.lines[index] = format!("{left}{ch}{right}");
                self.caret.set_column(column + 1);
                self.caret.memorize();
                true
            }
            EditOp::ReplaceChar(ch) => {
                let index = self.caret.line();
                let column = self.caret.column();
                let (left, right) = self.split_line(index, column);
                let right: String = right.chars().skip(1).collect();
                self.lines[index] = format!("{left}{ch}{right}");
                self.caret.set_column(column + 1);
                self.caret.memorize();
                true
            }
            EditOp::EraseChar => {
                let changed = if self.caret.column() > 0 {
                    let index = self.caret.line();
                    let column = self.caret.column();
                    let (mut left, right) = self.split_line(index, column);
                    left.pop();
                    self.lines[index] = format!("{left}{right}");
                    self.caret.set_column(column - 1);
                    true
                } else if self.is_first_line() {
                    false
                } else {
                    let index = self.caret.line();
                    let right = self.lines.remove(index);
                    let merged_column = char_len(&self.lines[index - 1]);
                    self.lines[index - 1].push_str(&right);
                    self.caret.set_line(index - 1);
                    self.caret.set_column(merged_column);
                    true
                };
                self.caret.memorize();
                changed
            }
            EditOp::DeleteChar => {
                let changed = if self.caret.column() < self.last_column() {
                    let index = self.caret.line();
                    let (left, right) = self.split_line(index, self.caret.column());
                    let right: String = right.chars().skip(1).collect();
                    self.lines[index] = format!("{left}{right}");
                    true
                } else if self.is_last_line() {
                    false
                } else {
                    let index = self.caret.line();
                    let next = self.lines.remove(index + 1);
                    self.lines[index].push_str(&next);
                    true
                };
                self.caret.memorize();
                changed
            }
            EditOp::DeleteLine => {
                let index = self.caret.line();
                let changed = if self.is_last_line() {
                    let had_text = !self.lines[index].is_empty();
                    self.lines[index].clear();
                    self.caret.set_column(0);
                    had_text
                } else {
                    self.lines.remove(index);
                    self.correct_column(self.caret.line());
                    true
                };
                self.caret.memorize();
                changed
            }
            EditOp::InsertNewline => {
                let index = self.caret.line();
                let (left, right) = self.split_line(index, self.caret.column());
                self.lines[index] = left;
                self.lines.insert(index + 1, right);
                self.caret.set_line(index + 1);
                self.caret.set_column(0);
                self.caret.memorize();
                true
            }
            // Word- and selection-aware editing is not implemented yet;
            // these codes are accepted and change nothing.
            EditOp::InsertTab
            | EditOp::InsertWord(_)
            | EditOp::InsertLine(_)
            | EditOp::EraseWord
            | EditOp::EraseLine
            | EditOp::DeleteWord
            | EditOp::DeleteSelection
            | EditOp::MoveSelection => false,
        }
    }

    /// The active selection as a normalized span, if any.
    pub fn selection_span(&self) -> Option<SelectionSpan> {
        if !self.caret.selecting() {
            return None;
        }
        Some(SelectionSpan::between(
            self.caret.selection_anchor(),
            (self.caret.line(), self.caret.column()),
        ))
    }

    /// The text inside the active selection, if any. Lines are joined
    /// with `\n`.
    pub fn selection_text(&self) -> Option<String> {
        self.selection_span().map(|span| span.extract(&self.lines))
    }

    /// Split a line at a column into (left, right).
    ///
    /// Clamps out-of-range input instead of failing: a column of zero
    /// yields `("", line)`, a column at or past the end yields
    /// `(line, "")`, and a line index past the end is treated as the last
    /// line.
    pub fn split_line(&self, line: usize, column: usize) -> (String, String) {
        let text = &self.lines[line.min(self.last_line())];
        let split = byte_at(text, column);
        (text[..split].to_string(), text[split..].to_string())
    }

    fn is_first_line(&self) -> bool {
        self.caret.line() == 0
    }

    fn is_last_line(&self) -> bool {
        self.caret.line() == self.last_line()
    }

    /// Index of the last line.
    fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Char length of the current line; the caret's maximum column.
    fn last_column(&self) -> usize {
        char_len(self.current_line())
    }

    fn current_line(&self) -> &str {
        let index = self.caret.line().min(self.last_line());
        &self.lines[index]
    }

    /// Clamp the memorized column against a line and move the caret there.
    fn correct_column(&mut self, line: usize) {
        let limit = char_len(&self.lines[line.min(self.last_line())]);
        let column = self.caret.memorized_column().min(limit);
        self.caret.set_column(column);
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Char count of a string (columns are char indices).
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the char at `column`, clamped to the end of the string.
pub(crate) fn byte_at(s: &str, column: usize) -> usize {
    s.char_indices().nth(column).map_or(s.len(), |(i, _)| i)
}
