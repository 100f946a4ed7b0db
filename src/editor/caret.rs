//! Caret state: position, sticky column, selection anchor, and viewport.

/// Editing policy flags carried by the caret.
///
/// Declared up front so the keymap and buffer can grow into them; only
/// some are consulted today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretOptions(u8);

impl CaretOptions {
    /// Indent new lines to match the previous line.
    pub const AUTO_INDENT: Self = Self(1);
    /// Backspace at an indent stop removes a whole indent level.
    pub const DEDENT_ON_BACKSPACE: Self = Self(1 << 1);
    /// Home first jumps to the first non-whitespace column.
    pub const WHITESPACE_HOME: Self = Self(1 << 2);
    /// Strip trailing spaces when a line is left.
    pub const TRIM_TRAILING_SPACES: Self = Self(1 << 3);

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether every flag in `other` is set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the flags in `other`.
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the flags in `other`.
    pub const fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl Default for CaretOptions {
    fn default() -> Self {
        let mut options = Self::AUTO_INDENT;
        options.insert(Self::DEDENT_ON_BACKSPACE);
        options
    }
}

impl std::ops::BitOr for CaretOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// The text cursor, including its viewport/scroll state.
///
/// The caret tracks:
/// - Current position as zero-based (line, column) char indices
/// - A memorized column that vertical movement tries to restore
/// - The selection anchor while a selection is active
/// - The page: a (columns, lines) window over the text that auto-scrolls
///   to keep the caret visible
///
/// Only the lower bound of the position is enforced here (structurally,
/// via `usize`). The upper bound depends on the line store, whose length
/// grows and shrinks independently, so [`super::LineBuffer`] clamps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caret {
    line: usize,
    column: usize,
    memorized_column: usize,
    selection_line: usize,
    selection_column: usize,
    selecting: bool,
    page_size: (usize, usize),
    page_pos: (usize, usize),
    indent_width: usize,
    options: CaretOptions,
}

impl Caret {
    /// Default page size in (columns, lines).
    pub const DEFAULT_PAGE_SIZE: (usize, usize) = (80, 20);

    /// Create a caret at the origin with an 80x20 page.
    pub fn new() -> Self {
        Self {
            line: 0,
            column: 0,
            memorized_column: 0,
            selection_line: 0,
            selection_column: 0,
            selecting: false,
            page_size: Self::DEFAULT_PAGE_SIZE,
            page_pos: (0, 0),
            indent_width: 4,
            options: CaretOptions::default(),
        }
    }

    /// Current line index.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Current column index (chars).
    pub const fn column(&self) -> usize {
        self.column
    }

    /// The column vertical movement tries to restore.
    pub const fn memorized_column(&self) -> usize {
        self.memorized_column
    }

    /// Whether a selection is active.
    pub const fn selecting(&self) -> bool {
        self.selecting
    }

    /// The fixed endpoint of the selection as (line, column).
    ///
    /// Only meaningful while [`selecting`](Self::selecting) is true.
    pub const fn selection_anchor(&self) -> (usize, usize) {
        (self.selection_line, self.selection_column)
    }

    /// Page size in (columns, lines).
    pub const fn page_size(&self) -> (usize, usize) {
        self.page_size
    }

    /// Top-left of the page in (column, line) space.
    pub const fn page_pos(&self) -> (usize, usize) {
        self.page_pos
    }

    /// Configured indent width.
    pub const fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Editing policy flags.
    pub const fn options(&self) -> CaretOptions {
        self.options
    }

    /// Move to a line, scrolling the page vertically to keep it in view.
    pub const fn set_line(&mut self, line: usize) {
        self.line = line;
        self.page_pos.1 = scrolled_axis(self.page_pos.1, self.page_size.1, line);
    }

    /// Move to a column, scrolling the page horizontally to keep it in view.
    pub const fn set_column(&mut self, column: usize) {
        self.column = column;
        self.page_pos.0 = scrolled_axis(self.page_pos.0, self.page_size.0, column);
    }

    /// Save the current column as the target for vertical movement.
    pub const fn memorize(&mut self) {
        self.memorized_column = self.column;
    }

    /// Begin a selection at the current position.
    ///
    /// Idempotent while a selection is active: the anchor is set once and
    /// not overwritten by later calls.
    pub const fn start_selection(&mut self) {
        if !self.selecting {
            self.selection_line = self.line;
            self.selection_column = self.column;
            self.selecting = true;
        }
    }

    /// Deactivate the selection. The anchor values are left as-is.
    pub const fn cancel_selection(&mut self) {
        self.selecting = false;
    }

    /// Resize the page. Each axis is floored at one cell.
    pub fn set_page_size(&mut self, columns: usize, lines: usize) {
        self.page_size = (columns.max(1), lines.max(1));
    }

    /// Reposition the page directly.
    pub const fn set_page_pos(&mut self, x: usize, y: usize) {
        self.page_pos = (x, y);
    }

    /// Shift the page by a relative amount, each axis floored at zero.
    pub const fn page_scroll(&mut self, dx: isize, dy: isize) {
        self.page_pos.0 = shifted(self.page_pos.0, dx);
        self.page_pos.1 = shifted(self.page_pos.1, dy);
    }

    /// Index of the top line of the page.
    pub const fn page_first_line(&self) -> usize {
        self.page_pos.1
    }

    /// Index one past the bottom line of the page.
    pub const fn page_last_line(&self) -> usize {
        self.page_first_line() + self.page_size.1
    }

    /// Line index one page after the current line.
    pub const fn next_page_line(&self) -> usize {
        self.line + self.page_size.1 - 1
    }

    /// Line index one page before the current line.
    ///
    /// Deliberately asymmetric with [`next_page_line`](Self::next_page_line):
    /// the jump is `page height + 1`, floored at zero. Long-standing widget
    /// behavior, kept as-is.
    pub const fn prev_page_line(&self) -> usize {
        self.line.saturating_sub(self.page_size.1 + 1)
    }

    /// Replace the editing policy flags.
    pub const fn set_options(&mut self, options: CaretOptions) {
        self.options = options;
    }

    /// Set the indent width, floored at one column.
    pub fn set_indent_width(&mut self, width: usize) {
        self.indent_width = width.max(1);
    }
}

impl Default for Caret {
    fn default() -> Self {
        Self::new()
    }
}

/// Scroll one page axis so `value` falls inside the window, if it doesn't
/// already. A value above/left of the window becomes the new window start;
/// a value below/right snaps the window so `value` is its last visible cell.
const fn scrolled_axis(start: usize, size: usize, value: usize) -> usize {
    if value < start {
        value
    } else if value >= start + size {
        value + 1 - size
    } else {
        start
    }
}

const fn shifted(value: usize, delta: isize) -> usize {
    if delta.is_negative() {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    }
}
