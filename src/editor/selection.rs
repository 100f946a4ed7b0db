//! Selection spans between the anchor and the live caret position.

use std::ops::Range;

use super::buffer::{byte_at, char_len};

/// A normalized selection span over (line, column) positions.
///
/// `start` never exceeds `end` in document order, regardless of which side
/// the anchor is on. Columns are char indices and may point past the end
/// of a line that shrank after the anchor was set; all queries clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    start: (usize, usize),
    end: (usize, usize),
}

impl SelectionSpan {
    /// Build a span from two endpoints in either order.
    pub fn between(a: (usize, usize), b: (usize, usize)) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// First selected position.
    pub const fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Position just past the selection.
    pub const fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Whether the span selects nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The selected column range on one line, clamped to `line_len` chars.
    ///
    /// Returns `None` for lines outside the span. Lines strictly between
    /// the endpoints are selected in full.
    pub fn columns_on_line(&self, line: usize, line_len: usize) -> Option<Range<usize>> {
        if line < self.start.0 || line > self.end.0 {
            return None;
        }
        let from = if line == self.start.0 { self.start.1 } else { 0 };
        let to = if line == self.end.0 { self.end.1 } else { line_len };
        let from = from.min(line_len);
        let to = to.min(line_len);
        if from > to {
            return None;
        }
        Some(from..to)
    }

    /// The selected text, lines joined with `\n`.
    pub fn extract(&self, lines: &[String]) -> String {
        let mut parts = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(columns) = self.columns_on_line(index, char_len(line)) {
                let from = byte_at(line, columns.start);
                let to = byte_at(line, columns.end);
                parts.push(&line[from..to]);
            }
        }
        parts.join("\n")
    }
}
