//! The editing core: a caret with viewport tracking and a line-oriented
//! text buffer with navigation, selection, and mutation operations.
//!
//! [`LineBuffer`] owns the line store and exactly one [`Caret`]; the UI
//! layers drive it through the closed [`NavOp`]/[`SelectOp`]/[`EditOp`]
//! operation sets and read the caret's page to decide what to draw.

mod buffer;
mod caret;
mod selection;

pub(crate) use buffer::{byte_at, char_len};

pub use buffer::{BufferError, EditOp, LineBuffer, NavOp, SelectOp};
pub use caret::{Caret, CaretOptions};
pub use selection::SelectionSpan;
