// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditOp)
    clippy::module_name_repetitions
)]

//! # Linebox
//!
//! A caret-driven plain-text editor for the terminal.
//!
//! Linebox keeps a document as a list of lines and moves a caret through
//! it with word, line, and page motions, a sticky preferred column, and
//! anchor-based selection. A viewport follows the caret automatically.
//!
//! ## Architecture
//!
//! Linebox uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`editor`]: Line buffer, caret, and selection
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved flag defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Caret, CaretOptions, EditOp, LineBuffer, NavOp, SelectOp};
}
