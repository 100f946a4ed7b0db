//! Terminal UI: draws the buffer's visible page and a status bar.

mod render;
mod status;

pub use render::render;

/// Rows reserved below the text area.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// The (columns, lines) of the text area for a terminal of the given size.
///
/// This is what the caret's page size is kept in sync with.
pub const fn text_area_size(width: u16, height: u16) -> (u16, u16) {
    (width, height.saturating_sub(STATUS_BAR_HEIGHT))
}
