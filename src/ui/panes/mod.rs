//! TUI pane rendering modules
//!
//! Each module exports a stateless `render_*` function that draws one
//! pane from the data it is handed:
//!
//! - [`editor`]: the editable demo-manifest buffer
//! - [`output`]: run/reset/error messages
//! - [`stage`]: the region the demo markers animate across
//! - [`controls`]: example selector, theme state, custom color field
//! - [`status`]: status bar with keybindings, session state, and footer year
//!
//! All panes draw with the resolved theme palette, so a theme toggle or
//! custom-color change restyles the whole UI on the next frame.

pub mod controls;
pub mod editor;
pub mod output;
pub mod stage;
pub mod status;

pub use controls::render_controls_pane;
pub use editor::render_editor_pane;
pub use output::render_output_pane;
pub use stage::render_stage_pane;
pub use status::render_status_bar;

use ratatui::style::{Modifier, Style};

use crate::theme::Palette;

/// Border style shared by all panes: the code accent when focused, a
/// muted tone otherwise.
pub(crate) fn border_style(palette: &Palette, is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(palette.code_text)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.button_hover_bg)
    }
}
