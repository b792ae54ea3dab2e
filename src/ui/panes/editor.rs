//! Demo-manifest editor pane

use ratatui::{layout::Rect, style::Style, widgets::Block, widgets::Borders, Frame};
use tui_textarea::TextArea;

use super::border_style;
use crate::theme::Palette;

/// Render the editable code buffer.
///
/// `is_editing` switches the cursor on; outside edit mode the buffer is
/// display-only and the cursor is hidden.
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    editor: &mut TextArea<'_>,
    palette: &Palette,
    is_focused: bool,
    is_editing: bool,
) {
    let title = if is_editing {
        " Code (editing, Esc to leave) "
    } else {
        " Code "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_focused));

    editor.set_block(block);
    editor.set_style(Style::default().fg(palette.code_text).bg(palette.code_bg));
    editor.set_line_number_style(Style::default().fg(palette.button_hover_bg));
    if is_editing {
        editor.set_cursor_style(Style::default().bg(palette.code_text).fg(palette.code_bg));
        editor.set_cursor_line_style(Style::default());
    } else {
        // Invisible cursor while browsing
        editor.set_cursor_style(Style::default().bg(palette.code_bg));
        editor.set_cursor_line_style(Style::default());
    }

    frame.render_widget(&*editor, area);
}
