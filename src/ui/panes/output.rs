//! Output pane rendering

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use super::border_style;
use crate::theme::Palette;

/// Render the output region: the last run/reset/error message.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    palette: &Palette,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(palette.button_hover_bg).bg(palette.panel_bg));
        frame.render_widget(paragraph, area);
    } else {
        let style = if output.starts_with("Error") {
            Style::default()
                .fg(palette.text)
                .bg(palette.panel_bg)
                .add_modifier(ratatui::style::Modifier::BOLD)
        } else {
            Style::default().fg(palette.text).bg(palette.panel_bg)
        };
        let paragraph = Paragraph::new(output)
            .block(block)
            .style(style)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
