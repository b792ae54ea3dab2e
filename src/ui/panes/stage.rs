//! Stage pane rendering
//!
//! The stage is the region demo markers animate across. Markers live in
//! fractional cell coordinates relative to the stage interior and are
//! drawn directly into the frame buffer.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::border_style;
use crate::sandbox::Session;
use crate::theme::Palette;

const MARKER_GLYPH: &str = "●";

/// Render the stage and whatever markers the session reports.
pub fn render_stage_pane(
    frame: &mut Frame,
    area: Rect,
    session: &Session,
    palette: &Palette,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Stage ")
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_focused));
    let inner = block.inner(area);

    // Background wash plus a hint while nothing runs
    let backdrop = if session.is_running() {
        Paragraph::new("")
            .block(block)
            .style(Style::default().bg(palette.bg).fg(palette.text))
    } else {
        Paragraph::new("(select an example and press r)")
            .block(block)
            .style(Style::default().bg(palette.bg).fg(palette.button_hover_bg))
    };
    frame.render_widget(backdrop, area);

    // The counter demo has no marker; show its tick count instead
    if let Some(count) = session.running().and_then(|r| r.counter_value()) {
        if inner.height > 0 {
            let line = format!("counter: {}", count);
            let paragraph =
                Paragraph::new(line).style(Style::default().fg(palette.text).bg(palette.bg));
            frame.render_widget(paragraph, inner);
        }
    }

    let buf = frame.buffer_mut();
    for marker in session.markers() {
        let x = inner.x + (marker.x.round().max(0.0) as u16).min(inner.width.saturating_sub(1));
        let y = inner.y + (marker.y.round().max(0.0) as u16).min(inner.height.saturating_sub(1));
        if inner.width > 0 && inner.height > 0 {
            buf.set_string(
                x,
                y,
                MARKER_GLYPH,
                Style::default().fg(marker.color).bg(palette.bg),
            );
        }
    }
}
