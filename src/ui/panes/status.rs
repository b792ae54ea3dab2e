//! Status bar rendering with keybindings and state indicators

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::sandbox::SessionState;
use crate::theme::Palette;

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    state: SessionState,
    palette: &Palette,
    year: i32,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar_bg = palette.panel_bg;
    let badge_style = Style::default()
        .bg(match state {
            SessionState::Idle => palette.button_hover_bg,
            SessionState::Loaded => palette.button_bg,
            SessionState::Running => palette.code_text,
        })
        .fg(palette.bg)
        .add_modifier(Modifier::BOLD);
    let state_text = match state {
        SessionState::Idle => " IDLE ",
        SessionState::Loaded => " LOADED ",
        SessionState::Running => " RUNNING ",
    };

    let left_spans = vec![
        Span::styled(state_text, badge_style),
        Span::styled(" | ", Style::default().bg(bar_bg).fg(palette.button_hover_bg)),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(bar_bg).fg(palette.text),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(bar_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(palette.button_bg).fg(palette.button_text);
    let desc_style = Style::default().bg(bar_bg).fg(palette.text);
    let sep_style = Style::default().bg(bar_bg).fg(palette.button_hover_bg);

    let right_spans = vec![
        Span::styled(" ↑/↓+↵ ", key_style),
        Span::styled(" example ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" r ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" x ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" t ", key_style),
        Span::styled(" theme ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" c ", key_style),
        Span::styled(" color ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" e ", key_style),
        Span::styled(" edit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(format!(" © {} ", year), desc_style),
    ];
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(bar_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
