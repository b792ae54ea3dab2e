//! Controls pane rendering: example selector, theme state, color field

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::border_style;
use crate::sandbox::ExampleKind;
use crate::theme::{parse_hex_color, Palette, ThemeName};

/// Everything the controls pane needs from the app.
pub struct ControlsData<'a> {
    pub active_theme: ThemeName,
    pub custom_bg: Option<&'a str>,
    /// Value shown in the color field (the draft while editing).
    pub color_field: &'a str,
    pub is_color_editing: bool,
    pub example_cursor: usize,
    pub loaded_example: Option<ExampleKind>,
}

/// Render the example selector and the theme controls.
pub fn render_controls_pane(
    frame: &mut Frame,
    area: Rect,
    data: &ControlsData,
    palette: &Palette,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(border_style(palette, is_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let label_style = Style::default().fg(palette.text);
    let muted_style = Style::default().fg(palette.button_hover_bg);
    let button_style = Style::default().fg(palette.button_text).bg(palette.button_bg);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled("Examples", label_style))];

    for (i, kind) in ExampleKind::ALL.iter().enumerate() {
        let cursor = if i == data.example_cursor { "▶ " } else { "  " };
        let loaded = data.loaded_example == Some(*kind);
        let style = if loaded {
            button_style.add_modifier(Modifier::BOLD)
        } else if i == data.example_cursor {
            label_style
        } else {
            muted_style
        };
        let suffix = if loaded { "  [loaded]" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(cursor, label_style),
            Span::styled(format!("{}{}", kind.label(), suffix), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Theme: ", label_style),
        Span::styled(data.active_theme.as_str(), button_style),
        if data.custom_bg.is_some() {
            Span::styled("  (custom color override)", muted_style)
        } else {
            Span::raw("")
        },
    ]));

    // Color field with a live swatch, when the value parses
    let field = if data.color_field.is_empty() && !data.is_color_editing {
        "(none)".to_string()
    } else {
        data.color_field.to_string()
    };
    let mut color_spans = vec![
        Span::styled("Color: ", label_style),
        Span::styled(
            field,
            if data.is_color_editing {
                label_style.add_modifier(Modifier::UNDERLINED)
            } else {
                muted_style
            },
        ),
    ];
    if let Some(color) = parse_hex_color(data.color_field) {
        color_spans.push(Span::raw(" "));
        color_spans.push(Span::styled("    ", Style::default().bg(color)));
    }
    lines.push(Line::from(color_spans));

    if data.is_color_editing {
        lines.push(Line::from(Span::styled(
            "Enter apply · Esc cancel",
            muted_style,
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(palette.panel_bg));
    frame.render_widget(paragraph, area);
}
