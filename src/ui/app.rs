//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use tui_textarea::TextArea;

use crate::sandbox::{ExampleKind, Session};
use crate::theme::ThemeManager;
use crate::ui::panes::controls::ControlsData;

/// How often the loop wakes to advance animations (roughly 30 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Output,
    Stage,
    Controls,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: editor -> stage -> controls -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Stage,
            FocusedPane::Stage => FocusedPane::Controls,
            FocusedPane::Controls => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Editor,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Output,
            FocusedPane::Stage => FocusedPane::Editor,
            FocusedPane::Controls => FocusedPane::Stage,
            FocusedPane::Output => FocusedPane::Controls,
        }
    }
}

/// Where keystrokes currently go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keys go to the code buffer
    EditCode,
    /// Keys go to the hex color field
    EditColor,
}

/// The main application state
pub struct App {
    /// Theme layer: active theme, custom color, override map
    pub theme: ThemeManager,

    /// Sandbox session: the single current-example slot
    pub session: Session,

    /// The editable demo-manifest buffer
    pub editor: TextArea<'static>,

    /// Committed color-field value (seeded from stored preferences)
    pub color_input: String,

    /// In-progress color-field value while in [`InputMode::EditColor`]
    pub color_draft: String,

    pub mode: InputMode,
    pub focused_pane: FocusedPane,

    /// Selection cursor in the example list
    pub example_cursor: usize,

    /// The example whose snippet currently sits in the buffer
    pub loaded_example: Option<ExampleKind>,

    /// Interior of the stage pane from the last render, for mapping
    /// mouse coordinates into stage cells
    stage_inner: Rect,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Footer year, captured once at startup
    year: i32,
}

impl App {
    /// Create a new app. The color field is seeded from the stored
    /// custom color so the UI matches persisted state immediately.
    pub fn new(theme: ThemeManager, session: Session) -> Self {
        let color_input = theme.custom_bg().unwrap_or_default().to_string();
        let mut editor = TextArea::default();
        editor.set_placeholder_text("# type a demo manifest here");
        App {
            theme,
            session,
            editor,
            color_input,
            color_draft: String::new(),
            mode: InputMode::Normal,
            focused_pane: FocusedPane::Editor,
            example_cursor: 0,
            loaded_example: None,
            stage_inner: Rect::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            year: chrono::Local::now().year(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Advance the running demo one frame per loop iteration
            self.session.tick(Instant::now());

            if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let palette = self.theme.resolved();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(pane_area);

        // Left column: Editor (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Stage (top) | Controls (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        // Remember the stage interior so mouse events and the session
        // share one coordinate space
        let stage_area = right_rows[0];
        self.stage_inner = Rect {
            x: stage_area.x + 1,
            y: stage_area.y + 1,
            width: stage_area.width.saturating_sub(2),
            height: stage_area.height.saturating_sub(2),
        };
        self.session
            .set_stage_size(self.stage_inner.width as f32, self.stage_inner.height as f32);

        super::panes::render_editor_pane(
            frame,
            left_rows[0],
            &mut self.editor,
            &palette,
            self.focused_pane == FocusedPane::Editor,
            self.mode == InputMode::EditCode,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            self.session.output(),
            &palette,
            self.focused_pane == FocusedPane::Output,
        );

        super::panes::render_stage_pane(
            frame,
            stage_area,
            &self.session,
            &palette,
            self.focused_pane == FocusedPane::Stage,
        );

        let color_field = if self.mode == InputMode::EditColor {
            &self.color_draft
        } else {
            &self.color_input
        };
        super::panes::render_controls_pane(
            frame,
            right_rows[1],
            &ControlsData {
                active_theme: self.theme.active(),
                custom_bg: self.theme.custom_bg(),
                color_field,
                is_color_editing: self.mode == InputMode::EditColor,
                example_cursor: self.example_cursor,
                loaded_example: self.loaded_example,
            },
            &palette,
            self.focused_pane == FocusedPane::Controls,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.state(),
            &palette,
            self.year,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::EditCode => match key.code {
                KeyCode::Esc => {
                    self.mode = InputMode::Normal;
                    self.status_message = String::from("Left edit mode");
                }
                _ => {
                    self.editor.input(key);
                }
            },
            InputMode::EditColor => self.handle_color_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Char('t') => {
                self.theme.toggle();
                if self.theme.custom_bg().is_none() {
                    self.color_input.clear();
                }
                self.status_message = format!("Theme: {}", self.theme.active().as_str());
            }
            KeyCode::Char('c') => {
                self.color_draft = if self.color_input.is_empty() {
                    String::from("#")
                } else {
                    self.color_input.clone()
                };
                self.mode = InputMode::EditColor;
                self.status_message = String::from("Pick a color (#rrggbb)");
            }
            KeyCode::Char('e') | KeyCode::Char('i') => {
                self.mode = InputMode::EditCode;
                self.status_message = String::from("Editing code");
            }
            KeyCode::Up => {
                self.example_cursor = self
                    .example_cursor
                    .checked_sub(1)
                    .unwrap_or(ExampleKind::ALL.len() - 1);
            }
            KeyCode::Down => {
                self.example_cursor = (self.example_cursor + 1) % ExampleKind::ALL.len();
            }
            KeyCode::Enter => {
                let kind = ExampleKind::ALL[self.example_cursor];
                let snippet = self.session.select(kind);
                self.editor = TextArea::from(snippet.lines().map(str::to_string));
                self.loaded_example = Some(kind);
                self.status_message = format!("Loaded {}", kind.label());
            }
            KeyCode::Char('r') => {
                let source = self.editor.lines().join("\n");
                self.session.run(&source, Instant::now());
                self.status_message = if self.session.is_running() {
                    String::from("Running")
                } else {
                    String::from("Run failed (see output)")
                };
            }
            KeyCode::Char('x') => {
                self.session.reset();
                self.editor = TextArea::default();
                self.editor.set_placeholder_text("# type a demo manifest here");
                self.loaded_example = None;
                self.status_message = String::from("Sandbox reset");
            }
            _ => {}
        }
    }

    /// Keys for the hex color field: `#` and hex digits only, capped at
    /// `#rrggbb` length. Enter commits, Esc cancels.
    fn handle_color_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = InputMode::Normal;
                self.status_message = String::from("Color unchanged");
            }
            KeyCode::Enter => {
                self.color_input = self.color_draft.clone();
                self.theme.set_custom_color(self.color_draft.clone());
                self.mode = InputMode::Normal;
                self.status_message = format!("Custom color {}", self.color_input);
            }
            KeyCode::Backspace => {
                self.color_draft.pop();
            }
            KeyCode::Char(c) if c == '#' && self.color_draft.is_empty() => {
                self.color_draft.push(c);
            }
            KeyCode::Char(c) if c.is_ascii_hexdigit() && self.color_draft.len() < 7 => {
                self.color_draft.push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    /// Mouse movement inside the stage becomes the pointer target the
    /// follower demo chases.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            return;
        }
        let inner = self.stage_inner;
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        if mouse.column >= inner.x
            && mouse.column < inner.x + inner.width
            && mouse.row >= inner.y
            && mouse.row < inner.y + inner.height
        {
            self.session.pointer_moved(
                (mouse.column - inner.x) as f32,
                (mouse.row - inner.y) as f32,
            );
        }
    }
}
