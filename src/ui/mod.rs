//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into two layers:
//!
//! - **[`app`]** — application state, keyboard/mouse event loop, input modes,
//!   pane focus, frame ticking for the running demo
//! - **[`panes`]** — stateless render functions for each visible pane (editor,
//!   output, stage, controls, status bar)
//!
//! Colors come from the resolved [`Palette`] produced by the theme layer, so
//! every pane restyles live when the theme or custom color changes.
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`ThemeManager`] and a [`Session`] and call [`App::run`] to start the
//! event loop.
//!
//! [`Palette`]: crate::theme::Palette
//! [`ThemeManager`]: crate::theme::ThemeManager
//! [`Session`]: crate::sandbox::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;

pub use app::App;
