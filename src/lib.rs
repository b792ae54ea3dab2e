//! # Introduction
//!
//! Tinkerbox is a small terminal playground: a contrast-aware theme
//! manager wired to a sandbox that runs one animated demo at a time,
//! rendered with [ratatui](https://docs.rs/ratatui).
//!
//! ## How a frame comes together
//!
//! ```text
//! Prefs → ThemeManager → resolved Palette ┐
//!                                         ├→ panes → terminal
//! Session → markers / output / state      ┘
//! ```
//!
//! 1. [`prefs`] — the persisted preference file: active theme name and
//!    an optional custom background color.
//! 2. [`theme`] — named palettes, luminance-derived contrast palettes,
//!    and the [`theme::ThemeManager`] that layers custom-color
//!    overrides on top of a named theme.
//! 3. [`sandbox`] — the [`sandbox::Session`] state machine owning the
//!    single running demo and its cleanup, plus the three built-in
//!    example behaviors (follower, counter, bouncer).
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Demo manifests
//!
//! The editor buffer holds a tiny TOML manifest (`kind = "bouncer"`,
//! optional tunables). Running deserializes it into a
//! [`sandbox::ExampleSpec`] and starts the matching behavior; the
//! previous demo's cleanup always runs first.

pub mod prefs;
pub mod sandbox;
pub mod theme;
pub mod ui;
