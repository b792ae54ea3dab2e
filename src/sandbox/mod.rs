//! Demo sandbox: a state machine over a single "current example" slot.
//!
//! [`Session`] owns at most one [`RunningExample`] at a time. Every
//! transition that could start new side effects (selecting an example,
//! running the buffer) first invokes the active cleanup, so timers and
//! markers from a previous demo can never leak into the next one.
//!
//! The session is UI-agnostic: the event loop feeds it wall-clock
//! instants, stage dimensions, and pointer positions, and renders
//! whatever [`Session::markers`] reports.

pub mod examples;

pub use examples::{ExampleKind, ExampleSpec, Marker, RunningExample};

use std::time::Instant;

/// Where the current-example slot is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded, no cleanup registered.
    Idle,
    /// Example source sits in the buffer but has not been run.
    Loaded,
    /// A demo's side effects are live; its cleanup is registered.
    Running,
}

/// The sandbox session.
pub struct Session {
    state: SessionState,
    output: String,
    running: Option<RunningExample>,
    pointer: Option<(f32, f32)>,
    stage: (f32, f32),
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: SessionState::Idle,
            output: String::new(),
            running: None,
            pointer: None,
            // Placeholder until the first render reports real bounds
            stage: (80.0, 24.0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Message for the output region (success, error, or reset note).
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn running(&self) -> Option<&RunningExample> {
        self.running.as_ref()
    }

    /// Live markers to draw on the stage. Empty when nothing runs.
    pub fn markers(&self) -> &[Marker] {
        self.running.as_ref().map(|r| r.markers()).unwrap_or(&[])
    }

    /// Record the last observed pointer position, in stage cells.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Some((x, y));
    }

    /// Record the drawable stage size, in cells.
    pub fn set_stage_size(&mut self, width: f32, height: f32) {
        self.stage = (width.max(1.0), height.max(1.0));
    }

    /// Select an example: clean up whatever runs, clear the output, and
    /// hand back the snippet text for the editor. Does not run it.
    pub fn select(&mut self, kind: ExampleKind) -> &'static str {
        self.cleanup();
        self.output.clear();
        self.state = SessionState::Loaded;
        kind.snippet()
    }

    /// Run the buffer: clean up the previous demo, then parse and start
    /// the new one. A failure is contained — it lands in the output
    /// region and the log, and the next interaction still works.
    pub fn run(&mut self, source: &str, now: Instant) {
        self.cleanup();
        self.output.clear();
        match ExampleSpec::parse(source) {
            Ok(spec) => {
                self.running = Some(RunningExample::start(&spec, now, self.stage, self.pointer));
                self.state = SessionState::Running;
                self.output.push_str("Ran successfully.");
            }
            Err(e) => {
                self.output = format!("Error: {e}");
                tracing::error!("sandbox run failed: {e:#}");
                self.state = SessionState::Loaded;
            }
        }
    }

    /// Reset the sandbox: clean up and return to the idle state. The
    /// caller clears the buffer and the example selector.
    pub fn reset(&mut self) {
        self.cleanup();
        self.output = String::from("Sandbox reset.");
        self.state = SessionState::Idle;
    }

    /// Advance the running demo by one frame. No-op when idle.
    pub fn tick(&mut self, now: Instant) {
        if let Some(running) = self.running.as_mut() {
            running.tick(now, self.stage, self.pointer);
        }
    }

    /// Invoke the registered cleanup, if any. Idempotent; an error from
    /// the cleanup itself is logged and discarded so it can never block
    /// the next transition.
    fn cleanup(&mut self) {
        if let Some(mut running) = self.running.take() {
            if let Err(e) = running.stop() {
                tracing::debug!("cleanup error ignored: {e:#}");
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
