// Integration tests for the sandbox session: lifecycle transitions,
// cleanup discipline, and the three built-in demo behaviors.

use std::time::{Duration, Instant};

use ratatui::style::Color;

use tinkerbox::sandbox::{ExampleKind, Session, SessionState};

fn session_on_stage(width: f32, height: f32) -> Session {
    let mut session = Session::new();
    session.set_stage_size(width, height);
    session
}

#[test]
fn test_new_session_is_idle_and_empty() {
    let session = Session::new();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_running());
    assert!(session.markers().is_empty());
    assert_eq!(session.output(), "");
}

#[test]
fn test_select_loads_snippet_without_running() {
    let mut session = session_on_stage(40.0, 20.0);
    let snippet = session.select(ExampleKind::Bouncer);
    assert!(snippet.contains("kind = \"bouncer\""));
    assert_eq!(session.state(), SessionState::Loaded);
    assert!(!session.is_running(), "select must not auto-run");
}

#[test]
fn test_run_follower_places_marker_and_eases_toward_pointer() {
    let mut session = session_on_stage(40.0, 20.0);
    let t0 = Instant::now();
    session.run(ExampleKind::Follower.snippet(), t0);

    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.output(), "Ran successfully.");
    let markers = session.markers();
    assert_eq!(markers.len(), 1);
    // Starts at stage center
    assert!((markers[0].x - 20.0).abs() < 1e-4);
    assert!((markers[0].y - 10.0).abs() < 1e-4);
    assert_eq!(markers[0].color, Color::Rgb(0, 255, 136));

    // One frame covers 0.12 of the remaining distance to the pointer
    session.pointer_moved(10.0, 10.0);
    session.tick(t0 + Duration::from_millis(33));
    let markers = session.markers();
    assert!((markers[0].x - 18.8).abs() < 1e-3, "got x={}", markers[0].x);
    assert!((markers[0].y - 10.0).abs() < 1e-3);
}

#[test]
fn test_select_while_running_cleans_up_previous_example() {
    let mut session = session_on_stage(40.0, 20.0);
    session.run(ExampleKind::Bouncer.snippet(), Instant::now());
    assert_eq!(session.markers().len(), 1);

    let snippet = session.select(ExampleKind::Counter);
    assert!(snippet.contains("counter"));
    assert_eq!(session.state(), SessionState::Loaded);
    assert!(!session.is_running(), "previous demo must be stopped");
    assert!(session.markers().is_empty(), "previous marker must be removed");
    assert_eq!(session.output(), "", "output cleared on select");
}

#[test]
fn test_run_replaces_running_example() {
    let mut session = session_on_stage(40.0, 20.0);
    let now = Instant::now();
    session.run(ExampleKind::Follower.snippet(), now);
    session.run(ExampleKind::Bouncer.snippet(), now);

    // Only the bouncer's effects are live
    assert_eq!(session.markers().len(), 1);
    assert_eq!(session.markers()[0].color, Color::Rgb(255, 0, 102));
    assert_eq!(
        session.running().map(|r| r.kind()),
        Some(ExampleKind::Bouncer)
    );
}

#[test]
fn test_reset_leaves_no_residual_effects() {
    let mut session = session_on_stage(40.0, 20.0);
    let t0 = Instant::now();
    session.run(ExampleKind::Counter.snippet(), t0);
    assert!(session.is_running());

    session.reset();
    assert_eq!(session.state(), SessionState::Idle);
    assert!(!session.is_running());
    assert!(session.markers().is_empty());
    assert_eq!(session.output(), "Sandbox reset.");

    // No pending timer fires: ticking after reset does nothing
    session.tick(t0 + Duration::from_secs(10));
    assert!(session.running().is_none());
}

#[test]
fn test_counter_ticks_on_its_interval() {
    let mut session = session_on_stage(40.0, 20.0);
    let t0 = Instant::now();
    session.run(ExampleKind::Counter.snippet(), t0);

    let count = |s: &Session| s.running().and_then(|r| r.counter_value());

    session.tick(t0 + Duration::from_millis(999));
    assert_eq!(count(&session), Some(0), "no tick before the interval");

    session.tick(t0 + Duration::from_millis(1000));
    assert_eq!(count(&session), Some(1));

    // Catches up over a long gap
    session.tick(t0 + Duration::from_millis(3500));
    assert_eq!(count(&session), Some(3));

    // Counter draws nothing on the stage
    assert!(session.markers().is_empty());
}

#[test]
fn test_counter_interval_is_tunable_from_the_manifest() {
    let mut session = session_on_stage(40.0, 20.0);
    let t0 = Instant::now();
    session.run("kind = \"counter\"\ninterval_ms = 100\n", t0);
    session.tick(t0 + Duration::from_millis(550));
    let count = session.running().and_then(|r| r.counter_value());
    assert_eq!(count, Some(5));
}

#[test]
fn test_bouncer_inverts_velocity_at_stage_bounds() {
    let mut session = session_on_stage(10.0, 6.0);
    let t0 = Instant::now();
    // Large horizontal velocity so the first frames hit both walls
    session.run("kind = \"bouncer\"\nvx = 20.0\nvy = 0.0\n", t0);
    assert!((session.markers()[0].x - 4.0).abs() < 1e-4);

    session.tick(t0 + Duration::from_millis(33));
    assert!((session.markers()[0].x - 9.0).abs() < 1e-4, "clamped to right edge");

    session.tick(t0 + Duration::from_millis(66));
    assert!(session.markers()[0].x.abs() < 1e-4, "bounced back to left edge");

    session.tick(t0 + Duration::from_millis(99));
    assert!((session.markers()[0].x - 9.0).abs() < 1e-4, "bounced right again");

    // vy = 0 keeps the vertical position fixed
    assert!((session.markers()[0].y - 2.0).abs() < 1e-4);
}

#[test]
fn test_run_failure_is_contained_and_reported() {
    let mut session = session_on_stage(40.0, 20.0);
    let now = Instant::now();

    session.run("kind = \"teleporter\"", now);
    assert!(session.output().starts_with("Error:"), "got {:?}", session.output());
    assert_eq!(session.state(), SessionState::Loaded);
    assert!(!session.is_running());

    // A failure must never prevent the next interaction
    session.run(ExampleKind::Follower.snippet(), now);
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.output(), "Ran successfully.");
}

#[test]
fn test_running_malformed_source_after_a_demo_still_cleans_up() {
    let mut session = session_on_stage(40.0, 20.0);
    let now = Instant::now();
    session.run(ExampleKind::Bouncer.snippet(), now);
    assert_eq!(session.markers().len(), 1);

    // Cleanup runs before the new source is evaluated, so the old
    // marker is gone even though the run failed
    session.run("not a manifest", now);
    assert!(session.markers().is_empty());
    assert!(!session.is_running());
    assert!(session.output().starts_with("Error:"));
}

#[test]
fn test_zero_interval_counter_is_rejected_before_it_can_spin() {
    let mut session = session_on_stage(40.0, 20.0);
    let t0 = Instant::now();
    session.run("kind = \"counter\"\ninterval_ms = 0\n", t0);

    assert!(session.output().starts_with("Error:"), "got {:?}", session.output());
    assert!(!session.is_running());

    // Ticking afterwards returns immediately; there is no schedule
    session.tick(t0 + Duration::from_secs(5));
    assert!(session.running().is_none());
}

#[test]
fn test_empty_buffer_run_reports_an_error() {
    let mut session = session_on_stage(40.0, 20.0);
    session.run("", Instant::now());
    assert!(session.output().starts_with("Error:"));
    assert!(!session.is_running());
}
