//! The built-in example behaviors.
//!
//! Each example is one variant of a closed set with a start/tick/stop
//! contract. A demo is described by a tiny TOML manifest (the editable
//! buffer's contents); running it deserializes the manifest into an
//! [`ExampleSpec`] and starts the matching behavior.

use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use ratatui::style::Color;
use serde::Deserialize;

/// Which of the three built-in demos a manifest names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleKind {
    Follower,
    Counter,
    Bouncer,
}

impl ExampleKind {
    pub const ALL: [ExampleKind; 3] = [
        ExampleKind::Follower,
        ExampleKind::Counter,
        ExampleKind::Bouncer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExampleKind::Follower => "Follower",
            ExampleKind::Counter => "Counter",
            ExampleKind::Bouncer => "Bouncer",
        }
    }

    /// The manifest text loaded into the editor when this example is
    /// selected. Editable before running.
    pub fn snippet(self) -> &'static str {
        match self {
            ExampleKind::Follower => {
                "# Marker that chases the pointer with easing\n\
                 kind = \"follower\"\n\
                 ease = 0.12\n"
            }
            ExampleKind::Counter => {
                "# Emits an incrementing count to the log\n\
                 kind = \"counter\"\n\
                 interval_ms = 1000\n"
            }
            ExampleKind::Bouncer => {
                "# Marker that bounces off the stage edges\n\
                 kind = \"bouncer\"\n\
                 vx = 1.2\n\
                 vy = 0.5\n"
            }
        }
    }
}

fn default_ease() -> f32 {
    0.12
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_vx() -> f32 {
    1.2
}

fn default_vy() -> f32 {
    0.5
}

/// A parsed demo manifest. Tunables default to each example's fixed
/// contract values when the manifest omits them.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExampleSpec {
    pub kind: ExampleKind,
    /// Follower: fraction of the remaining distance covered per frame.
    #[serde(default = "default_ease")]
    pub ease: f32,
    /// Counter: milliseconds between ticks.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Bouncer: velocity in stage cells per frame.
    #[serde(default = "default_vx")]
    pub vx: f32,
    #[serde(default = "default_vy")]
    pub vy: f32,
}

impl ExampleSpec {
    pub fn parse(source: &str) -> Result<ExampleSpec> {
        if source.trim().is_empty() {
            bail!("nothing to run: the buffer is empty");
        }
        let spec: ExampleSpec = toml::from_str(source).context("not a valid demo manifest")?;
        // A zero interval would make the counter's catch-up loop spin forever
        if spec.interval_ms == 0 {
            bail!("interval_ms must be at least 1");
        }
        Ok(spec)
    }
}

/// A visual marker on the stage, in fractional stage-cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

const FOLLOWER_COLOR: Color = Color::Rgb(0, 255, 136);
const BOUNCER_COLOR: Color = Color::Rgb(255, 0, 102);

/// Bouncer start offset from the stage origin.
const BOUNCER_START: (f32, f32) = (4.0, 2.0);

#[derive(Debug)]
enum Behavior {
    Follower {
        ease: f32,
        pos: (f32, f32),
        target: (f32, f32),
    },
    Counter {
        interval: Duration,
        next_due: Instant,
        count: u64,
    },
    Bouncer {
        vx: f32,
        vy: f32,
        pos: (f32, f32),
    },
}

/// A live example: the single owner of its timers and markers.
///
/// Stopping is idempotent and reverses every observable side effect:
/// markers disappear from the stage and no further ticks fire.
#[derive(Debug)]
pub struct RunningExample {
    kind: ExampleKind,
    behavior: Behavior,
    markers: Vec<Marker>,
}

impl RunningExample {
    /// Start the behavior a spec describes. `stage` is the drawable
    /// region in cells; `pointer` the last observed pointer position.
    pub(crate) fn start(
        spec: &ExampleSpec,
        now: Instant,
        stage: (f32, f32),
        pointer: Option<(f32, f32)>,
    ) -> Self {
        let center = (stage.0 / 2.0, stage.1 / 2.0);
        let (behavior, markers) = match spec.kind {
            ExampleKind::Follower => (
                Behavior::Follower {
                    ease: spec.ease,
                    pos: center,
                    target: pointer.unwrap_or(center),
                },
                vec![Marker {
                    x: center.0,
                    y: center.1,
                    color: FOLLOWER_COLOR,
                }],
            ),
            ExampleKind::Counter => (
                Behavior::Counter {
                    interval: Duration::from_millis(spec.interval_ms),
                    next_due: now + Duration::from_millis(spec.interval_ms),
                    count: 0,
                },
                Vec::new(),
            ),
            ExampleKind::Bouncer => (
                Behavior::Bouncer {
                    vx: spec.vx,
                    vy: spec.vy,
                    pos: BOUNCER_START,
                },
                vec![Marker {
                    x: BOUNCER_START.0,
                    y: BOUNCER_START.1,
                    color: BOUNCER_COLOR,
                }],
            ),
        };
        RunningExample {
            kind: spec.kind,
            behavior,
            markers,
        }
    }

    pub fn kind(&self) -> ExampleKind {
        self.kind
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Current counter value, when the counter demo is running.
    pub fn counter_value(&self) -> Option<u64> {
        match self.behavior {
            Behavior::Counter { count, .. } => Some(count),
            _ => None,
        }
    }

    /// Advance one frame. `stage` is the current drawable size in
    /// cells; `pointer` the last observed pointer position, if any.
    pub fn tick(&mut self, now: Instant, stage: (f32, f32), pointer: Option<(f32, f32)>) {
        match &mut self.behavior {
            Behavior::Follower { ease, pos, target } => {
                if let Some(p) = pointer {
                    *target = p;
                }
                // Exponential easing: cover a fixed fraction of the
                // remaining distance each frame
                pos.0 += (target.0 - pos.0) * *ease;
                pos.1 += (target.1 - pos.1) * *ease;
                if let Some(marker) = self.markers.first_mut() {
                    marker.x = pos.0;
                    marker.y = pos.1;
                }
            }
            Behavior::Counter {
                interval,
                next_due,
                count,
            } => {
                while now >= *next_due {
                    *count += 1;
                    tracing::info!("counter: {}", count);
                    *next_due += *interval;
                }
            }
            Behavior::Bouncer { vx, vy, pos } => {
                let max_x = (stage.0 - 1.0).max(0.0);
                let max_y = (stage.1 - 1.0).max(0.0);
                if pos.0 <= 0.0 || pos.0 >= max_x {
                    *vx = -*vx;
                }
                if pos.1 <= 0.0 || pos.1 >= max_y {
                    *vy = -*vy;
                }
                pos.0 = (pos.0 + *vx).clamp(0.0, max_x);
                pos.1 = (pos.1 + *vy).clamp(0.0, max_y);
                if let Some(marker) = self.markers.first_mut() {
                    marker.x = pos.0;
                    marker.y = pos.1;
                }
            }
        }
    }

    /// Reverse this example's side effects. Safe to call repeatedly.
    pub fn stop(&mut self) -> Result<()> {
        if let Behavior::Counter { count, .. } = self.behavior {
            tracing::debug!("counter stopped at {}", count);
        }
        self.markers.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_kind_with_defaults() {
        let spec = ExampleSpec::parse("kind = \"counter\"").expect("parse failed");
        assert_eq!(spec.kind, ExampleKind::Counter);
        assert_eq!(spec.interval_ms, 1000);
    }

    #[test]
    fn builtin_snippets_all_parse() {
        for kind in ExampleKind::ALL {
            let spec = ExampleSpec::parse(kind.snippet()).expect("snippet should parse");
            assert_eq!(spec.kind, kind);
        }
    }

    #[test]
    fn follower_snippet_keeps_spec_ease() {
        let spec = ExampleSpec::parse(ExampleKind::Follower.snippet()).expect("parse failed");
        assert!((spec.ease - 0.12).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_empty_and_malformed_sources() {
        assert!(ExampleSpec::parse("").is_err());
        assert!(ExampleSpec::parse("   \n\t").is_err());
        assert!(ExampleSpec::parse("kind = \"teleporter\"").is_err());
        assert!(ExampleSpec::parse("this is not toml").is_err());
    }

    #[test]
    fn rejects_zero_interval() {
        let err = ExampleSpec::parse("kind = \"counter\"\ninterval_ms = 0\n")
            .expect_err("zero interval must be rejected");
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn tick_after_stop_is_a_no_op() {
        let spec = ExampleSpec::parse(ExampleKind::Bouncer.snippet()).expect("parse failed");
        let now = Instant::now();
        let mut running = RunningExample::start(&spec, now, (10.0, 6.0), None);
        running.stop().expect("stop failed");
        assert!(running.markers().is_empty());

        // Must not panic or resurrect a marker
        running.tick(now + Duration::from_millis(33), (10.0, 6.0), None);
        assert!(running.markers().is_empty());
    }
}
