//! End-of-line indicator.

use crate::animation::{AnimationTarget, PulseAnimation, SpringConfig};
use glam::DVec2;
use linegraph_core::Timestamp;
use linegraph_geometry::{CoordinateMapper, PathCommand, y_for_x};
use std::time::{Duration, Instant};

pub const INDICATOR_RADIUS: f64 = 7.0;
pub const INDICATOR_BORDER_MULTIPLIER: f64 = 1.3;
pub const INDICATOR_PULSE_RADIUS_SMALL: f64 = INDICATOR_RADIUS * INDICATOR_BORDER_MULTIPLIER;
pub const INDICATOR_PULSE_RADIUS_BIG: f64 = INDICATOR_PULSE_RADIUS_SMALL + 20.0;

/// Horizontal padding used when none is configured. Leaves room for the
/// indicator border at the right edge.
pub fn default_horizontal_padding(indicator_enabled: bool) -> f64 {
    if indicator_enabled {
        (INDICATOR_RADIUS * INDICATOR_BORDER_MULTIPLIER).ceil()
    } else {
        0.0
    }
}

/// Width of the drawn line: the x-offset of the last in-range point, or the
/// whole drawing width without points.
pub fn line_width(mapper: &CoordinateMapper, last_date: Option<Timestamp>) -> f64 {
    match last_date {
        Some(date) => mapper.x_offset(date).max(0.0),
        None => mapper.rect().drawing_width(),
    }
}

/// Where the indicator sits on `commands`, `line_width` px right of the
/// drawing rect's `left` edge.
///
/// The y-coordinate is 0 when the path has no value at the indicator's x.
pub fn indicator_position(commands: &[PathCommand], line_width: f64, left: f64) -> DVec2 {
    let x = line_width.floor() + left;
    DVec2::new(x, y_for_x(commands, x).unwrap_or(0.0))
}

/// Radius the indicator should spring to.
pub fn indicator_radius_target(active: bool) -> AnimationTarget {
    let radius = if active { 0.0 } else { INDICATOR_RADIUS };
    AnimationTarget::spring(radius, SpringConfig::INDICATOR)
}

/// Pulse radius and opacity for a pulse value in `[0, 1]`.
pub fn pulse_visuals(pulse: f64) -> (f64, f64) {
    let pulse = pulse.clamp(0.0, 1.0);
    let radius = INDICATOR_PULSE_RADIUS_SMALL
        + (INDICATOR_PULSE_RADIUS_BIG - INDICATOR_PULSE_RADIUS_SMALL) * pulse;
    (radius, 1.0 - pulse)
}

/// Start and stop bookkeeping for the repeating pulse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pulse {
    started_at: Option<Instant>,
}

impl Pulse {
    pub fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    /// Stop and reset to 0.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Current pulse value, 0 while stopped.
    pub fn value(&self, now: Instant) -> f64 {
        self.started_at.map_or(0.0, |start| {
            PulseAnimation.value_at(now.saturating_duration_since(start))
        })
    }

    /// Time since the pulse started.
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.started_at.map(|start| now.saturating_duration_since(start))
    }
}

/// Indicator visuals for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorFrame {
    pub visible: bool,
    /// Draw the pulse circle.
    pub pulsating: bool,
    pub position: DVec2,
    /// Radius to animate towards.
    pub radius_target: f64,
    /// Border radius for the current radius target.
    pub border_radius: f64,
    pub pulse_radius: f64,
    pub pulse_opacity: f64,
}
