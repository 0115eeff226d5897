//! Animation descriptors handed to the host's animation driver.
//!
//! The graph never integrates springs or advances timers itself. It decides
//! which value a property should move to and how ([`AnimationTarget`]); the
//! host runs the animation and feeds the resulting scalar back (for example
//! through [`LineGraph::set_progress`](crate::LineGraph::set_progress)).
//!
//! The one exception is [`PulseAnimation`], a fixed keyframe program that
//! can be evaluated directly from elapsed time.

use std::time::Duration;

/// Easing functions for timing animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Quadratic ease in
    QuadIn,
    /// Quadratic ease out
    QuadOut,
    /// Quadratic ease in-out
    #[default]
    QuadInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Cubic ease in-out
    CubicInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadIn => t * t,
            EasingFunction::QuadOut => t * (2.0 - t),
            EasingFunction::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::CubicInOut => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t * t
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * t + 2.0)
                }
            }
        }
    }
}

/// Physical spring parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Initial velocity.
    pub velocity: f64,
}

impl SpringConfig {
    /// Drives path transition progress from 0 to 1.
    pub const PATH_TRANSITION: SpringConfig = SpringConfig {
        mass: 1.0,
        stiffness: 500.0,
        damping: 400.0,
        velocity: 0.0,
    };

    /// Drives indicator and selection dot radii.
    pub const INDICATOR: SpringConfig = SpringConfig {
        mass: 1.0,
        stiffness: 1000.0,
        damping: 50.0,
        velocity: 0.0,
    };
}

/// How a value should move towards its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationSpec {
    Spring(SpringConfig),
    Timing {
        duration: Duration,
        easing: EasingFunction,
    },
}

impl AnimationSpec {
    /// Value of a timing animation from `from` to `to` after `elapsed`.
    ///
    /// Springs have no closed form here and report `to`.
    pub fn sample(&self, from: f64, to: f64, elapsed: Duration) -> f64 {
        match self {
            AnimationSpec::Spring(_) => to,
            AnimationSpec::Timing { duration, easing } => {
                if duration.is_zero() {
                    return to;
                }
                let t = elapsed.as_secs_f64() / duration.as_secs_f64();
                from + (to - from) * easing.apply(t)
            }
        }
    }
}

/// A value the host should animate to, and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    pub value: f64,
    pub spec: AnimationSpec,
}

impl AnimationTarget {
    pub fn spring(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            spec: AnimationSpec::Spring(config),
        }
    }

    pub fn timing(value: f64, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            value,
            spec: AnimationSpec::Timing { duration, easing },
        }
    }
}

const PULSE_DELAY: Duration = Duration::from_millis(1000);
const PULSE_RISE: Duration = Duration::from_millis(1100);
const PULSE_GAP: Duration = Duration::from_millis(1200);
const PULSE_TAIL: Duration = Duration::from_millis(2000);

/// Repeating two-pulse program of the end-of-line indicator.
///
/// One cycle: hold for 1000ms, rise to 1 over 1100ms, drop to 0, hold 0 for
/// 1200ms, rise to 1 over 1100ms, hold 1 for 2000ms. Rises use the default
/// [`EasingFunction::QuadInOut`]. The opening hold and first rise start from
/// the previous cycle's final value, which is 0 only in the first cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseAnimation;

impl PulseAnimation {
    /// Length of one cycle.
    pub const CYCLE: Duration = Duration::from_millis(6400);

    /// Pulse value in `[0, 1]` after `elapsed` since the pulse started.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let cycle_ms = Self::CYCLE.as_millis();
        let elapsed_ms = elapsed.as_millis();
        let start = if elapsed_ms < cycle_ms { 0.0 } else { 1.0 };
        let mut t = Duration::from_millis((elapsed_ms % cycle_ms) as u64)
            + Duration::from_nanos(u64::from(elapsed.subsec_nanos() % 1_000_000));

        let rise = AnimationSpec::Timing {
            duration: PULSE_RISE,
            easing: EasingFunction::QuadInOut,
        };

        if t < PULSE_DELAY {
            return start;
        }
        t -= PULSE_DELAY;
        if t < PULSE_RISE {
            return rise.sample(start, 1.0, t);
        }
        t -= PULSE_RISE;
        if t < PULSE_GAP {
            return 0.0;
        }
        t -= PULSE_GAP;
        if t < PULSE_RISE {
            return rise.sample(0.0, 1.0, t);
        }
        1.0
    }
}
