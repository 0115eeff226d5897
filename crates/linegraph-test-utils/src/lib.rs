//! Test utilities for the linegraph crates.
//!
//! This crate provides shared fixtures for integration tests and benches:
//!
//! - [`fixtures`] - Point sets used across the test suites
//! - [`assert_approx_eq!`] - Float comparison with a tolerance
//! - [`pointer_sweep`] - Simulated pointer x positions
//! - [`CallRecorder`] - Thread-safe call log for mock listeners
//!
//! # Example
//!
//! ```rust
//! use linegraph_test_utils::{assert_approx_eq, fixtures, pointer_sweep};
//!
//! let points = fixtures::scenario_points();
//! assert_eq!(points.len(), 3);
//!
//! let xs: Vec<f64> = pointer_sweep(0.0, 1.0, 0.5).collect();
//! assert_approx_eq!(xs[1], 0.5);
//! ```

pub mod fixtures;
mod recorder;

pub use recorder::CallRecorder;

/// Default tolerance of [`assert_approx_eq!`].
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Assert that two floats differ by less than a tolerance
/// ([`DEFAULT_EPSILON`] when omitted).
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::DEFAULT_EPSILON)
    };
    ($left:expr, $right:expr, $eps:expr $(,)?) => {{
        let (left, right, eps): (f64, f64, f64) = ($left, $right, $eps);
        assert!(
            (left - right).abs() < eps,
            "assertion `left ≈ right` failed\n  left: {left}\n right: {right}\n   eps: {eps}"
        );
    }};
}

/// Positions from `start` to `end` inclusive in steps of `step`.
///
/// `end` is always yielded last, even when the range is not a multiple of
/// `step`. A descending sweep is produced when `end < start`.
pub fn pointer_sweep(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let step = step.abs().max(f64::EPSILON);
    let distance = (end - start).abs();
    let direction = if end < start { -1.0 } else { 1.0 };
    let steps = (distance / step).floor() as usize;
    (0..=steps)
        .map(move |i| start + direction * i as f64 * step)
        .filter(move |&x| (x - end).abs() > f64::EPSILON)
        .chain(std::iter::once(end))
}
