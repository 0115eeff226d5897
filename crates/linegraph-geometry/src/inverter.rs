//! Recover the y-coordinate of a path at a given x.
//!
//! This runs on every pointer move, so it walks the commands in place and
//! never allocates.

use crate::curve::DEFAULT_ROOT_PRECISION;
use crate::path::{PathCommand, Segment, segments};

/// The y-coordinate of the first segment of `commands` that spans `x`.
///
/// Lines are interpolated directly. Curves are inverted by solving their
/// x-polynomial; a curve that spans `x` by its anchors but yields no root in
/// `[0, 1]` is skipped and the scan continues. Returns `None` when no segment
/// produces a value.
pub fn y_for_x(commands: &[PathCommand], x: f64) -> Option<f64> {
    y_for_x_with_precision(commands, x, DEFAULT_ROOT_PRECISION)
}

/// [`y_for_x`] with an explicit rounding precision for root filtering.
pub fn y_for_x_with_precision(commands: &[PathCommand], x: f64, precision: u32) -> Option<f64> {
    if !x.is_finite() {
        return None;
    }
    segments(commands)
        .filter(|segment| segment.spans_x(x))
        .find_map(|segment| match segment {
            Segment::Line { from, to } => Some(line_y_for_x(from.x, from.y, to.x, to.y, x)),
            Segment::Cubic(curve) => curve.y_for_x(x, precision),
        })
}

fn line_y_for_x(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    let dx = x1 - x0;
    if dx == 0.0 {
        return y0;
    }
    y0 + (y1 - y0) * ((x - x0) / dx)
}
