//! Domain samples.

use crate::time::Timestamp;

/// A single `(date, value)` sample.
///
/// Sequences of points are expected in ascending `date` order. Nothing in the
/// engine sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphPoint {
    /// Sample time.
    pub date: Timestamp,
    /// Sample value.
    pub value: f64,
}

impl GraphPoint {
    /// Create a new point.
    pub fn new(date: impl Into<Timestamp>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

impl From<(i64, f64)> for GraphPoint {
    fn from((millis, value): (i64, f64)) -> Self {
        Self {
            date: Timestamp::from_millis(millis),
            value,
        }
    }
}

impl From<(Timestamp, f64)> for GraphPoint {
    fn from((date, value): (Timestamp, f64)) -> Self {
        Self { date, value }
    }
}

/// Returns `true` when `points` is ordered by non-decreasing date.
pub fn is_sorted_by_date(points: &[GraphPoint]) -> bool {
    points.windows(2).all(|w| w[0].date <= w[1].date)
}
