//! Domain ranges and range resolution.

use linegraph_core::{GraphPoint, Timestamp};
use tracing::warn;

/// An inclusive `[min, max]` interval on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> AxisRange<T> {
    /// Create a new range. The bounds are taken as given.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `true` when `min > max`.
    pub fn is_reversed(&self) -> bool {
        self.min > self.max
    }

    /// The range with its bounds in ascending order.
    pub fn ordered(self) -> Self {
        if self.is_reversed() {
            Self {
                min: self.max,
                max: self.min,
            }
        } else {
            self
        }
    }

    /// `true` when `value` lies inside the interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

impl AxisRange<Timestamp> {
    /// Length of the range in milliseconds.
    pub fn span(&self) -> f64 {
        self.max.millis_since(self.min)
    }
}

impl AxisRange<f64> {
    /// Length of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Optional per-axis overrides. An absent axis is derived from the points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphRange {
    pub x: Option<AxisRange<Timestamp>>,
    pub y: Option<AxisRange<f64>>,
}

/// Both axes after defaults have been filled in. `min <= max` on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRange {
    pub x: AxisRange<Timestamp>,
    pub y: AxisRange<f64>,
}

impl GraphRange {
    /// Range with both axes derived from the data.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Override the x axis.
    pub fn with_x(mut self, min: impl Into<Timestamp>, max: impl Into<Timestamp>) -> Self {
        self.x = Some(AxisRange::new(min.into(), max.into()));
        self
    }

    /// Override the y axis.
    pub fn with_y(mut self, min: f64, max: f64) -> Self {
        self.y = Some(AxisRange::new(min, max));
        self
    }

    /// Fill in missing axes from `points`.
    ///
    /// The x axis defaults to the dates of the first and last points. The y
    /// axis defaults to the extremes of the values inside the resolved x
    /// range. Returns `None` when there are no points.
    pub fn resolve(&self, points: &[GraphPoint]) -> Option<ResolvedRange> {
        let (first, last) = (points.first()?, points.last()?);

        let x = match self.x {
            Some(x) => {
                if x.is_reversed() {
                    warn!(min = %x.min, max = %x.max, "x range is reversed, swapping bounds");
                }
                x.ordered()
            }
            None => AxisRange::new(first.date, last.date).ordered(),
        };

        let y = match self.y {
            Some(y) => {
                if y.is_reversed() {
                    warn!(min = y.min, max = y.max, "y range is reversed, swapping bounds");
                }
                y.ordered()
            }
            None => {
                let visible = points_in_range(points, x);
                let source = if visible.is_empty() { points } else { visible };
                value_extent(source)
            }
        };

        Some(ResolvedRange { x, y })
    }
}

fn value_extent(points: &[GraphPoint]) -> AxisRange<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points.iter().filter(|p| p.value.is_finite()) {
        min = min.min(p.value);
        max = max.max(p.value);
    }
    if min > max {
        AxisRange::new(0.0, 0.0)
    } else {
        AxisRange::new(min, max)
    }
}

/// The contiguous run of `points` whose dates fall inside `x`.
///
/// Relies on ascending dates and uses binary search, so it never allocates.
pub fn points_in_range(points: &[GraphPoint], x: AxisRange<Timestamp>) -> &[GraphPoint] {
    let start = points.partition_point(|p| p.date < x.min);
    let end = points.partition_point(|p| p.date <= x.max);
    if start >= end {
        &[]
    } else {
        &points[start..end]
    }
}
