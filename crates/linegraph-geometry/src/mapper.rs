//! Domain to pixel coordinate mapping.

use crate::range::{AxisRange, ResolvedRange};
use crate::rect::DrawingRect;
use glam::DVec2;
use linegraph_core::{GraphPoint, Timestamp};

/// Horizontal offset of `date` inside a drawing area `drawing_width` wide.
///
/// The fraction along the range is clamped to `[0, 1]`. A zero-width range
/// maps every date to the middle.
pub fn map_x(date: Timestamp, x_range: AxisRange<Timestamp>, drawing_width: f64) -> f64 {
    let span = x_range.span();
    if span == 0.0 {
        return drawing_width * 0.5;
    }
    let fraction = (date.millis_since(x_range.min) / span).clamp(0.0, 1.0);
    fraction * drawing_width
}

/// Vertical offset of `value` inside a drawing area `drawing_height` tall.
///
/// Higher values map closer to the top. Values outside the range produce
/// offsets outside `[0, drawing_height]`. A zero-height range maps every value
/// to the midline.
pub fn map_y(value: f64, y_range: AxisRange<f64>, drawing_height: f64) -> f64 {
    let span = y_range.span();
    if span == 0.0 || !span.is_finite() {
        return drawing_height * 0.5;
    }
    let fraction = (value - y_range.min) / span;
    drawing_height - fraction * drawing_height
}

/// Maps domain points to canvas pixels for one resolved range and rect.
///
/// Adds the rect's padding to the offsets from [`map_x`] and [`map_y`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    range: ResolvedRange,
    rect: DrawingRect,
}

impl CoordinateMapper {
    /// Create a mapper.
    pub fn new(range: ResolvedRange, rect: DrawingRect) -> Self {
        Self { range, rect }
    }

    pub fn range(&self) -> &ResolvedRange {
        &self.range
    }

    pub fn rect(&self) -> &DrawingRect {
        &self.rect
    }

    /// Offset from the left padding edge. Used for the line width of the
    /// indicator and the selection index.
    pub fn x_offset(&self, date: Timestamp) -> f64 {
        map_x(date, self.range.x, self.rect.drawing_width())
    }

    /// Canvas x of `date`.
    pub fn x(&self, date: Timestamp) -> f64 {
        self.rect.left() + self.x_offset(date)
    }

    /// Canvas y of `value`.
    pub fn y(&self, value: f64) -> f64 {
        self.rect.top() + map_y(value, self.range.y, self.rect.drawing_height())
    }

    /// Canvas position of a point.
    pub fn map(&self, point: &GraphPoint) -> DVec2 {
        DVec2::new(self.x(point.date), self.y(point.value))
    }
}
