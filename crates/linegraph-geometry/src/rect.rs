//! The padded drawing rectangle inside a canvas.

use glam::DVec2;

/// Canvas size plus the symmetric padding around the drawing area.
///
/// Drawing happens in `[left, right] × [top, bottom]`, where
/// `left = horizontal_padding`, `right = width - horizontal_padding` and the
/// same for the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawingRect {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Padding on the left and right edges.
    pub horizontal_padding: f64,
    /// Padding on the top and bottom edges.
    pub vertical_padding: f64,
}

impl DrawingRect {
    /// Create a new rect.
    pub fn new(width: f64, height: f64, horizontal_padding: f64, vertical_padding: f64) -> Self {
        Self {
            width,
            height,
            horizontal_padding,
            vertical_padding,
        }
    }

    /// A rect with no padding.
    pub fn unpadded(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }

    /// `true` once the host has reported a usable size (at least 1×1).
    pub fn is_measured(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }

    /// Width available for the curve. Never negative.
    pub fn drawing_width(&self) -> f64 {
        (self.width - 2.0 * self.horizontal_padding).max(0.0)
    }

    /// Height available for the curve. Never negative.
    pub fn drawing_height(&self) -> f64 {
        (self.height - 2.0 * self.vertical_padding).max(0.0)
    }

    /// Get the left edge of the drawing area.
    pub fn left(&self) -> f64 {
        self.horizontal_padding
    }

    /// Get the right edge of the drawing area.
    pub fn right(&self) -> f64 {
        self.left() + self.drawing_width()
    }

    /// Get the top edge of the drawing area.
    pub fn top(&self) -> f64 {
        self.vertical_padding
    }

    /// Get the bottom edge of the drawing area.
    pub fn bottom(&self) -> f64 {
        self.top() + self.drawing_height()
    }

    /// The y-coordinate fill paths close down to.
    pub fn baseline(&self) -> f64 {
        self.height + self.vertical_padding
    }

    /// Vertical midline of the drawing area.
    pub fn mid_y(&self) -> f64 {
        self.top() + self.drawing_height() * 0.5
    }

    /// Center of the drawing area.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left() + self.drawing_width() * 0.5, self.mid_y())
    }

    /// Clamp an x-coordinate into the drawing area.
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.left(), self.right())
    }

    /// Same canvas with different padding.
    pub fn with_padding(self, horizontal_padding: f64, vertical_padding: f64) -> Self {
        Self {
            horizontal_padding,
            vertical_padding,
            ..self
        }
    }
}
