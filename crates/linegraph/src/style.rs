//! Resolved colors and gradients.

use linegraph_core::Color;

/// Alpha of the stroke behind the scrub position.
const TRAILING_ALPHA: u8 = 0x33;

/// Fraction of the stroke covered by the fade-in ramp.
const FADE_IN_END: f64 = 0.15;

/// Alpha of the indicator pulse relative to the line color.
pub const PULSE_ALPHA: f32 = 0.4;

/// A color stop along a gradient, `position` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f64,
    pub color: Color,
}

/// Horizontal gradient for the stroke.
///
/// Everything right of the scrub position (`path_end`) is drawn at reduced
/// alpha. With the fade-in mask the first 15% ramps in from transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeGradient {
    pub stops: [GradientStop; 5],
}

impl StrokeGradient {
    pub fn new(color: Color, path_end: f64, fade_in: bool) -> Self {
        let path_end = path_end.clamp(0.0, 1.0);
        let positions = [0.0, FADE_IN_END.min(path_end), path_end, path_end, 1.0];

        let opaque = color.with_alpha(1.0);
        let trailing = with_alpha_u8(color, TRAILING_ALPHA);
        let colors = if fade_in {
            [with_alpha_u8(color, 0x00), opaque, opaque, trailing, trailing]
        } else {
            [color, color, color, trailing, trailing]
        };

        let stops = std::array::from_fn(|i| GradientStop {
            position: positions[i],
            color: colors[i],
        });
        Self { stops }
    }

    pub fn positions(&self) -> [f64; 5] {
        self.stops.map(|s| s.position)
    }

    pub fn colors(&self) -> [Color; 5] {
        self.stops.map(|s| s.color)
    }
}

/// Vertical gradient under the stroke, from the top of the canvas to its
/// bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct FillGradient {
    pub colors: Vec<Color>,
}

impl FillGradient {
    /// Stops spread evenly from 0 to 1.
    pub fn stops(&self) -> Vec<GradientStop> {
        let last = self.colors.len().saturating_sub(1).max(1) as f64;
        self.colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                position: i as f64 / last,
                color,
            })
            .collect()
    }
}

fn with_alpha_u8(color: Color, alpha: u8) -> Color {
    color.with_alpha(f32::from(alpha) / 255.0)
}
