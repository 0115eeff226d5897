//! Graph configuration and its validated form.

use crate::error::{GraphError, Result};
use crate::indicator::default_horizontal_padding;
use crate::style::{FillGradient, PULSE_ALPHA};
use linegraph_core::Color;
use linegraph_core::color::normalize_hex;
use linegraph_geometry::{
    DEFAULT_SMOOTHING, GraphPathConfig, GraphRange, MIN_PIXEL_STRIDE, Sampling,
};
use std::time::Duration;

/// Default stroke width in pixels.
pub const DEFAULT_LINE_THICKNESS: f64 = 3.0;

/// Default time a pointer must rest before the pan gesture activates.
pub const DEFAULT_PAN_GESTURE_DELAY: Duration = Duration::from_millis(300);

/// What the host gesture recognizer should be set up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    pub enabled: bool,
    pub activation_delay: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            activation_delay: DEFAULT_PAN_GESTURE_DELAY,
        }
    }
}

/// User-facing graph options.
///
/// Colors are `#rgb`, `#rrggbb` or `#rrggbbaa` strings and are checked by
/// [`GraphConfig::validate`].
///
/// # Example
///
/// ```
/// use linegraph::GraphConfig;
///
/// let style = GraphConfig::new("#3a86ff")
///     .line_thickness(2.0)
///     .enable_indicator(true)
///     .validate()
///     .unwrap();
/// assert_eq!(style.horizontal_padding, 10.0);
/// assert_eq!(style.vertical_padding, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub color: String,
    pub line_thickness: f64,
    pub enable_fade_in_mask: bool,
    pub gradient_fill_colors: Option<Vec<String>>,
    pub range: GraphRange,
    pub horizontal_padding: Option<f64>,
    pub vertical_padding: Option<f64>,
    pub enable_pan_gesture: bool,
    pub pan_gesture_delay: Duration,
    pub enable_indicator: bool,
    pub indicator_pulsating: bool,
    pub smoothing: f64,
    pub sampling: Sampling,
}

impl GraphConfig {
    /// Defaults for everything except the line color.
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            line_thickness: DEFAULT_LINE_THICKNESS,
            enable_fade_in_mask: false,
            gradient_fill_colors: None,
            range: GraphRange::auto(),
            horizontal_padding: None,
            vertical_padding: None,
            enable_pan_gesture: false,
            pan_gesture_delay: DEFAULT_PAN_GESTURE_DELAY,
            enable_indicator: false,
            indicator_pulsating: false,
            smoothing: DEFAULT_SMOOTHING,
            sampling: Sampling::PerPoint,
        }
    }

    pub fn line_thickness(mut self, thickness: f64) -> Self {
        self.line_thickness = thickness;
        self
    }

    pub fn enable_fade_in_mask(mut self, enabled: bool) -> Self {
        self.enable_fade_in_mask = enabled;
        self
    }

    pub fn gradient_fill_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gradient_fill_colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn range(mut self, range: GraphRange) -> Self {
        self.range = range;
        self
    }

    pub fn horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = Some(padding);
        self
    }

    pub fn vertical_padding(mut self, padding: f64) -> Self {
        self.vertical_padding = Some(padding);
        self
    }

    pub fn enable_pan_gesture(mut self, enabled: bool) -> Self {
        self.enable_pan_gesture = enabled;
        self
    }

    pub fn pan_gesture_delay(mut self, delay: Duration) -> Self {
        self.pan_gesture_delay = delay;
        self
    }

    pub fn enable_indicator(mut self, enabled: bool) -> Self {
        self.enable_indicator = enabled;
        self
    }

    pub fn indicator_pulsating(mut self, pulsating: bool) -> Self {
        self.indicator_pulsating = pulsating;
        self
    }

    pub fn smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Check every option and resolve colors and defaults.
    pub fn validate(&self) -> Result<GraphStyle> {
        let color = parse_color(&self.color)?;
        let fill = self
            .gradient_fill_colors
            .as_ref()
            .map(|colors| {
                colors
                    .iter()
                    .map(|c| parse_color(c))
                    .collect::<Result<Vec<_>>>()
                    .map(|colors| FillGradient { colors })
            })
            .transpose()?;

        if !self.line_thickness.is_finite() || self.line_thickness < 0.0 {
            return Err(GraphError::InvalidLineThickness(self.line_thickness));
        }
        let path = path_config(self.smoothing, self.sampling)?;

        let horizontal = self
            .horizontal_padding
            .unwrap_or_else(|| default_horizontal_padding(self.enable_indicator));
        let vertical = self.vertical_padding.unwrap_or(self.line_thickness);
        check_padding(horizontal, vertical)?;

        Ok(GraphStyle {
            color,
            hex: normalize_hex(&self.color)?,
            pulse_color: color.with_alpha(PULSE_ALPHA),
            line_thickness: self.line_thickness,
            fade_in_mask: self.enable_fade_in_mask,
            fill,
            horizontal_padding: horizontal,
            vertical_padding: vertical,
            gesture: GestureConfig {
                enabled: self.enable_pan_gesture,
                activation_delay: self.pan_gesture_delay,
            },
            indicator_enabled: self.enable_indicator,
            indicator_pulsating: self.indicator_pulsating,
            path,
        })
    }
}

/// Validated, resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStyle {
    pub color: Color,
    /// The line color as `#rrggbb`.
    pub hex: String,
    pub pulse_color: Color,
    pub line_thickness: f64,
    pub fade_in_mask: bool,
    /// Present when a gradient fill was configured.
    pub fill: Option<FillGradient>,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    pub gesture: GestureConfig,
    pub indicator_enabled: bool,
    pub indicator_pulsating: bool,
    pub path: GraphPathConfig,
}

impl GraphStyle {
    /// The pulse color as CSS `rgba(...)`.
    pub fn pulse_css(&self) -> String {
        self.pulse_color.to_css()
    }
}

fn parse_color(input: &str) -> Result<Color> {
    normalize_hex(input)?;
    Ok(Color::parse_hex(input)?)
}

pub(crate) fn path_config(smoothing: f64, sampling: Sampling) -> Result<GraphPathConfig> {
    if !(0.0..=1.0).contains(&smoothing) {
        return Err(GraphError::InvalidSmoothing(smoothing));
    }
    if let Sampling::PixelStride(stride) = sampling
        && !(stride.is_finite() && stride >= MIN_PIXEL_STRIDE)
    {
        return Err(GraphError::InvalidPixelStride(stride));
    }
    Ok(GraphPathConfig {
        smoothing,
        sampling,
    })
}

pub(crate) fn check_padding(horizontal: f64, vertical: f64) -> Result<()> {
    let ok = |p: f64| p.is_finite() && p >= 0.0;
    if ok(horizontal) && ok(vertical) {
        Ok(())
    } else {
        Err(GraphError::InvalidPadding {
            horizontal,
            vertical,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linegraph_core::ColorError;

    #[test]
    fn test_defaults() {
        let style = GraphConfig::new("#abc").validate().unwrap();
        assert_eq!(style.hex, "#aabbcc");
        assert_eq!(style.line_thickness, 3.0);
        assert_eq!(style.horizontal_padding, 0.0);
        assert_eq!(style.vertical_padding, 3.0);
        assert_eq!(style.path.smoothing, 0.2);
        assert_eq!(style.path.sampling, Sampling::PerPoint);
        assert_eq!(style.gesture, GestureConfig::default());
        assert!(style.fill.is_none());
    }

    #[test]
    fn test_indicator_padding_default() {
        let style = GraphConfig::new("#000")
            .enable_indicator(true)
            .validate()
            .unwrap();
        assert_eq!(style.horizontal_padding, 10.0);

        let style = GraphConfig::new("#000")
            .enable_indicator(true)
            .horizontal_padding(4.0)
            .validate()
            .unwrap();
        assert_eq!(style.horizontal_padding, 4.0);
    }

    #[test]
    fn test_bad_color_fails_fast() {
        let err = GraphConfig::new("abc").validate().unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidColor(ColorError::MissingHash {
                input: "abc".into()
            })
        );

        let err = GraphConfig::new("#fff")
            .gradient_fill_colors(["#fff", "#12345"])
            .validate()
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidColor(ColorError::InvalidLength { len: 5, .. })));
    }

    #[test]
    fn test_numeric_checks() {
        assert_eq!(
            GraphConfig::new("#fff").smoothing(1.5).validate(),
            Err(GraphError::InvalidSmoothing(1.5))
        );
        assert_eq!(
            GraphConfig::new("#fff")
                .sampling(Sampling::PixelStride(0.0))
                .validate(),
            Err(GraphError::InvalidPixelStride(0.0))
        );
        assert_eq!(
            GraphConfig::new("#fff")
                .sampling(Sampling::PixelStride(1e-12))
                .validate(),
            Err(GraphError::InvalidPixelStride(1e-12))
        );
        assert!(
            GraphConfig::new("#fff")
                .sampling(Sampling::PixelStride(MIN_PIXEL_STRIDE))
                .validate()
                .is_ok()
        );
        assert_eq!(
            GraphConfig::new("#fff").line_thickness(-1.0).validate(),
            Err(GraphError::InvalidLineThickness(-1.0))
        );
        assert!(matches!(
            GraphConfig::new("#fff").vertical_padding(f64::NAN).validate(),
            Err(GraphError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn test_pulse_color() {
        let style = GraphConfig::new("#336699").validate().unwrap();
        assert_eq!(style.pulse_css(), "rgba(51, 102, 153, 0.4)");
    }
}
