//! Turns an ordered point set into a smooth stroke path and its fill.

use crate::mapper::CoordinateMapper;
use crate::path::{Path, PathBuilder, PathCommand};
use crate::range::{ResolvedRange, points_in_range};
use crate::rect::DrawingRect;
use glam::DVec2;
use linegraph_core::GraphPoint;
use linegraph_core::profiling::{profile_function, profile_scope};

/// Smoothing factor used when none is configured.
pub const DEFAULT_SMOOTHING: f64 = 0.2;

/// Sampling stride in pixels used by [`Sampling::PixelStride`] by default.
pub const DEFAULT_PIXEL_STRIDE: f64 = 2.0;

/// Smallest stride [`Sampling::PixelStride`] samples at. Finer strides are
/// raised to this.
pub const MIN_PIXEL_STRIDE: f64 = 0.1;

/// How the builder places curve segments.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Sampling {
    /// One cubic per pair of neighbouring data points, passing through every
    /// point.
    #[default]
    PerPoint,
    /// Resample the data every `stride` pixels and fit a B-spline through the
    /// samples. Visual smoothness does not depend on point density.
    PixelStride(f64),
}

impl Sampling {
    /// Pixel stride sampling with [`DEFAULT_PIXEL_STRIDE`].
    pub fn pixel_stride() -> Self {
        Sampling::PixelStride(DEFAULT_PIXEL_STRIDE)
    }
}

/// Parameters of a path build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPathConfig {
    /// Tangent scale in `[0, 1]`. 0 gives straight segments.
    pub smoothing: f64,
    pub sampling: Sampling,
}

impl Default for GraphPathConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            sampling: Sampling::PerPoint,
        }
    }
}

/// A stroke path and the closed area beneath it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphPaths {
    pub path: Path,
    pub fill_path: Path,
}

/// Builds graph paths for a fixed range and drawing rect.
///
/// ```
/// use linegraph_core::GraphPoint;
/// use linegraph_geometry::{DrawingRect, GraphPathBuilder, GraphPathConfig, GraphRange};
///
/// let points = [GraphPoint::from((0, 0.0)), GraphPoint::from((1, 10.0))];
/// let range = GraphRange::auto().resolve(&points).unwrap();
/// let rect = DrawingRect::new(100.0, 100.0, 3.0, 3.0);
/// let path = GraphPathBuilder::new(range, rect, GraphPathConfig::default()).build(&points);
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphPathBuilder {
    mapper: CoordinateMapper,
    config: GraphPathConfig,
}

impl GraphPathBuilder {
    pub fn new(range: ResolvedRange, rect: DrawingRect, config: GraphPathConfig) -> Self {
        Self {
            mapper: CoordinateMapper::new(range, rect),
            config,
        }
    }

    /// The mapper used for every coordinate of the built paths.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn config(&self) -> &GraphPathConfig {
        &self.config
    }

    /// Build the stroke path.
    ///
    /// Points outside the x range are skipped. Zero points give an empty path,
    /// a single point gives a lone move.
    pub fn build(&self, points: &[GraphPoint]) -> Path {
        profile_function!();
        let points = points_in_range(points, self.mapper.range().x);
        match self.config.sampling {
            Sampling::PerPoint => self.build_per_point(points),
            Sampling::PixelStride(stride) => self.build_pixel_stride(points, stride),
        }
    }

    /// Build the stroke path and a fill path closed down to the baseline.
    pub fn build_with_fill(&self, points: &[GraphPoint]) -> GraphPaths {
        let path = self.build(points);
        let fill_path = self.fill_for(&path);
        GraphPaths { path, fill_path }
    }

    /// Close `stroke` down to the baseline.
    ///
    /// Paths without a visible segment are returned unchanged.
    pub fn fill_for(&self, stroke: &Path) -> Path {
        let (Some(first), Some(last)) = (stroke.first_point(), stroke.last_point()) else {
            return Path::new();
        };
        let mut fill = Path::from_commands(stroke.commands().to_vec());
        if !stroke.has_visible_segments() {
            return fill;
        }
        let baseline = self.mapper.rect().baseline();
        fill.push(PathCommand::LineTo(DVec2::new(last.x, baseline)));
        fill.push(PathCommand::LineTo(DVec2::new(first.x, baseline)));
        fill
    }

    /// The path `build` would produce, flattened onto the vertical midline.
    ///
    /// It has the same commands and x-coordinates as the real path, so a
    /// transition can morph from it.
    pub fn build_flat(&self, points: &[GraphPoint]) -> Path {
        let mid = self.mapper.rect().mid_y();
        flatten(&self.build(points), mid)
    }

    fn build_per_point(&self, points: &[GraphPoint]) -> Path {
        let mut builder = PathBuilder::with_capacity(points.len());
        let Some(first) = points.first() else {
            return builder.build();
        };
        builder.move_to(self.mapper.map(first));

        let smoothing = self.config.smoothing.clamp(0.0, 1.0);
        let pixel = |i: usize| self.mapper.map(&points[i]);

        profile_scope!("per_point_segments");
        for i in 1..points.len() {
            let p1 = pixel(i - 1);
            let p2 = pixel(i);
            let p0 = if i >= 2 { pixel(i - 2) } else { p1 };
            let p3 = if i + 1 < points.len() { pixel(i + 1) } else { p2 };

            let (c1, c2) = catmull_rom_controls(p0, p1, p2, p3, smoothing);
            builder.cubic_to(c1, c2, p2);
        }
        builder.build()
    }

    fn build_pixel_stride(&self, points: &[GraphPoint], stride: f64) -> Path {
        let samples = self.sample_pixels(points, stride);
        let mut builder = PathBuilder::with_capacity(samples.len() + 1);
        let Some(&first) = samples.first() else {
            return builder.build();
        };
        builder.move_to(first);
        if samples.len() == 1 {
            return builder.build();
        }

        profile_scope!("b_spline_segments");
        for i in 1..samples.len() {
            let current = samples[i];
            let p1 = samples[i - 1];
            let p0 = if i >= 2 { samples[i - 2] } else { p1 };
            builder.cubic_to(
                (2.0 * p0 + p1) / 3.0,
                (p0 + 2.0 * p1) / 3.0,
                (p0 + 4.0 * p1 + current) / 6.0,
            );
        }
        let last = samples[samples.len() - 1];
        builder.cubic_to(last, last, last);
        builder.build()
    }

    /// Canvas positions sampled every `stride` px along the polyline through
    /// the mapped points. The first and last points are always included.
    fn sample_pixels(&self, points: &[GraphPoint], stride: f64) -> Vec<DVec2> {
        let mapped: Vec<DVec2> = points.iter().map(|p| self.mapper.map(p)).collect();
        let (Some(&first), Some(&last)) = (mapped.first(), mapped.last()) else {
            return Vec::new();
        };
        if mapped.len() == 1 {
            return vec![first];
        }

        let stride = if stride.is_finite() && stride > 0.0 {
            stride.max(MIN_PIXEL_STRIDE)
        } else {
            DEFAULT_PIXEL_STRIDE
        };
        let steps = ((last.x - first.x) / stride).ceil().max(0.0) as usize;
        let mut samples = Vec::with_capacity(steps + 1);
        let mut segment = 1;
        for step in 0..steps {
            let x = first.x + step as f64 * stride;
            while segment < mapped.len() - 1 && mapped[segment].x < x {
                segment += 1;
            }
            samples.push(lerp_at_x(mapped[segment - 1], mapped[segment], x));
        }
        samples.push(last);
        if samples.len() == 1 {
            // Every point sits at the same x.
            samples.insert(0, first);
        }
        samples
    }
}

/// Catmull-Rom control points for the segment `p1 -> p2`, scaled by
/// `smoothing`. Control x-coordinates are kept within their half of the
/// segment so `x(t)` stays monotone.
fn catmull_rom_controls(
    p0: DVec2,
    p1: DVec2,
    p2: DVec2,
    p3: DVec2,
    smoothing: f64,
) -> (DVec2, DVec2) {
    let mut c1 = p1 + (p2 - p0) * smoothing;
    let mut c2 = p2 - (p3 - p1) * smoothing;
    let mid = (p1.x + p2.x) * 0.5;
    c1.x = c1.x.clamp(p1.x.min(mid), p1.x.max(mid));
    c2.x = c2.x.clamp(mid.min(p2.x), mid.max(p2.x));
    (c1, c2)
}

fn lerp_at_x(a: DVec2, b: DVec2, x: f64) -> DVec2 {
    let dx = b.x - a.x;
    if dx == 0.0 {
        return DVec2::new(x, b.y);
    }
    let t = ((x - a.x) / dx).clamp(0.0, 1.0);
    DVec2::new(x, a.y + (b.y - a.y) * t)
}

/// Copy of `path` with every y-coordinate set to `y`.
pub fn flatten(path: &Path, y: f64) -> Path {
    Path::from_commands(
        path.commands()
            .iter()
            .map(|cmd| cmd.map_points(|p| DVec2::new(p.x, y)))
            .collect(),
    )
}
