//! Cubic Bezier curves and the polynomial solver behind curve inversion.

use glam::DVec2;
use std::f64::consts::PI;

/// Coefficients below this magnitude (after normalization) are treated as zero.
const EPSILON: f64 = 1e-8;

/// Default number of decimal places used when filtering roots into `[0, 1]`.
pub const DEFAULT_ROOT_PRECISION: u32 = 2;

/// A cubic Bezier curve (two control points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point
    pub from: DVec2,
    /// First control point
    pub control1: DVec2,
    /// Second control point
    pub control2: DVec2,
    /// End point
    pub to: DVec2,
}

impl CubicBezier {
    /// Create a new cubic Bezier curve.
    pub fn new(from: DVec2, control1: DVec2, control2: DVec2, to: DVec2) -> Self {
        Self {
            from,
            control1,
            control2,
            to,
        }
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f64) -> DVec2 {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        self.from * mt3
            + self.control1 * (3.0 * mt2 * t)
            + self.control2 * (3.0 * mt * t2)
            + self.to * t3
    }

    /// Power-basis coefficients `[a, b, c, d]` of the x-component, so that
    /// `x(t) = a t³ + b t² + c t + d`.
    pub fn x_coefficients(&self) -> [f64; 4] {
        let (p0, p1, p2, p3) = (self.from.x, self.control1.x, self.control2.x, self.to.x);
        [
            -p0 + 3.0 * p1 - 3.0 * p2 + p3,
            3.0 * p0 - 6.0 * p1 + 3.0 * p2,
            -3.0 * p0 + 3.0 * p1,
            p0,
        ]
    }

    /// Find the curve parameter whose x-coordinate equals `x`.
    ///
    /// Real roots of `x(t) - x` are rounded to `precision` decimal places and
    /// the first one inside `[0, 1]` is returned, clamped to that interval.
    /// The rounding only decides membership; the returned parameter keeps full
    /// precision.
    pub fn t_for_x(&self, x: f64, precision: u32) -> Option<f64> {
        let [a, b, c, d] = self.x_coefficients();
        let d = d - x;
        solve_cubic(a, b, c, d)
            .iter()
            .map(|&root| polish_root(root, a, b, c, d))
            .find(|&root| {
                let rounded = round_to(root, precision);
                (0.0..=1.0).contains(&rounded)
            })
            .map(|root| root.clamp(0.0, 1.0))
    }

    /// The y-coordinate of the curve at the given x, if the curve reaches it.
    pub fn y_for_x(&self, x: f64, precision: u32) -> Option<f64> {
        self.t_for_x(x, precision).map(|t| self.eval(t).y)
    }
}

/// Real roots of a polynomial, at most three. Stored inline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Roots {
    values: [f64; 3],
    len: usize,
}

impl Roots {
    fn none() -> Self {
        Self::default()
    }

    fn from_slice(roots: &[f64]) -> Self {
        let mut out = Self::default();
        for &r in roots.iter().take(3) {
            out.values[out.len] = r;
            out.len += 1;
        }
        out
    }

    /// Number of roots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when there are no real roots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Roots in the order they were found.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// Iterate over the roots.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    fn shift(mut self, by: f64) -> Self {
        for r in &mut self.values[..self.len] {
            *r += by;
        }
        self
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Real roots of `a t³ + b t² + c t + d = 0`.
///
/// Leading coefficients that are negligible relative to the largest one drop
/// the degree, so the quadratic and linear cases are handled explicitly. An
/// all-zero polynomial yields no roots. Roots are not sorted.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Roots {
    let scale = a.abs().max(b.abs()).max(c.abs()).max(d.abs());
    if scale == 0.0 || !scale.is_finite() {
        return Roots::none();
    }
    let (a, b, c, d) = (a / scale, b / scale, c / scale, d / scale);

    if a.abs() < EPSILON {
        return solve_quadratic(b, c, d);
    }

    // Depressed cubic s³ + p s + q = 0 with t = s - b / 3a.
    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);

    let roots = if p.abs() < EPSILON {
        Roots::from_slice(&[(-q).cbrt()])
    } else if q.abs() < EPSILON {
        if p < 0.0 {
            let s = (-p).sqrt();
            Roots::from_slice(&[0.0, s, -s])
        } else {
            Roots::from_slice(&[0.0])
        }
    } else {
        let disc = q * q / 4.0 + p * p * p / 27.0;
        if disc.abs() < EPSILON {
            Roots::from_slice(&[-1.5 * q / p, 3.0 * q / p])
        } else if disc > 0.0 {
            let u = (-q / 2.0 - disc.sqrt()).cbrt();
            Roots::from_slice(&[u - p / (3.0 * u)])
        } else {
            // Three real roots, trigonometric form. p < 0 here.
            let u = 2.0 * (-p / 3.0).sqrt();
            let theta = ((3.0 * q / p / u).clamp(-1.0, 1.0)).acos() / 3.0;
            let k = 2.0 * PI / 3.0;
            Roots::from_slice(&[
                u * theta.cos(),
                u * (theta - k).cos(),
                u * (theta - 2.0 * k).cos(),
            ])
        }
    };

    roots.shift(-b / (3.0 * a))
}

fn solve_quadratic(a: f64, b: f64, c: f64) -> Roots {
    if a.abs() < EPSILON {
        if b.abs() < EPSILON {
            return Roots::none();
        }
        return Roots::from_slice(&[-c / b]);
    }

    let disc = b * b - 4.0 * a * c;
    if disc.abs() < EPSILON {
        Roots::from_slice(&[-b / (2.0 * a)])
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        Roots::from_slice(&[(-b + sq) / (2.0 * a), (-b - sq) / (2.0 * a)])
    } else {
        Roots::none()
    }
}

/// A couple of Newton steps on a root of `a t³ + b t² + c t + d`. A step is
/// kept only when it reduces the residual.
fn polish_root(mut t: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let f = |t: f64| ((a * t + b) * t + c) * t + d;
    let df = |t: f64| (3.0 * a * t + 2.0 * b) * t + c;
    for _ in 0..2 {
        let slope = df(t);
        if slope.abs() < EPSILON {
            break;
        }
        let next = t - f(t) / slope;
        if !next.is_finite() || f(next).abs() >= f(t).abs() {
            break;
        }
        t = next;
    }
    t
}

/// Round half away from zero to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let p = 10f64.powi(precision as i32);
    (value * p).round() / p
}
