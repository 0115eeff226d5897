//! Path primitives for graph strokes and fills.
//!
//! A path is a sequence of drawing commands that starts with exactly one
//! [`PathCommand::MoveTo`]. Paths are open; a fill region is closed by
//! appending line commands down to a baseline, never by an implicit close.

use crate::curve::CubicBezier;
use glam::DVec2;

/// A command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a new position without drawing.
    MoveTo(DVec2),
    /// Draw a line to a position.
    LineTo(DVec2),
    /// Draw a cubic Bezier curve.
    CubicTo {
        /// First control point
        control1: DVec2,
        /// Second control point
        control2: DVec2,
        /// End point
        to: DVec2,
    },
}

/// The kind of a [`PathCommand`], without coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathVerb {
    Move,
    Line,
    Cubic,
}

impl PathCommand {
    /// The command kind.
    pub fn verb(&self) -> PathVerb {
        match self {
            PathCommand::MoveTo(_) => PathVerb::Move,
            PathCommand::LineTo(_) => PathVerb::Line,
            PathCommand::CubicTo { .. } => PathVerb::Cubic,
        }
    }

    /// The point the pen rests on after this command.
    pub fn end_point(&self) -> DVec2 {
        match self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) => *to,
            PathCommand::CubicTo { to, .. } => *to,
        }
    }

    /// Coordinate-wise linear interpolation towards `other` (`t = 0` gives
    /// `self`, `t = 1` gives `other`).
    ///
    /// Returns `None` when the two commands are of different kinds.
    pub fn lerp(&self, other: &PathCommand, t: f64) -> Option<PathCommand> {
        match (self, other) {
            (PathCommand::MoveTo(a), PathCommand::MoveTo(b)) => {
                Some(PathCommand::MoveTo(mix(*a, *b, t)))
            }
            (PathCommand::LineTo(a), PathCommand::LineTo(b)) => {
                Some(PathCommand::LineTo(mix(*a, *b, t)))
            }
            (
                PathCommand::CubicTo {
                    control1: a1,
                    control2: a2,
                    to: a3,
                },
                PathCommand::CubicTo {
                    control1: b1,
                    control2: b2,
                    to: b3,
                },
            ) => Some(PathCommand::CubicTo {
                control1: mix(*a1, *b1, t),
                control2: mix(*a2, *b2, t),
                to: mix(*a3, *b3, t),
            }),
            _ => None,
        }
    }

    /// Apply `f` to every coordinate of the command.
    pub fn map_points(&self, mut f: impl FnMut(DVec2) -> DVec2) -> PathCommand {
        match *self {
            PathCommand::MoveTo(to) => PathCommand::MoveTo(f(to)),
            PathCommand::LineTo(to) => PathCommand::LineTo(f(to)),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => PathCommand::CubicTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
        }
    }
}

/// A 2D path consisting of drawing commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from a list of commands.
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Get the commands in this path.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Consume the path, returning its commands.
    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Remove every command, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Append a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// `true` when the path draws something: at least one line or curve
    /// after its move.
    pub fn has_visible_segments(&self) -> bool {
        self.commands.len() > 1
    }

    /// Start point (the initial move), if any.
    pub fn first_point(&self) -> Option<DVec2> {
        self.commands.first().map(PathCommand::end_point)
    }

    /// Where the pen rests after the last command, if any.
    pub fn last_point(&self) -> Option<DVec2> {
        self.commands.last().map(PathCommand::end_point)
    }

    /// Iterate over the anchor point of every command.
    pub fn end_points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().map(PathCommand::end_point)
    }

    /// Two paths can be interpolated when they have the same command kinds
    /// in the same order.
    pub fn is_interpolatable(&self, other: &Path) -> bool {
        self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(&other.commands)
                .all(|(a, b)| a.verb() == b.verb())
    }

    /// Pairwise interpolation from `self` (`t = 0`) to `to` (`t = 1`).
    ///
    /// Returns `None` when the paths are not interpolatable.
    pub fn interpolate(&self, to: &Path, t: f64) -> Option<Path> {
        let mut out = Path {
            commands: Vec::with_capacity(self.commands.len()),
        };
        self.interpolate_into(to, t, &mut out).then_some(out)
    }

    /// Like [`Path::interpolate`] but writes into `out`, reusing its
    /// allocation. Returns `false` (leaving `out` cleared) when the paths are
    /// not interpolatable.
    pub fn interpolate_into(&self, to: &Path, t: f64, out: &mut Path) -> bool {
        out.commands.clear();
        if self.commands.len() != to.commands.len() {
            return false;
        }
        for (a, b) in self.commands.iter().zip(&to.commands) {
            match a.lerp(b, t) {
                Some(cmd) => out.commands.push(cmd),
                None => {
                    out.commands.clear();
                    return false;
                }
            }
        }
        true
    }

    /// Iterate over the drawable segments of the path, each paired with the
    /// anchor it starts from.
    pub fn segments(&self) -> Segments<'_> {
        segments(&self.commands)
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl AsRef<[PathCommand]> for Path {
    fn as_ref(&self) -> &[PathCommand] {
        &self.commands
    }
}

/// A drawable piece of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Straight segment.
    Line { from: DVec2, to: DVec2 },
    /// Cubic Bezier segment.
    Cubic(CubicBezier),
}

impl Segment {
    /// Start anchor.
    pub fn from(&self) -> DVec2 {
        match self {
            Segment::Line { from, .. } => *from,
            Segment::Cubic(curve) => curve.from,
        }
    }

    /// End anchor.
    pub fn to(&self) -> DVec2 {
        match self {
            Segment::Line { to, .. } => *to,
            Segment::Cubic(curve) => curve.to,
        }
    }

    /// `true` when `x` lies between the segment's anchors (inclusive, either
    /// direction).
    pub fn spans_x(&self, x: f64) -> bool {
        let (a, b) = (self.from().x, self.to().x);
        x >= a.min(b) && x <= a.max(b)
    }
}

/// Iterator over the segments of a command slice. Allocation free.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    commands: std::slice::Iter<'a, PathCommand>,
    current: Option<DVec2>,
}

/// Segment iterator over a raw command slice.
pub fn segments(commands: &[PathCommand]) -> Segments<'_> {
    Segments {
        commands: commands.iter(),
        current: None,
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        for cmd in self.commands.by_ref() {
            let from = self.current;
            self.current = Some(cmd.end_point());
            // A line or curve without a preceding anchor has nothing to start from.
            let Some(from) = from else { continue };
            match *cmd {
                PathCommand::MoveTo(_) => {}
                PathCommand::LineTo(to) => return Some(Segment::Line { from, to }),
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => return Some(Segment::Cubic(CubicBezier::new(from, control1, control2, to))),
            }
        }
        None
    }
}

/// Builder for constructing paths.
///
/// The first command should be a [`PathBuilder::move_to`]; line and curve
/// commands issued before it are anchored at the origin.
#[derive(Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    current_pos: DVec2,
}

impl PathBuilder {
    /// Create a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
            current_pos: DVec2::ZERO,
        }
    }

    /// Move to a new position without drawing.
    pub fn move_to(&mut self, to: DVec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a line to a position.
    pub fn line_to(&mut self, to: DVec2) -> &mut Self {
        self.ensure_started();
        self.commands.push(PathCommand::LineTo(to));
        self.current_pos = to;
        self
    }

    /// Draw a cubic Bezier curve.
    pub fn cubic_to(&mut self, control1: DVec2, control2: DVec2, to: DVec2) -> &mut Self {
        self.ensure_started();
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current_pos = to;
        self
    }

    /// Get the current position.
    pub fn current_pos(&self) -> DVec2 {
        self.current_pos
    }

    /// Number of commands so far.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// `true` when no command has been issued.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Build the path.
    pub fn build(self) -> Path {
        Path {
            commands: self.commands,
        }
    }

    fn ensure_started(&mut self) {
        if self.commands.is_empty() {
            self.commands.push(PathCommand::MoveTo(self.current_pos));
        }
    }
}

/// Exact at both ends: `t = 0` gives `a` and `t = 1` gives `b`.
#[inline]
fn mix(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a * (1.0 - t) + b * t
}
