//! Pointer scrubbing state machine.
//!
//! While the pointer is engaged, every x update clamps the pointer to the
//! drawing area, looks up the curve's y there, and maps the position back to
//! the nearest point index. A selection is reported only when that index
//! changes.

use crate::animation::{AnimationTarget, SpringConfig};
use glam::DVec2;
use linegraph_geometry::{DrawingRect, PathCommand, y_for_x};

/// Radius of the selection dot while active.
pub const CIRCLE_RADIUS: f64 = 5.0;
/// Halo radius relative to the dot radius.
pub const CIRCLE_RADIUS_MULTIPLIER: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Inactive,
    Active,
}

/// Geometry a pointer update is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct ScrubContext<'a> {
    /// Stroke commands of the target path.
    pub commands: &'a [PathCommand],
    pub rect: DrawingRect,
    /// x-offset of the last in-range point.
    pub line_width: f64,
    pub point_count: usize,
}

/// Outcome of one pointer update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerUpdate {
    /// Pointer x after clamping.
    pub x: f64,
    /// Index to report, present only when it differs from the previous one.
    pub selected: Option<usize>,
}

/// Tracks the engaged pointer, the selection dot and the visible fraction of
/// the stroke.
#[derive(Debug, Clone)]
pub struct Selection {
    state: SelectionState,
    dot: Option<DVec2>,
    last_index: Option<usize>,
    path_end: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            state: SelectionState::Inactive,
            dot: None,
            last_index: None,
            path_end: 1.0,
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SelectionState::Active
    }

    /// Enter the active state. Returns `false` if already active.
    pub fn begin(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = SelectionState::Active;
        true
    }

    /// Leave the active state. Forgets the selected index and shows the
    /// whole stroke again. Returns `false` if already inactive.
    pub fn end(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = SelectionState::Inactive;
        self.last_index = None;
        self.path_end = 1.0;
        true
    }

    /// Process a pointer x position.
    ///
    /// The dot keeps its last position when the curve has no value at the
    /// clamped x. Inactive selections ignore pointer updates.
    pub fn pointer_moved(&mut self, x: f64, ctx: &ScrubContext<'_>) -> Option<PointerUpdate> {
        if !self.is_active() || ctx.point_count == 0 {
            return None;
        }
        let x = ctx.rect.clamp_x(x);

        if let Some(y) = y_for_x(ctx.commands, x) {
            self.dot = Some(DVec2::new(x, y));
        }
        if ctx.rect.width > 0.0 {
            self.path_end = (x / ctx.rect.width).clamp(0.0, 1.0);
        }

        let index = nearest_index(x, ctx);
        let selected = (self.last_index != Some(index)).then(|| {
            self.last_index = Some(index);
            index
        });
        Some(PointerUpdate { x, selected })
    }

    /// Last position the curve was found at.
    pub fn dot(&self) -> Option<DVec2> {
        self.dot
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Fraction of the canvas width drawn at full alpha.
    pub fn path_end(&self) -> f64 {
        self.path_end
    }

    /// Reset after new data: nothing selected, full stroke.
    pub fn data_changed(&mut self) {
        self.last_index = None;
        if !self.is_active() {
            self.path_end = 1.0;
        }
    }

    /// Radius the dot should spring to.
    pub fn dot_radius_target(&self) -> AnimationTarget {
        let radius = if self.is_active() { CIRCLE_RADIUS } else { 0.0 };
        AnimationTarget::spring(radius, SpringConfig::INDICATOR)
    }
}

/// `round(fraction * (count - 1))` where `fraction` is the clamped pointer's
/// position along the drawn line.
fn nearest_index(x: f64, ctx: &ScrubContext<'_>) -> usize {
    let last = ctx.point_count.saturating_sub(1);
    if last == 0 || ctx.line_width <= 0.0 {
        return 0;
    }
    let fraction = ((x - ctx.rect.left()).max(0.0) / ctx.line_width).clamp(0.0, 1.0);
    ((fraction * last as f64).round() as usize).min(last)
}
