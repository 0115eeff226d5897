//! The graph facade tying the data lane and the interaction lane together.

use crate::animation::{AnimationTarget, SpringConfig};
use crate::config::{GraphConfig, GraphStyle, GestureConfig, check_padding, path_config};
use crate::dirty::GraphDirtyFlags;
use crate::error::Result;
use crate::events::{
    EventHoverTracker, GraphEvent, HoverChange, PlacedEvent, entering_opacity, event_radius_target,
    is_event_active, place_events,
};
use crate::indicator::{
    INDICATOR_BORDER_MULTIPLIER, IndicatorFrame, Pulse, indicator_position, indicator_radius_target,
    pulse_visuals,
};
use crate::listener::GraphListener;
use crate::selection::{ScrubContext, Selection, SelectionState};
use crate::snapshot::{GraphSnapshot, SnapshotCell};
use crate::style::StrokeGradient;
use crate::transition::{PathTransition, Retarget, TransitionState};
use glam::DVec2;
use linegraph_core::GraphPoint;
use linegraph_core::profiling::{profile_function, profile_scope};
use linegraph_geometry::{DrawingRect, GraphPathBuilder, GraphRange, Path, Sampling, points_in_range};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// One event marker for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventFrame {
    pub index: usize,
    pub position: DVec2,
    pub active: bool,
    /// Radius to animate towards.
    pub radius_target: f64,
    pub opacity: f64,
}

/// Everything a renderer needs for one frame.
///
/// Reuse one `Frame` across calls to [`LineGraph::frame_into`] to keep the
/// path buffers allocated.
#[derive(Debug, Clone)]
pub struct Frame {
    pub stroke: Path,
    /// Empty unless a gradient fill is configured.
    pub fill: Path,
    pub stroke_gradient: StrokeGradient,
    pub path_end: f64,
    /// Present once the pointer has found the curve.
    pub selection_dot: Option<DVec2>,
    pub selection_dot_radius_target: f64,
    pub indicator: IndicatorFrame,
    pub events: Vec<EventFrame>,
    /// Generation of the snapshot the frame was built from, 0 for none.
    pub generation: u64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            stroke: Path::new(),
            fill: Path::new(),
            stroke_gradient: StrokeGradient::new(linegraph_core::Color::BLACK, 1.0, false),
            path_end: 1.0,
            selection_dot: None,
            selection_dot_radius_target: 0.0,
            indicator: IndicatorFrame::default(),
            events: Vec::new(),
            generation: 0,
        }
    }
}

/// An animated line graph.
///
/// Data-lane calls (setters and [`rebuild`](LineGraph::rebuild)) record what
/// changed and rebuild paths only when needed. Interaction-lane calls
/// ([`pointer_moved`](LineGraph::pointer_moved),
/// [`frame_into`](LineGraph::frame_into)) read the latest published
/// [`GraphSnapshot`] and never rebuild.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Instant;
/// use linegraph::{GraphConfig, GraphPoint, LineGraph};
///
/// let mut graph: LineGraph = LineGraph::new(GraphConfig::new("#3a86ff")).unwrap();
/// graph.set_points(Arc::from(vec![
///     GraphPoint::from((0, 1.0)),
///     GraphPoint::from((1_000, 3.0)),
///     GraphPoint::from((2_000, 2.0)),
/// ]));
/// graph.set_canvas_size(300, 120);
///
/// let target = graph.rebuild().expect("measured canvas with points");
/// assert_eq!(target.value, 1.0);
///
/// let frame = graph.frame(1.0, Instant::now());
/// assert_eq!(frame.stroke.len(), 3);
/// ```
#[derive(Debug)]
pub struct LineGraph<P = ()> {
    style: GraphStyle,
    range: GraphRange,
    points: Arc<[GraphPoint]>,
    events: Vec<GraphEvent<P>>,
    canvas: DrawingRect,
    dirty: GraphDirtyFlags,

    stroke: PathTransition,
    fill: PathTransition,
    snapshots: SnapshotCell,
    generation: u64,

    selection: Selection,
    hover: EventHoverTracker,
    hover_changes: Vec<HoverChange>,
    pointer_x: f64,
    pulse: Pulse,
    pulse_armed: bool,
}

impl<P> LineGraph<P> {
    /// Create a graph from a validated configuration.
    pub fn new(config: GraphConfig) -> Result<Self> {
        let style = config.validate()?;
        debug!(color = %style.hex, indicator = style.indicator_enabled, "line graph created");
        Ok(Self {
            pulse_armed: style.indicator_enabled && style.indicator_pulsating,
            style,
            range: config.range,
            points: Arc::from(Vec::new()),
            events: Vec::new(),
            canvas: DrawingRect::default(),
            dirty: GraphDirtyFlags::all(),
            stroke: PathTransition::default(),
            fill: PathTransition::default(),
            snapshots: SnapshotCell::new(),
            generation: 0,
            selection: Selection::new(),
            hover: EventHoverTracker::default(),
            hover_changes: Vec::new(),
            pointer_x: 0.0,
            pulse: Pulse::default(),
        })
    }

    pub fn style(&self) -> &GraphStyle {
        &self.style
    }

    /// Setup for the host pan gesture recognizer.
    pub fn gesture_config(&self) -> GestureConfig {
        self.style.gesture
    }

    pub fn dirty_flags(&self) -> GraphDirtyFlags {
        self.dirty
    }

    /// A handle other threads can read snapshots from.
    pub fn snapshots(&self) -> SnapshotCell {
        self.snapshots.clone()
    }

    pub fn snapshot(&self) -> Option<Arc<GraphSnapshot>> {
        self.snapshots.load()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn transition_state(&self) -> TransitionState {
        self.stroke.state()
    }

    /// Progress the host animation should start from after a rebuild: 0 after
    /// a morph, 1 after a cut.
    pub fn transition_progress(&self) -> f64 {
        self.stroke.progress()
    }

    // ====================
    // Data lane
    // ====================

    /// Replace the point set. Sets are compared by identity, so passing the
    /// same `Arc` again is not a change.
    pub fn set_points(&mut self, points: Arc<[GraphPoint]>) {
        if !Arc::ptr_eq(&self.points, &points) {
            self.points = points;
            self.dirty |= GraphDirtyFlags::POINTS;
        }
    }

    pub fn set_range(&mut self, range: GraphRange) {
        if self.range != range {
            self.range = range;
            self.dirty |= GraphDirtyFlags::RANGE;
        }
    }

    /// Canvas size reported by the host layout.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        let (width, height) = (f64::from(width), f64::from(height));
        if self.canvas.width != width || self.canvas.height != height {
            self.canvas.width = width;
            self.canvas.height = height;
            self.dirty |= GraphDirtyFlags::SIZE;
        }
    }

    pub fn set_smoothing(&mut self, smoothing: f64) -> Result<()> {
        self.set_path_config(smoothing, self.style.path.sampling)
    }

    pub fn set_sampling(&mut self, sampling: Sampling) -> Result<()> {
        self.set_path_config(self.style.path.smoothing, sampling)
    }

    fn set_path_config(&mut self, smoothing: f64, sampling: Sampling) -> Result<()> {
        let path = path_config(smoothing, sampling)?;
        if self.style.path != path {
            self.style.path = path;
            self.dirty |= GraphDirtyFlags::SMOOTHING;
        }
        Ok(())
    }

    pub fn set_padding(&mut self, horizontal: f64, vertical: f64) -> Result<()> {
        check_padding(horizontal, vertical)?;
        if self.style.horizontal_padding != horizontal || self.style.vertical_padding != vertical {
            self.style.horizontal_padding = horizontal;
            self.style.vertical_padding = vertical;
            self.dirty |= GraphDirtyFlags::PADDING;
        }
        Ok(())
    }

    pub fn set_events(&mut self, events: Vec<GraphEvent<P>>) {
        self.events = events;
        self.dirty |= GraphDirtyFlags::EVENTS;
    }

    /// Rebuild and publish if anything changed.
    ///
    /// Nothing happens until the canvas is measured and at least one point
    /// falls inside the x range; the pending changes are kept until then.
    /// Returns the animation the host should run on the progress scalar
    /// when new paths were published, starting from
    /// [`transition_progress`](LineGraph::transition_progress).
    pub fn rebuild(&mut self) -> Option<AnimationTarget> {
        profile_function!();
        if self.dirty.is_empty() || !self.canvas.is_measured() {
            return None;
        }
        if self.dirty.is_events_only()
            && let Some(previous) = self.snapshots.load()
        {
            let events = place_events(&self.events, &previous.mapper, previous.target.commands());
            self.publish(GraphSnapshot {
                events,
                placed_at: Instant::now(),
                ..(*previous).clone()
            });
            self.dirty = GraphDirtyFlags::empty();
            return None;
        }

        let range = self.range.resolve(&self.points)?;
        let in_range: Arc<[GraphPoint]> = Arc::from(points_in_range(&self.points, range.x));
        if in_range.is_empty() {
            return None;
        }

        let rect = self
            .canvas
            .with_padding(self.style.horizontal_padding, self.style.vertical_padding);
        let builder = GraphPathBuilder::new(range, rect, self.style.path);

        let paths = {
            profile_scope!("build_paths");
            builder.build_with_fill(&in_range)
        };

        if self.generation == 0 {
            let flat = builder.build_flat(&in_range);
            self.fill.reset(builder.fill_for(&flat));
            self.stroke.reset(flat);
        }

        let outcome = self.stroke.retarget(paths.path.clone());
        let fill = self.style.fill.as_ref().map(|_| {
            self.fill.retarget(paths.fill_path);
            self.fill.pair().clone()
        });

        let events = place_events(&self.events, builder.mapper(), paths.path.commands());
        self.selection.data_changed();

        debug!(
            points = in_range.len(),
            commands = paths.path.len(),
            dirty = ?self.dirty,
            morph = outcome == Retarget::Morph,
            "rebuilt graph paths"
        );

        self.publish(GraphSnapshot {
            stroke: self.stroke.pair().clone(),
            fill,
            target: paths.path,
            mapper: *builder.mapper(),
            points: in_range,
            events,
            placed_at: Instant::now(),
            generation: 0,
        });
        self.dirty = GraphDirtyFlags::empty();

        Some(AnimationTarget::spring(1.0, SpringConfig::PATH_TRANSITION))
    }

    fn publish(&mut self, mut snapshot: GraphSnapshot) {
        profile_function!();
        self.generation += 1;
        snapshot.generation = self.generation;
        self.snapshots.publish(snapshot);
    }

    // ====================
    // Interaction lane
    // ====================

    /// Progress value from the host animation driver.
    ///
    /// [`frame_into`](LineGraph::frame_into) records the progress it draws
    /// with, so hosts that render every tick need not call this.
    pub fn set_progress(&mut self, progress: f64) {
        self.stroke.set_progress(progress);
        self.fill.set_progress(progress);
    }

    /// Report the pan gesture engaging or releasing.
    ///
    /// Ignored when the pan gesture is disabled.
    pub fn set_gesture_active(&mut self, active: bool, now: Instant, listener: &mut dyn GraphListener) {
        if !self.style.gesture.enabled {
            return;
        }
        if active {
            if self.selection.begin() {
                trace!("gesture start");
                self.pulse.stop();
                self.pulse_armed = false;
                listener.on_gesture_start();
            }
        } else if self.selection.end() {
            trace!("gesture end");
            listener.on_gesture_end();
            if self.style.indicator_enabled && self.style.indicator_pulsating {
                self.pulse.start(now);
            }
            if let Some(change) = self.hover.clear() {
                listener.on_event_hover(change.index, change.shown);
            }
        }
    }

    /// Report a pointer x position in canvas pixels.
    pub fn pointer_moved(&mut self, x: f64, listener: &mut dyn GraphListener) {
        let Some(snapshot) = self.snapshots.load() else {
            return;
        };
        let ctx = ScrubContext {
            commands: snapshot.target.commands(),
            rect: *snapshot.mapper.rect(),
            line_width: snapshot.line_width(),
            point_count: snapshot.points.len(),
        };
        let Some(update) = self.selection.pointer_moved(x, &ctx) else {
            return;
        };
        self.pointer_x = update.x;

        if let Some(point) = update.selected.and_then(|i| snapshot.points.get(i)) {
            listener.on_point_selected(point);
        }

        self.hover_changes.clear();
        self.hover.update(
            &snapshot.events,
            self.selection.is_active(),
            self.pointer_x,
            &mut self.hover_changes,
        );
        for change in &self.hover_changes {
            listener.on_event_hover(change.index, change.shown);
        }
    }

    /// Evaluate the frame at `progress` into `frame`, reusing its buffers.
    ///
    /// `progress` becomes the transition progress, so the next rebuild
    /// morphs from exactly what was drawn.
    pub fn frame_into(&mut self, progress: f64, now: Instant, frame: &mut Frame) {
        self.set_progress(progress);
        if self.pulse_armed && !self.selection.is_active() {
            self.pulse.start(now);
            self.pulse_armed = false;
        }

        let graph_active = self.selection.is_active();
        let path_end = self.selection.path_end();
        frame.path_end = path_end;
        frame.stroke_gradient = StrokeGradient::new(self.style.color, path_end, self.style.fade_in_mask);
        frame.selection_dot = self.selection.dot();
        frame.selection_dot_radius_target = self.selection.dot_radius_target().value;
        frame.events.clear();

        let Some(snapshot) = self.snapshots.load() else {
            frame.stroke.clear();
            frame.fill.clear();
            frame.indicator = IndicatorFrame::default();
            frame.generation = 0;
            return;
        };
        frame.generation = snapshot.generation;

        snapshot.stroke.at_into(progress, &mut frame.stroke);
        match &snapshot.fill {
            Some(fill) => fill.at_into(progress, &mut frame.fill),
            None => frame.fill.clear(),
        }

        let radius_target = indicator_radius_target(graph_active).value;
        let (pulse_radius, pulse_opacity) = if graph_active {
            (0.0, 0.0)
        } else {
            pulse_visuals(self.pulse.value(now))
        };
        frame.indicator = IndicatorFrame {
            visible: self.style.indicator_enabled,
            pulsating: self.style.indicator_pulsating && !graph_active,
            position: indicator_position(
                snapshot.target.commands(),
                snapshot.line_width(),
                snapshot.mapper.rect().left(),
            ),
            radius_target,
            border_radius: radius_target * INDICATOR_BORDER_MULTIPLIER,
            pulse_radius,
            pulse_opacity,
        };

        let opacity = entering_opacity(now.saturating_duration_since(snapshot.placed_at));
        let pointer_x = self.pointer_x;
        frame.events.extend(snapshot.events.iter().map(|event: &PlacedEvent| {
            let active = is_event_active(graph_active, pointer_x, event.position.x);
            EventFrame {
                index: event.index,
                position: event.position,
                active,
                radius_target: event_radius_target(active).value,
                opacity,
            }
        }));
    }

    /// Allocating convenience over [`frame_into`](LineGraph::frame_into).
    pub fn frame(&mut self, progress: f64, now: Instant) -> Frame {
        let mut frame = Frame::default();
        self.frame_into(progress, now, &mut frame);
        frame
    }

    /// The event list last set, for looking up payloads by index.
    pub fn events(&self) -> &[GraphEvent<P>] {
        &self.events
    }
}
