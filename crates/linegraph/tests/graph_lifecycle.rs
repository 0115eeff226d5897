//! Data-lane tests: configuration, dirty tracking, rebuilds and transitions.

mod common;

use common::{settled_graph, shared};
use linegraph::{
    ColorError, GraphConfig, GraphDirtyFlags, GraphError, GraphEvent, GraphRange, LineGraph,
    PathCommand, Sampling, TransitionState,
};
use linegraph_test_utils::{assert_approx_eq, fixtures};
use std::time::Instant;

// ====================
// Configuration
// ====================

#[test]
fn test_short_hex_is_expanded() {
    let graph: LineGraph = LineGraph::new(GraphConfig::new("#abc")).unwrap();
    assert_eq!(graph.style().hex, "#aabbcc");
}

#[test]
fn test_color_without_hash_is_rejected() {
    let err = LineGraph::<()>::new(GraphConfig::new("abc")).unwrap_err();
    assert!(matches!(err, GraphError::InvalidColor(ColorError::MissingHash { .. })));
}

#[test]
fn test_invalid_setters_leave_graph_clean() {
    let mut graph = settled_graph(GraphConfig::new("#fff"), fixtures::wave_points(8, 1_000));

    assert_eq!(graph.set_smoothing(-0.1), Err(GraphError::InvalidSmoothing(-0.1)));
    assert_eq!(
        graph.set_sampling(Sampling::PixelStride(f64::INFINITY)),
        Err(GraphError::InvalidPixelStride(f64::INFINITY))
    );
    assert!(graph.set_padding(-1.0, 0.0).is_err());
    assert!(graph.dirty_flags().is_empty());
}

// ====================
// Dirty Tracking
// ====================

#[test]
fn test_rebuild_waits_for_measurement() {
    let mut graph: LineGraph = LineGraph::new(GraphConfig::new("#000")).unwrap();
    graph.set_points(shared(fixtures::scenario_points()));

    assert!(graph.rebuild().is_none());
    assert!(graph.dirty_flags().contains(GraphDirtyFlags::POINTS));
    assert!(graph.snapshot().is_none());

    graph.set_canvas_size(100, 100);
    assert!(graph.rebuild().is_some());
    assert!(graph.dirty_flags().is_empty());
    assert_eq!(graph.snapshots().generation(), 1);
}

#[test]
fn test_rebuild_without_points_in_range_publishes_nothing() {
    let mut graph: LineGraph = LineGraph::new(GraphConfig::new("#000")).unwrap();
    graph.set_canvas_size(100, 100);
    assert!(graph.rebuild().is_none(), "no points");

    graph.set_points(shared(fixtures::scenario_points()));
    graph.set_range(GraphRange::auto().with_x(10_000, 20_000));
    assert!(graph.rebuild().is_none(), "all points outside the x range");
    assert!(graph.snapshot().is_none());

    graph.set_range(GraphRange::auto());
    assert!(graph.rebuild().is_some());
}

#[test]
fn test_unchanged_inputs_do_not_rebuild() {
    let points = shared(fixtures::wave_points(12, 500));
    let mut graph: LineGraph = LineGraph::new(GraphConfig::new("#000")).unwrap();
    graph.set_points(points.clone());
    graph.set_canvas_size(200, 100);
    graph.rebuild().unwrap();

    graph.set_points(points.clone());
    graph.set_canvas_size(200, 100);
    graph.set_smoothing(0.2).unwrap();
    graph.set_padding(0.0, 3.0).unwrap();
    assert!(graph.dirty_flags().is_empty());
    assert!(graph.rebuild().is_none());
    assert_eq!(graph.snapshots().generation(), 1);

    // Same contents, different set.
    graph.set_points(shared(points.to_vec()));
    assert_eq!(graph.dirty_flags(), GraphDirtyFlags::POINTS);

    graph.set_canvas_size(201, 100);
    graph.set_smoothing(0.5).unwrap();
    assert!(graph.dirty_flags().contains(GraphDirtyFlags::SIZE | GraphDirtyFlags::SMOOTHING));
    assert!(graph.rebuild().is_some());
    assert_eq!(graph.snapshots().generation(), 2);
}

#[test]
fn test_events_only_change_keeps_paths() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    let before = graph.snapshot().unwrap();

    graph.set_events(vec![GraphEvent::new(1, "peak")]);
    assert!(graph.dirty_flags().is_events_only());
    assert!(graph.rebuild().is_none(), "no path animation for an events-only change");

    let after = graph.snapshot().unwrap();
    assert_eq!(after.generation, before.generation + 1);
    assert_eq!(after.target, before.target);
    assert_eq!(after.events.len(), 1);
    assert_approx_eq!(after.events[0].position.x, 100.0);
    assert_eq!(graph.events()[after.events[0].index].payload, "peak");
}

#[test]
fn test_events_outside_range_are_not_placed() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    graph.set_events(vec![GraphEvent::new(-5, "before"), GraphEvent::new(1, "peak")]);
    graph.rebuild();

    let snapshot = graph.snapshot().unwrap();
    assert_eq!(snapshot.events.len(), 1);
    assert_eq!(snapshot.events[0].index, 1);
}

// ====================
// Transitions
// ====================

#[test]
fn test_first_build_morphs_from_flat_midline() {
    let mut graph: LineGraph = LineGraph::new(GraphConfig::new("#000")).unwrap();
    graph.set_points(shared(fixtures::wave_points(10, 1_000)));
    graph.set_canvas_size(200, 100);

    let target = graph.rebuild().unwrap();
    assert_eq!(target.value, 1.0);
    assert_eq!(graph.transition_state(), TransitionState::Transitioning);
    assert_eq!(graph.transition_progress(), 0.0);

    let snapshot = graph.snapshot().unwrap();
    assert_eq!(snapshot.stroke.to, snapshot.target);
    for command in snapshot.stroke.from.commands() {
        match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => assert_approx_eq!(p.y, 50.0),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                assert_approx_eq!(control1.y, 50.0);
                assert_approx_eq!(control2.y, 50.0);
                assert_approx_eq!(to.y, 50.0);
            }
        }
    }

    let frame = graph.frame(0.0, Instant::now());
    assert_eq!(frame.stroke, snapshot.stroke.from);
    let frame = graph.frame(1.0, Instant::now());
    assert_eq!(frame.stroke, snapshot.target);
}

#[test]
fn test_incompatible_data_cuts_to_new_path() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::wave_points(10, 1_000));
    assert_eq!(graph.transition_state(), TransitionState::Idle);

    graph.set_points(shared(fixtures::points(&[(0, 1.0), (1_000, 4.0), (2_000, 2.0)])));
    assert!(graph.rebuild().is_some());

    let snapshot = graph.snapshot().unwrap();
    assert_eq!(snapshot.target.len(), 3);
    assert_eq!(snapshot.stroke.from, snapshot.target);
    assert_eq!(snapshot.stroke.to, snapshot.target);
    assert_eq!(graph.transition_progress(), 1.0);
    assert_eq!(graph.transition_state(), TransitionState::Idle);

    let frame = graph.frame(0.0, Instant::now());
    assert_eq!(frame.stroke, snapshot.target, "nothing to morph from");
}

#[test]
fn test_same_shape_data_morphs_from_previous_path() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::flat_points(6, 1.0));
    let previous = graph.snapshot().unwrap().target.clone();

    graph.set_points(shared(fixtures::wave_points(6, 1_000)));
    graph.rebuild().unwrap();

    let snapshot = graph.snapshot().unwrap();
    assert_eq!(snapshot.stroke.from, previous);
    assert_eq!(graph.transition_progress(), 0.0);

    graph.set_progress(0.5);
    let halfway = graph.frame(0.5, Instant::now());
    assert_eq!(halfway.stroke, previous.interpolate(&snapshot.target, 0.5).unwrap());
}

#[test]
fn test_retarget_mid_flight_uses_drawn_progress() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::flat_points(6, 1.0));
    let flat = graph.snapshot().unwrap().target.clone();

    graph.set_points(shared(fixtures::wave_points(6, 1_000)));
    graph.rebuild().unwrap();
    let wave = graph.snapshot().unwrap().target.clone();

    // The host only draws; it never calls set_progress.
    let drawn = graph.frame(0.5, Instant::now()).stroke;
    assert_eq!(graph.transition_progress(), 0.5);
    assert_eq!(graph.transition_state(), TransitionState::Transitioning);
    assert_ne!(drawn, flat);
    assert_ne!(drawn, wave);

    graph.set_points(shared(fixtures::flat_points(6, 1.0)));
    graph.rebuild().unwrap();
    let snapshot = graph.snapshot().unwrap();
    assert_eq!(snapshot.stroke.from, drawn);
    assert_eq!(snapshot.stroke.to, flat);
    assert_eq!(graph.transition_progress(), 0.0);
}

#[test]
fn test_fill_follows_stroke_when_configured() {
    let plain = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    assert!(plain.snapshot().unwrap().fill.is_none());

    let mut filled = settled_graph(
        GraphConfig::new("#000").gradient_fill_colors(["#3a86ff", "#ffffff00"]),
        fixtures::scenario_points(),
    );
    let snapshot = filled.snapshot().unwrap();
    let fill = snapshot.fill.as_ref().unwrap();
    assert_eq!(fill.to.len(), snapshot.target.len() + 2);

    let frame = filled.frame(1.0, Instant::now());
    assert_eq!(frame.fill, fill.to);
    let baseline = snapshot.mapper.rect().baseline();
    assert_eq!(frame.fill.last_point().unwrap().y, baseline);
}

#[test]
fn test_pixel_stride_sampling() {
    let mut graph = settled_graph(
        GraphConfig::new("#000").sampling(Sampling::pixel_stride()),
        fixtures::jagged_points(),
    );
    let per_stride = graph.snapshot().unwrap().target.len();
    assert!(per_stride > fixtures::jagged_points().len());

    graph.set_sampling(Sampling::PerPoint).unwrap();
    graph.rebuild().unwrap();
    assert_eq!(graph.snapshot().unwrap().target.len(), fixtures::jagged_points().len());
}
