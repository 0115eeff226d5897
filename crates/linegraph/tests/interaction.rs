//! Interaction-lane tests: gestures, scrubbing, indicator pulse, event hover
//! and snapshot readers on other threads.

mod common;

use common::{Call, RecordingListener, settled_graph, shared};
use linegraph::indicator::{INDICATOR_PULSE_RADIUS_BIG, INDICATOR_PULSE_RADIUS_SMALL, INDICATOR_RADIUS};
use linegraph::selection::CIRCLE_RADIUS;
use linegraph::{GraphConfig, GraphEvent, SelectionState};
use linegraph_test_utils::{assert_approx_eq, fixtures, pointer_sweep};
use std::time::{Duration, Instant};

fn scrubbable() -> GraphConfig {
    GraphConfig::new("#3a86ff").enable_pan_gesture(true)
}

// ====================
// Gestures
// ====================

#[test]
fn test_disabled_gesture_is_ignored() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    let mut listener = RecordingListener::new();

    graph.set_gesture_active(true, Instant::now(), &mut listener);
    graph.pointer_moved(100.0, &mut listener);

    assert!(listener.calls().is_empty());
    assert_eq!(graph.selection_state(), SelectionState::Inactive);
    assert!(graph.frame(1.0, Instant::now()).selection_dot.is_none());
}

#[test]
fn test_gesture_callbacks_fire_once_per_transition() {
    let mut graph = settled_graph(scrubbable(), fixtures::scenario_points());
    let mut listener = RecordingListener::new();
    let now = Instant::now();

    graph.set_gesture_active(true, now, &mut listener);
    graph.set_gesture_active(true, now, &mut listener);
    graph.set_gesture_active(false, now, &mut listener);
    graph.set_gesture_active(false, now, &mut listener);

    assert_eq!(listener.calls(), vec![Call::GestureStart, Call::GestureEnd]);
    assert_eq!(graph.gesture_config().activation_delay, Duration::from_millis(300));
}

// ====================
// Scrubbing
// ====================

#[test]
fn test_sweep_reports_each_index_once() {
    let points = fixtures::wave_points(5, 1_000);
    let mut graph = settled_graph(scrubbable(), points.clone());
    let mut listener = RecordingListener::new();

    graph.set_gesture_active(true, Instant::now(), &mut listener);
    for x in pointer_sweep(-20.0, 220.0, 1.0) {
        graph.pointer_moved(x, &mut listener);
    }

    let selected = listener.selections();
    assert_eq!(selected, points);
    assert!(selected.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn test_back_and_forth_sweep_never_repeats() {
    let points = fixtures::wave_points(9, 250);
    let mut graph = settled_graph(scrubbable(), points.clone());
    let mut listener = RecordingListener::new();

    graph.set_gesture_active(true, Instant::now(), &mut listener);
    let sweep = pointer_sweep(0.0, 200.0, 3.0).chain(pointer_sweep(200.0, 0.0, 7.0));
    for x in sweep {
        graph.pointer_moved(x, &mut listener);
    }

    let selected = listener.selections();
    assert!(selected.windows(2).all(|w| w[0] != w[1]));
    assert_eq!(selected.first(), points.first());
    assert_eq!(selected.last(), points.first());
    assert_eq!(selected.len(), 2 * (points.len() - 1) + 1);
}

#[test]
fn test_selection_dot_and_path_end_follow_pointer() {
    let mut graph = settled_graph(scrubbable(), fixtures::scenario_points());
    let mut listener = RecordingListener::new();
    let now = Instant::now();

    graph.set_gesture_active(true, now, &mut listener);
    graph.pointer_moved(100.0, &mut listener);

    let frame = graph.frame(1.0, now);
    let dot = frame.selection_dot.unwrap();
    assert_approx_eq!(dot.x, 100.0);
    assert_approx_eq!(dot.y, 3.0, 1e-3);
    assert_eq!(frame.selection_dot_radius_target, CIRCLE_RADIUS);
    assert_approx_eq!(frame.path_end, 0.5);
    assert_approx_eq!(frame.stroke_gradient.positions()[2], 0.5);
    assert_eq!(listener.selections(), vec![fixtures::scenario_points()[1]]);

    graph.set_gesture_active(false, now, &mut listener);
    let frame = graph.frame(1.0, now);
    assert_eq!(frame.path_end, 1.0);
    assert_eq!(frame.selection_dot_radius_target, 0.0);
}

#[test]
fn test_new_data_resets_selected_index() {
    let mut graph = settled_graph(scrubbable(), fixtures::scenario_points());
    let mut listener = RecordingListener::new();

    graph.set_gesture_active(true, Instant::now(), &mut listener);
    graph.pointer_moved(100.0, &mut listener);
    graph.pointer_moved(100.0, &mut listener);
    assert_eq!(listener.selections().len(), 1);

    graph.set_points(shared(fixtures::points(&[(0, 5.0), (1, 6.0), (2, 4.0)])));
    graph.rebuild().unwrap();
    graph.pointer_moved(100.0, &mut listener);

    let selected = listener.selections();
    assert_eq!(selected.len(), 2);
    assert_eq!(selected[1].value, 6.0);
}

// ====================
// Indicator
// ====================

#[test]
fn test_indicator_pulse_lifecycle() {
    let config = scrubbable().enable_indicator(true).indicator_pulsating(true);
    let mut graph = settled_graph(config, fixtures::wave_points(6, 1_000));
    let mut listener = RecordingListener::new();
    let start = Instant::now();

    let frame = graph.frame(1.0, start);
    assert!(frame.indicator.visible);
    assert!(frame.indicator.pulsating);
    assert_eq!(frame.indicator.position.x, 190.0);
    assert_eq!(frame.indicator.radius_target, INDICATOR_RADIUS);
    assert_approx_eq!(frame.indicator.pulse_radius, INDICATOR_PULSE_RADIUS_SMALL);
    assert_approx_eq!(frame.indicator.pulse_opacity, 1.0);

    let frame = graph.frame(1.0, start + Duration::from_millis(5_000));
    assert_approx_eq!(frame.indicator.pulse_radius, INDICATOR_PULSE_RADIUS_BIG);
    assert_approx_eq!(frame.indicator.pulse_opacity, 0.0);

    let grabbed = start + Duration::from_millis(5_500);
    graph.set_gesture_active(true, grabbed, &mut listener);
    let frame = graph.frame(1.0, grabbed);
    assert!(!frame.indicator.pulsating);
    assert_eq!(frame.indicator.radius_target, 0.0);
    assert_eq!(frame.indicator.pulse_radius, 0.0);

    let released = start + Duration::from_secs(10);
    graph.set_gesture_active(false, released, &mut listener);
    let frame = graph.frame(1.0, released);
    assert!(frame.indicator.pulsating);
    assert_approx_eq!(frame.indicator.pulse_radius, INDICATOR_PULSE_RADIUS_SMALL);
}

#[test]
fn test_indicator_moves_with_published_padding() {
    let config = GraphConfig::new("#000").enable_indicator(true);
    let mut graph = settled_graph(config, fixtures::wave_points(6, 1_000));
    let now = Instant::now();
    let before = graph.frame(1.0, now).indicator.position;
    assert_eq!(before.x, 190.0);

    graph.set_padding(40.0, 3.0).unwrap();
    assert_eq!(graph.frame(1.0, now).indicator.position, before, "not yet rebuilt");

    graph.rebuild().unwrap();
    let after = graph.frame(1.0, now).indicator.position;
    assert_eq!(after.x, 160.0);
    let rect = *graph.snapshot().unwrap().mapper.rect();
    assert!(rect.left() <= after.x && after.x <= rect.left() + rect.drawing_width());
}

#[test]
fn test_indicator_without_pulse() {
    let config = GraphConfig::new("#000").enable_indicator(true);
    let mut graph = settled_graph(config, fixtures::scenario_points());

    let frame = graph.frame(1.0, Instant::now());
    assert!(frame.indicator.visible);
    assert!(!frame.indicator.pulsating);

    let mut hidden = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    assert!(!hidden.frame(1.0, Instant::now()).indicator.visible);
}

// ====================
// Events
// ====================

#[test]
fn test_event_hover_show_and_hide() {
    let mut graph = settled_graph(scrubbable(), fixtures::scenario_points());
    graph.set_events(vec![GraphEvent::new(1, "peak")]);
    graph.rebuild();

    let mut listener = RecordingListener::new();
    let now = Instant::now();
    graph.set_gesture_active(true, now, &mut listener);

    graph.pointer_moved(60.0, &mut listener);
    assert!(listener.hovers().is_empty());

    graph.pointer_moved(95.0, &mut listener);
    graph.pointer_moved(99.0, &mut listener);
    assert_eq!(listener.hovers(), vec![(0, true)]);

    let frame = graph.frame(1.0, now);
    assert!(frame.events[0].active);
    assert_eq!(frame.events[0].radius_target, 8.0);

    graph.pointer_moved(150.0, &mut listener);
    graph.pointer_moved(101.0, &mut listener);
    assert_eq!(listener.hovers(), vec![(0, true), (0, false), (0, true)]);

    graph.set_gesture_active(false, now, &mut listener);
    let calls = listener.calls();
    assert_eq!(&calls[calls.len() - 2..], &[Call::GestureEnd, Call::EventHover(0, false)]);

    let frame = graph.frame(1.0, now);
    assert!(!frame.events[0].active);
    assert_eq!(frame.events[0].radius_target, 6.0);
}

#[test]
fn test_events_fade_in_after_placement() {
    let mut graph = settled_graph(GraphConfig::new("#000"), fixtures::scenario_points());
    graph.set_events(vec![GraphEvent::new(1, "peak")]);
    graph.rebuild();

    let placed_at = graph.snapshot().unwrap().placed_at;
    assert_eq!(graph.frame(1.0, placed_at).events[0].opacity, 0.0);
    let settled = placed_at + Duration::from_secs(1);
    assert_eq!(graph.frame(1.0, settled).events[0].opacity, 1.0);
}

// ====================
// Snapshots
// ====================

#[test]
fn test_reader_thread_sees_consistent_snapshots() {
    let config = GraphConfig::new("#000").gradient_fill_colors(["#000", "#fff"]);
    let mut graph = settled_graph(config, fixtures::wave_points(4, 1_000));
    let cell = graph.snapshots();

    let reader = std::thread::spawn(move || {
        let mut seen = 0;
        for _ in 0..2_000 {
            let Some(snapshot) = cell.load() else { continue };
            let fill = snapshot.fill.as_ref().expect("fill configured");
            assert_eq!(snapshot.stroke.to, snapshot.target);
            assert_eq!(fill.to.len(), snapshot.target.len() + 2);
            assert_eq!(snapshot.points.len(), snapshot.target.len());
            assert!(snapshot.generation >= seen);
            seen = snapshot.generation;
        }
        seen
    });

    for round in 0..50 {
        let count = if round % 2 == 0 { 7 } else { 4 };
        graph.set_points(shared(fixtures::wave_points(count, 1_000)));
        graph.rebuild().unwrap();
        graph.set_progress(1.0);
    }

    let seen = reader.join().unwrap();
    assert!(seen >= 1);
    assert_eq!(graph.snapshots().generation(), 51);
}
