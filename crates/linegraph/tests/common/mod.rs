//! Shared helpers for the linegraph integration tests.

#![allow(dead_code)]

use linegraph::{GraphConfig, GraphListener, GraphPoint, LineGraph};
use linegraph_test_utils::CallRecorder;
use std::sync::Arc;

/// A listener callback, as recorded by [`RecordingListener`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Selected(GraphPoint),
    GestureStart,
    GestureEnd,
    EventHover(usize, bool),
}

/// Listener that records every callback in order.
#[derive(Debug)]
pub struct RecordingListener {
    pub recorder: CallRecorder<Call>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self {
            recorder: CallRecorder::new(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.recorder.calls()
    }

    pub fn selections(&self) -> Vec<GraphPoint> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Selected(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn hovers(&self) -> Vec<(usize, bool)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::EventHover(i, shown) => Some((i, shown)),
                _ => None,
            })
            .collect()
    }
}

impl GraphListener for RecordingListener {
    fn on_point_selected(&mut self, point: &GraphPoint) {
        self.recorder.record(Call::Selected(*point));
    }

    fn on_gesture_start(&mut self) {
        self.recorder.record(Call::GestureStart);
    }

    fn on_gesture_end(&mut self) {
        self.recorder.record(Call::GestureEnd);
    }

    fn on_event_hover(&mut self, index: usize, shown: bool) {
        self.recorder.record(Call::EventHover(index, shown));
    }
}

pub fn shared(points: Vec<GraphPoint>) -> Arc<[GraphPoint]> {
    Arc::from(points)
}

/// A measured graph holding `points`, built once and settled.
pub fn settled_graph(config: GraphConfig, points: Vec<GraphPoint>) -> LineGraph<&'static str> {
    let mut graph = LineGraph::new(config).expect("valid config");
    graph.set_points(shared(points));
    graph.set_canvas_size(200, 100);
    graph.rebuild().expect("measured graph with points");
    graph.set_progress(1.0);
    graph
}
