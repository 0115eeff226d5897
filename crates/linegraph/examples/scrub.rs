//! Drives a graph the way a host would: build, animate the transition, then
//! scrub across it and print what the listener receives.
//!
//! Run with `RUST_LOG=linegraph=trace` to see rebuild and transition logs.

use linegraph::core::{logging, profiling};
use linegraph::prelude::*;
use linegraph::{AnimationSpec, EasingFunction};
use std::sync::Arc;
use std::time::{Duration, Instant};

struct PrintListener;

impl GraphListener for PrintListener {
    fn on_point_selected(&mut self, point: &GraphPoint) {
        println!("selected {} = {:.2}", point.date, point.value);
    }

    fn on_gesture_start(&mut self) {
        println!("gesture start");
    }

    fn on_gesture_end(&mut self) {
        println!("gesture end");
    }

    fn on_event_hover(&mut self, index: usize, shown: bool) {
        println!("event {index} {}", if shown { "shown" } else { "hidden" });
    }
}

fn main() {
    logging::init();
    profiling::set_scopes_on(true);

    let config = GraphConfig::new("#3a86ff")
        .enable_pan_gesture(true)
        .enable_indicator(true)
        .indicator_pulsating(true)
        .gradient_fill_colors(["#3a86ff", "#3a86ff00"]);
    let mut graph: LineGraph<&str> = match LineGraph::new(config) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    let base = 1_700_000_000_000;
    let points: Vec<GraphPoint> = (0..24)
        .map(|i| GraphPoint::from((base + i * 3_600_000, 100.0 + (i as f64 * 0.5).sin() * 12.0)))
        .collect();
    graph.set_points(Arc::from(points));
    graph.set_events(vec![GraphEvent::new(base + 12 * 3_600_000, "release")]);
    graph.set_canvas_size(360, 180);

    let Some(target) = graph.rebuild() else {
        return;
    };
    println!("animating to {} ({:?})", target.value, target.spec);

    // Stand-in for the host's spring driver.
    let driver = AnimationSpec::Timing {
        duration: Duration::from_millis(500),
        easing: EasingFunction::CubicOut,
    };
    let from = graph.transition_progress();
    let start = Instant::now();
    let mut frame = Frame::default();
    for step in 0..=10 {
        let now = start + Duration::from_millis(step * 50);
        let progress = driver.sample(from, target.value, now - start);
        graph.frame_into(progress, now, &mut frame);
        profiling::new_frame();
    }
    println!("settled: {:?}", graph.transition_state());

    let mut listener = PrintListener;
    graph.set_gesture_active(true, Instant::now(), &mut listener);
    for x in (0..=360).step_by(6) {
        graph.pointer_moved(f64::from(x), &mut listener);
    }
    graph.set_gesture_active(false, Instant::now(), &mut listener);

    graph.frame_into(1.0, Instant::now(), &mut frame);
    println!(
        "indicator at ({:.1}, {:.1}), {} stroke commands",
        frame.indicator.position.x,
        frame.indicator.position.y,
        frame.stroke.len()
    );
}
