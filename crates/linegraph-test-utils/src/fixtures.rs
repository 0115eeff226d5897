//! Point sets shared by the test suites and benches.

use linegraph_core::{GraphPoint, Timestamp};

/// Build points from `(millis, value)` pairs.
pub fn points(raw: &[(i64, f64)]) -> Vec<GraphPoint> {
    raw.iter().copied().map(GraphPoint::from).collect()
}

/// `[(0, 0), (1, 10), (2, 0)]`, a single peak.
pub fn scenario_points() -> Vec<GraphPoint> {
    points(&[(0, 0.0), (1, 10.0), (2, 0.0)])
}

/// `count` points one second apart, all with `value`.
pub fn flat_points(count: usize, value: f64) -> Vec<GraphPoint> {
    (0..count)
        .map(|i| GraphPoint::new(Timestamp::from_millis(i as i64 * 1_000), value))
        .collect()
}

/// `count` points `step_ms` apart following a sine wave with some drift.
pub fn wave_points(count: usize, step_ms: i64) -> Vec<GraphPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            GraphPoint::new(
                Timestamp::from_millis(i as i64 * step_ms),
                50.0 + 20.0 * (t * 0.35).sin() + t * 0.1,
            )
        })
        .collect()
}

/// Points with irregular spacing and sharp value changes.
pub fn jagged_points() -> Vec<GraphPoint> {
    points(&[
        (0, 12.0),
        (40, 80.0),
        (45, 3.0),
        (300, 55.0),
        (310, 54.0),
        (900, 99.0),
        (1_000, -20.0),
    ])
}
