//! Core primitive tests.
//!
//! These tests cover the sample and color types shared by every crate and
//! the logging and profiling bootstrap.

use linegraph_core::point::is_sorted_by_date;
use linegraph_core::{Color, ColorError, GraphPoint, Timestamp, logging, profiling};

#[test]
fn test_point_conversions() {
    let a = GraphPoint::from((1_500, 2.0));
    let b = GraphPoint::new(Timestamp::from_millis(1_500), 2.0);
    let c = GraphPoint::from((Timestamp::from_millis(1_500), 2.0));
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_eq!(a.date.as_millis(), 1_500);
}

#[test]
fn test_sorted_by_date() {
    let sorted = [
        GraphPoint::from((0, 1.0)),
        GraphPoint::from((0, 3.0)),
        GraphPoint::from((10, 2.0)),
    ];
    assert!(is_sorted_by_date(&sorted));
    assert!(is_sorted_by_date(&[]));
    assert!(!is_sorted_by_date(&[GraphPoint::from((5, 0.0)), GraphPoint::from((4, 0.0))]));
}

#[test]
fn test_timestamp_display() {
    assert_eq!(Timestamp::EPOCH.to_string(), "1970-01-01T00:00:00+00:00");
    assert_eq!(Timestamp::from_millis(i64::MAX).to_string(), format!("{}ms", i64::MAX));
}

#[test]
fn test_color_parsing() {
    assert_eq!(Color::parse_hex("#ff0000").unwrap().to_rgba_u8(), [255, 0, 0, 255]);
    assert_eq!(Color::parse_hex("#f00").unwrap(), Color::parse_hex("#ff0000").unwrap());
    assert!(matches!(Color::parse_hex("ff0000"), Err(ColorError::MissingHash { .. })));
}

#[test]
fn test_logging_init_is_idempotent() {
    logging::init_with_filter("linegraph=trace");
    logging::init();
    tracing::debug!("logging initialized twice");
}

#[test]
fn test_profiling_scopes_toggle() {
    profiling::set_scopes_on(true);
    {
        profiling::profile_scope!("test_scope");
    }
    profiling::new_frame();
    profiling::set_scopes_on(false);
}
