//! Markers for dated events on the curve.

use crate::animation::{AnimationTarget, EasingFunction, SpringConfig};
use glam::DVec2;
use linegraph_core::Timestamp;
use linegraph_geometry::{CoordinateMapper, PathCommand, y_for_x};
use std::time::Duration;

/// Dot radius of an event marker.
pub const EVENT_SIZE: f64 = 6.0;
/// Dot radius of the marker under the pointer. Also the hover distance.
pub const ACTIVE_EVENT_SIZE: f64 = 8.0;
/// Fade-in time of a newly placed marker.
pub const ENTERING_ANIMATION_DURATION: Duration = Duration::from_millis(750);

/// Something that happened at `date`, with an arbitrary payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEvent<P> {
    pub date: Timestamp,
    pub payload: P,
}

impl<P> GraphEvent<P> {
    pub fn new(date: impl Into<Timestamp>, payload: P) -> Self {
        Self {
            date: date.into(),
            payload,
        }
    }
}

/// An event resolved to canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedEvent {
    /// Index into the event list it was placed from.
    pub index: usize,
    pub position: DVec2,
}

/// Place the events that fall inside the mapper's x range onto `commands`.
///
/// Events whose x has no value on the curve are left out.
pub fn place_events<P>(
    events: &[GraphEvent<P>],
    mapper: &CoordinateMapper,
    commands: &[PathCommand],
) -> Vec<PlacedEvent> {
    let x_range = mapper.range().x;
    events
        .iter()
        .enumerate()
        .filter(|(_, event)| x_range.contains(event.date))
        .filter_map(|(index, event)| {
            let x = mapper.x(event.date);
            y_for_x(commands, x).map(|y| PlacedEvent {
                index,
                position: DVec2::new(x, y),
            })
        })
        .collect()
}

/// `true` when the engaged pointer is within hover distance of `event_x`.
pub fn is_event_active(graph_active: bool, pointer_x: f64, event_x: f64) -> bool {
    graph_active && (pointer_x - event_x).abs() < ACTIVE_EVENT_SIZE
}

/// Radius the marker dot should spring to.
pub fn event_radius_target(active: bool) -> AnimationTarget {
    let radius = if active { ACTIVE_EVENT_SIZE } else { EVENT_SIZE };
    AnimationTarget::spring(radius, SpringConfig::INDICATOR)
}

/// Opacity of a marker `since_placed` after it was placed.
pub fn entering_opacity(since_placed: Duration) -> f64 {
    AnimationTarget::timing(1.0, ENTERING_ANIMATION_DURATION, EasingFunction::QuadInOut)
        .spec
        .sample(0.0, 1.0, since_placed)
}

/// A change in which event is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub index: usize,
    pub shown: bool,
}

/// Keeps at most one event shown at a time.
///
/// A shown report activates an event only while none is active; a hidden
/// report clears it only for the active index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventHoverTracker {
    active: Option<usize>,
}

impl EventHoverTracker {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Apply one report. Returns the change to announce, if any.
    pub fn report(&mut self, index: usize, shown: bool) -> Option<HoverChange> {
        match (self.active, shown) {
            (None, true) => {
                self.active = Some(index);
                Some(HoverChange { index, shown: true })
            }
            (Some(active), false) if active == index => {
                self.active = None;
                Some(HoverChange {
                    index,
                    shown: false,
                })
            }
            _ => None,
        }
    }

    /// Hide whatever is shown.
    pub fn clear(&mut self) -> Option<HoverChange> {
        self.active.take().map(|index| HoverChange {
            index,
            shown: false,
        })
    }

    /// Re-evaluate every placed event against the pointer and collect the
    /// resulting changes, hides first.
    pub fn update(
        &mut self,
        placed: &[PlacedEvent],
        graph_active: bool,
        pointer_x: f64,
        changes: &mut Vec<HoverChange>,
    ) {
        if let Some(active) = self.active {
            let still = placed
                .iter()
                .find(|e| e.index == active)
                .is_some_and(|e| is_event_active(graph_active, pointer_x, e.position.x));
            if !still {
                changes.extend(self.report(active, false));
            }
        }
        for event in placed {
            if is_event_active(graph_active, pointer_x, event.position.x) {
                changes.extend(self.report(event.index, true));
            }
        }
    }
}
