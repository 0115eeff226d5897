//! Host callbacks.

use linegraph_core::GraphPoint;

/// Receives graph notifications. Every method defaults to doing nothing.
pub trait GraphListener {
    /// The scrubbed point changed.
    fn on_point_selected(&mut self, _point: &GraphPoint) {}

    /// The pointer engaged.
    fn on_gesture_start(&mut self) {}

    /// The pointer released.
    fn on_gesture_end(&mut self) {}

    /// The event at `index` was shown or hidden.
    fn on_event_hover(&mut self, _index: usize, _shown: bool) {}
}

/// A listener that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl GraphListener for NoopListener {}
