//! Linegraph - animated smooth line graphs
//!
//! Linegraph turns ordered `(date, value)` samples into smooth stroke and
//! fill paths and keeps everything a renderer needs between frames:
//!
//! - **Transitions**: new data morphs from the path currently on screen
//! - **Scrubbing**: a pointer x resolves to a dot on the curve and the
//!   nearest sample
//! - **Indicator**: a pulsing dot at the end of the line
//! - **Events**: dated markers placed on the curve with hover reporting
//!
//! Rendering and gesture recognition stay with the host. The host feeds
//! canvas sizes, pointer positions and an animated progress scalar, and
//! draws the [`Frame`]s it gets back.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Instant;
//! use linegraph::prelude::*;
//!
//! let config = GraphConfig::new("#ff006e")
//!     .enable_pan_gesture(true)
//!     .enable_indicator(true);
//! let mut graph: LineGraph = LineGraph::new(config).unwrap();
//!
//! graph.set_points(Arc::from(vec![
//!     GraphPoint::from((0, 10.0)),
//!     GraphPoint::from((60_000, 12.5)),
//!     GraphPoint::from((120_000, 11.0)),
//! ]));
//! graph.set_canvas_size(320, 160);
//! graph.rebuild();
//!
//! let mut listener = NoopListener;
//! graph.set_gesture_active(true, Instant::now(), &mut listener);
//! graph.pointer_moved(160.0, &mut listener);
//!
//! let frame = graph.frame(graph.transition_progress(), Instant::now());
//! assert!(frame.selection_dot.is_some());
//! ```
//!
//! # Threading
//!
//! Each rebuild publishes an immutable [`GraphSnapshot`] through a
//! [`SnapshotCell`]. Cloned cells can be read from other threads; a reader
//! always sees the stroke, fill and events of one build together.

pub mod animation;
pub mod config;
pub mod dirty;
pub mod error;
pub mod events;
pub mod graph;
pub mod indicator;
pub mod listener;
pub mod selection;
pub mod snapshot;
pub mod style;
pub mod transition;

// Re-export sub-crates
pub use linegraph_core as core;
pub use linegraph_geometry as geometry;

pub use linegraph_core::{Color, ColorError, GraphPoint, Timestamp};
pub use linegraph_geometry::{
    DrawingRect, GraphRange, Path, PathCommand, Sampling, y_for_x,
};

pub use animation::{AnimationSpec, AnimationTarget, EasingFunction, PulseAnimation, SpringConfig};
pub use config::{GestureConfig, GraphConfig, GraphStyle};
pub use dirty::GraphDirtyFlags;
pub use error::{GraphError, Result};
pub use events::{EventHoverTracker, GraphEvent, PlacedEvent};
pub use graph::{EventFrame, Frame, LineGraph};
pub use indicator::IndicatorFrame;
pub use listener::{GraphListener, NoopListener};
pub use selection::SelectionState;
pub use snapshot::{GraphSnapshot, SnapshotCell};
pub use style::{FillGradient, GradientStop, StrokeGradient};
pub use transition::{PathPair, PathTransition, Retarget, TransitionState};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GraphConfig;
    pub use crate::events::GraphEvent;
    pub use crate::graph::{Frame, LineGraph};
    pub use crate::listener::{GraphListener, NoopListener};
    pub use crate::transition::TransitionState;

    pub use linegraph_core::{GraphPoint, Timestamp};
    pub use linegraph_geometry::{GraphRange, Sampling};
}
