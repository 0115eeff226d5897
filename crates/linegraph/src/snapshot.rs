//! Atomic hand-off between the data lane and the interaction lane.

use crate::events::PlacedEvent;
use crate::transition::PathPair;
use linegraph_core::GraphPoint;
use linegraph_geometry::{CoordinateMapper, Path};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Everything the interaction lane reads, produced by one rebuild.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    /// Stroke transition ends.
    pub stroke: PathPair,
    /// Fill transition ends, when a gradient fill is configured.
    pub fill: Option<PathPair>,
    /// The new stroke path. Scrubbing inverts this one.
    pub target: Path,
    pub mapper: CoordinateMapper,
    /// Points inside the x range, in order.
    pub points: Arc<[GraphPoint]>,
    pub events: Vec<PlacedEvent>,
    /// When the events were placed.
    pub placed_at: Instant,
    /// Increments with every publication, starting at 1.
    pub generation: u64,
}

impl GraphSnapshot {
    /// x-offset of the last in-range point.
    pub fn line_width(&self) -> f64 {
        crate::indicator::line_width(&self.mapper, self.points.last().map(|p| p.date))
    }
}

/// Shared slot holding the latest [`GraphSnapshot`].
///
/// Writers swap in a whole snapshot under the write lock; readers clone the
/// `Arc` under the read lock and work on it without holding the lock, so a
/// reader never observes a stroke pair from one build next to a fill pair from
/// another.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCell {
    inner: Arc<RwLock<Option<Arc<GraphSnapshot>>>>,
}

impl SnapshotCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the published snapshot.
    pub fn publish(&self, snapshot: GraphSnapshot) -> Arc<GraphSnapshot> {
        let snapshot = Arc::new(snapshot);
        *self.inner.write() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// The latest snapshot, if any has been published.
    pub fn load(&self) -> Option<Arc<GraphSnapshot>> {
        self.inner.read().clone()
    }

    /// Generation of the latest snapshot, 0 before the first publication.
    pub fn generation(&self) -> u64 {
        self.inner.read().as_ref().map_or(0, |s| s.generation)
    }
}
