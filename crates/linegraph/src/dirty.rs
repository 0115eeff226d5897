//! Change tracking between rebuilds.

bitflags::bitflags! {
    /// Inputs that changed since the last published snapshot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GraphDirtyFlags: u8 {
        /// A different point set was supplied.
        const POINTS = 0b0000_0001;
        /// The x or y range override changed.
        const RANGE = 0b0000_0010;
        /// The canvas was resized.
        const SIZE = 0b0000_0100;
        /// Smoothing or sampling changed.
        const SMOOTHING = 0b0000_1000;
        /// Horizontal or vertical padding changed.
        const PADDING = 0b0001_0000;
        /// The event list changed.
        const EVENTS = 0b0010_0000;
    }
}

impl GraphDirtyFlags {
    /// Check if the stroke and fill paths must be rebuilt.
    pub fn needs_path_rebuild(&self) -> bool {
        self.intersects(Self::POINTS | Self::RANGE | Self::SIZE | Self::SMOOTHING | Self::PADDING)
    }

    /// Check if only the events changed (paths can be reused).
    pub fn is_events_only(&self) -> bool {
        *self == Self::EVENTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_triggers() {
        assert!(!GraphDirtyFlags::empty().needs_path_rebuild());
        assert!(GraphDirtyFlags::SIZE.needs_path_rebuild());
        assert!(!GraphDirtyFlags::EVENTS.needs_path_rebuild());
        assert!(GraphDirtyFlags::EVENTS.is_events_only());
        assert!(!(GraphDirtyFlags::EVENTS | GraphDirtyFlags::POINTS).is_events_only());
    }
}
