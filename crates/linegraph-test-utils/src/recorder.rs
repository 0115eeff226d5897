//! Call recording for mock listeners.

use parking_lot::Mutex;

/// Records calls for verification in tests.
///
/// Methods take `&self`, so a mock can record from callbacks that only get a
/// shared reference.
///
/// ```rust
/// use linegraph_test_utils::CallRecorder;
///
/// let recorder = CallRecorder::new();
/// recorder.record("start");
/// recorder.record("end");
/// assert_eq!(recorder.calls(), vec!["start", "end"]);
/// assert_eq!(recorder.count(|c| *c == "end"), 1);
/// ```
#[derive(Debug)]
pub struct CallRecorder<C> {
    calls: Mutex<Vec<C>>,
}

impl<C: Clone> CallRecorder<C> {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Append a call.
    pub fn record(&self, call: C) {
        self.calls.lock().push(call);
    }

    /// Snapshot of every recorded call, oldest first.
    pub fn calls(&self) -> Vec<C> {
        self.calls.lock().clone()
    }

    /// Number of calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&C) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| predicate(c)).count()
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<C: Clone> Default for CallRecorder<C> {
    fn default() -> Self {
        Self::new()
    }
}
