//! Morphing between successive paths.

use linegraph_geometry::Path;
use tracing::trace;

/// The two ends of a path transition.
///
/// Both paths always have the same command structure, so they can be
/// interpolated pairwise.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPair {
    pub from: Path,
    pub to: Path,
}

impl PathPair {
    /// Both ends set to `path`.
    pub fn settled(path: Path) -> Self {
        Self {
            from: path.clone(),
            to: path,
        }
    }

    /// The path at `progress` (`0` is `from`, `1` is `to`).
    pub fn at(&self, progress: f64) -> Path {
        let mut out = Path::new();
        self.at_into(progress, &mut out);
        out
    }

    /// Like [`PathPair::at`], writing into a reused buffer.
    pub fn at_into(&self, progress: f64, out: &mut Path) {
        let progress = progress.clamp(0.0, 1.0);
        if progress >= 1.0 {
            out.clone_from(&self.to);
        } else if !self.from.interpolate_into(&self.to, progress, out) {
            out.clone_from(&self.to);
        }
    }
}

/// Observable state of a [`PathTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    /// `from == to`; progress has no visible effect.
    Idle,
    /// Progress is animating from 0 towards 1.
    Transitioning,
}

/// Result of a [`PathTransition::retarget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retarget {
    /// A morph from the previous visible path started.
    Morph,
    /// The structures differed; the new path is shown immediately.
    Cut,
}

/// Holds the `from`/`to` pair and the progress scalar driving it.
#[derive(Debug, Clone)]
pub struct PathTransition {
    pair: PathPair,
    progress: f64,
    settled: bool,
}

impl Default for PathTransition {
    fn default() -> Self {
        Self {
            pair: PathPair::default(),
            progress: 1.0,
            settled: true,
        }
    }
}

impl PathTransition {
    /// A transition resting on `path`.
    pub fn new(path: Path) -> Self {
        Self {
            pair: PathPair::settled(path),
            ..Default::default()
        }
    }

    /// Rest on `path`, discarding any in-flight transition.
    pub fn reset(&mut self, path: Path) {
        self.pair = PathPair::settled(path);
        self.progress = 1.0;
        self.settled = true;
    }

    /// Start moving towards `path`.
    ///
    /// The new `from` is whatever is on screen: the old `to` when the last
    /// transition finished, or the interpolated path when it is still in
    /// flight. Progress restarts at 0. When `path` cannot be interpolated
    /// with that `from`, both ends become `path` and progress is 1.
    pub fn retarget(&mut self, path: Path) -> Retarget {
        let from = if self.progress < 1.0 && !self.settled {
            self.pair.at(self.progress)
        } else {
            std::mem::take(&mut self.pair.to)
        };

        if from.is_interpolatable(&path) {
            trace!(commands = path.len(), progress = self.progress, "path transition morph");
            self.pair = PathPair { from, to: path };
            self.progress = 0.0;
            self.settled = false;
            Retarget::Morph
        } else {
            trace!(from = from.len(), to = path.len(), "path transition cut");
            self.reset(path);
            Retarget::Cut
        }
    }

    /// Feed the progress value from the host animation driver.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress.clamp(0.0, 1.0);
        if self.progress >= 1.0 {
            self.settled = true;
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn pair(&self) -> &PathPair {
        &self.pair
    }

    /// The target path.
    pub fn target(&self) -> &Path {
        &self.pair.to
    }

    pub fn state(&self) -> TransitionState {
        if self.settled {
            TransitionState::Idle
        } else {
            TransitionState::Transitioning
        }
    }

    /// The path at `progress`.
    pub fn current_path(&self, progress: f64) -> Path {
        self.pair.at(progress)
    }
}
