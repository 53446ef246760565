//! Dirty-flag scheduling of width resolution.
//!
//! Mutations only mark the layout dirty. The host calls [`LayoutScheduler::run_pass`]
//! once per layout pass; any number of invalidations since the previous pass
//! collapse into a single resolve.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidationReason {
    /// Nothing has been resolved yet.
    Initial,
    ColumnAdded,
    ColumnRemoved,
    ColumnMoved,
    WidthChanged,
    MinWidthChanged,
    MaxWidthChanged,
    ContentMeasured,
    VisibilityChanged,
    ViewportResized,
    GridDefaultsChanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutState {
    Clean,
    Dirty(Vec<InvalidationReason>),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    pub invalidations: u64,
    pub resolves: u64,
    pub skipped_passes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutScheduler {
    state: LayoutState,
    stats: SchedulerStats,
}

impl LayoutScheduler {
    /// Starts dirty so the first pass always resolves.
    pub fn new() -> Self {
        Self {
            state: LayoutState::Dirty(vec![InvalidationReason::Initial]),
            stats: SchedulerStats::default(),
        }
    }

    pub fn invalidate(&mut self, reason: InvalidationReason) {
        self.stats.invalidations += 1;
        tracing::trace!(?reason, "layout invalidated");
        match &mut self.state {
            LayoutState::Dirty(reasons) => {
                if !reasons.contains(&reason) {
                    reasons.push(reason);
                }
            }
            LayoutState::Clean => self.state = LayoutState::Dirty(vec![reason]),
        }
    }

    pub fn is_dirty(&self) -> bool {
        matches!(self.state, LayoutState::Dirty(_))
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Distinct reasons recorded since the last pass, in first-seen order.
    pub fn pending(&self) -> &[InvalidationReason] {
        match &self.state {
            LayoutState::Dirty(reasons) => reasons,
            LayoutState::Clean => &[],
        }
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Runs `resolve` if dirty and returns to clean. Returns `None` when the
    /// pass was skipped.
    pub fn run_pass<T>(&mut self, resolve: impl FnOnce() -> T) -> Option<T> {
        let LayoutState::Dirty(reasons) = std::mem::replace(&mut self.state, LayoutState::Clean)
        else {
            self.stats.skipped_passes += 1;
            tracing::trace!("layout clean, pass skipped");
            return None;
        };

        self.stats.resolves += 1;
        tracing::debug!(reasons = ?reasons, "resolving column widths");
        Some(resolve())
    }
}

impl Default for LayoutScheduler {
    fn default() -> Self {
        Self::new()
    }
}
