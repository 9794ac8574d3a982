//! Batch conversion progress bookkeeping
//!
//! Tracks completed/total counters and timing for one batch. The tracker
//! cannot fail; with zero inputs it degrades to an empty snapshot.

use super::notifications::Notifications;
use std::time::{Duration, Instant};

/// Progress state for the current batch. Owned exclusively by the app;
/// counters reset only when a new batch starts.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    completed: usize,
    total: usize,
    started_at: Option<Instant>,
    active_file: String,
}

/// Render input computed from the tracker at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Whole percentage in 0..=100
    pub percentage: u16,
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
    /// Estimated time remaining; `None` unless strictly positive
    pub eta: Option<Duration>,
    pub active_file: String,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new batch of `total` files, resetting the counters.
    pub fn start(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        self.started_at = Some(Instant::now());
        self.active_file.clear();
    }

    /// Record one finished file. Increments by exactly one per call; callers
    /// are responsible for not reporting the same file twice.
    pub fn increment(&mut self, file_name: &str) {
        self.completed = (self.completed + 1).min(self.total);
        self.active_file = file_name.to_string();
    }

    /// Force the batch to its finished state and announce the summary.
    pub fn complete(&mut self, notifier: &mut Notifications) {
        self.completed = self.total;
        self.active_file.clear();
        notifier.success(format!(
            "Conversion finished: {} file(s) processed",
            self.total
        ));
    }

    /// True once a batch has started and has files left.
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.completed < self.total
    }

    /// True if a batch has ever been started (finished batches keep showing).
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Compute the displayable snapshot as of `now`.
    pub fn snapshot(&self, now: Instant) -> ProgressSnapshot {
        let percentage = if self.total == 0 {
            0
        } else {
            (self.completed as f64 / self.total as f64 * 100.0).round() as u16
        };
        let elapsed = self
            .started_at
            .map(|s| now.saturating_duration_since(s))
            .unwrap_or_default();
        let avg = if self.completed > 0 {
            elapsed / self.completed as u32
        } else {
            Duration::ZERO
        };
        let remaining = avg * (self.total - self.completed) as u32;
        ProgressSnapshot {
            percentage,
            completed: self.completed,
            total: self.total,
            elapsed,
            eta: (!remaining.is_zero()).then_some(remaining),
            active_file: self.active_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_guards_division() {
        let tracker = ProgressTracker::new();
        let snap = tracker.snapshot(Instant::now());
        assert_eq!(snap.percentage, 0);
        assert_eq!(snap.eta, None);
    }

    #[test]
    fn increment_sets_active_file() {
        let mut tracker = ProgressTracker::new();
        tracker.start(3);
        tracker.increment("a.eml");
        assert_eq!(tracker.completed(), 1);
        let snap = tracker.snapshot(Instant::now());
        assert_eq!(snap.active_file, "a.eml");
        assert_eq!(snap.percentage, 33);
    }

    #[test]
    fn eta_requires_completed_files() {
        let mut tracker = ProgressTracker::new();
        tracker.start(5);
        // No files done yet: average is zero, so no estimate is shown.
        let snap = tracker.snapshot(Instant::now() + Duration::from_secs(10));
        assert_eq!(snap.eta, None);
    }

    #[test]
    fn eta_is_positive_mid_batch() {
        let mut tracker = ProgressTracker::new();
        tracker.start(4);
        tracker.increment("a.eml");
        let snap = tracker.snapshot(Instant::now() + Duration::from_secs(8));
        // ~8s for one file, three to go: estimate close to 24s.
        let eta = snap.eta.expect("eta should be shown");
        assert!(eta >= Duration::from_secs(23) && eta <= Duration::from_secs(25));
    }
}
