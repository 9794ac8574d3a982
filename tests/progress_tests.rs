//! Progress tracker tests

use mail2pdf_tui::ux::progress::ProgressTracker;
use mail2pdf_tui::Notifications;
use std::time::{Duration, Instant};

#[test]
fn percentage_stays_within_bounds() {
    let mut tracker = ProgressTracker::new();
    tracker.start(3);
    for _ in 0..10 {
        tracker.increment("a.eml");
    }
    // Completed is clamped to total even if reported too often.
    assert_eq!(tracker.completed(), 3);
    assert_eq!(tracker.snapshot(Instant::now()).percentage, 100);
}

#[test]
fn fresh_tracker_reports_an_empty_snapshot() {
    let tracker = ProgressTracker::new();
    let snap = tracker.snapshot(Instant::now());
    assert_eq!(snap.percentage, 0);
    assert_eq!(snap.completed, 0);
    assert_eq!(snap.total, 0);
    assert_eq!(snap.eta, None);
    assert!(!tracker.is_running());
    assert!(!tracker.is_started());
}

#[test]
fn start_resets_previous_counters() {
    let mut tracker = ProgressTracker::new();
    tracker.start(2);
    tracker.increment("a.eml");
    tracker.increment("b.eml");
    assert!(!tracker.is_running());

    tracker.start(4);
    assert_eq!(tracker.completed(), 0);
    assert_eq!(tracker.total(), 4);
    assert!(tracker.is_running());
    assert_eq!(tracker.snapshot(Instant::now()).percentage, 0);
}

#[test]
fn complete_fills_counters_and_announces() {
    let mut tracker = ProgressTracker::new();
    let mut sink = Notifications::new();
    tracker.start(5);
    tracker.increment("a.eml");

    tracker.complete(&mut sink);
    assert_eq!(tracker.completed(), 5);
    assert!(!tracker.is_running());
    assert!(tracker.is_started());
    let snap = tracker.snapshot(Instant::now());
    assert_eq!(snap.percentage, 100);
    assert!(snap.active_file.is_empty());
    assert!(sink.visible()[0]
        .message
        .contains("Conversion finished: 5 file(s) processed"));
}

#[test]
fn eta_shrinks_as_files_complete() {
    let mut tracker = ProgressTracker::new();
    tracker.start(4);
    let base = Instant::now();

    tracker.increment("a.eml");
    let one_done = tracker.snapshot(base + Duration::from_secs(4));
    let eta_one = one_done.eta.expect("eta after first file");

    tracker.increment("b.eml");
    tracker.increment("c.eml");
    let three_done = tracker.snapshot(base + Duration::from_secs(6));
    let eta_three = three_done.eta.expect("eta after third file");

    assert!(eta_three < eta_one);
}

#[test]
fn mid_batch_percentage_rounds_to_whole_numbers() {
    let mut tracker = ProgressTracker::new();
    tracker.start(3);
    tracker.increment("a.eml");
    assert_eq!(tracker.snapshot(Instant::now()).percentage, 33);
    tracker.increment("b.eml");
    assert_eq!(tracker.snapshot(Instant::now()).percentage, 67);
}
