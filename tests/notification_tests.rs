//! Notification sink tests

use mail2pdf_tui::ux::notifications::{EXIT_TRANSITION, Notifications, Severity};
use std::time::{Duration, Instant};

#[test]
fn many_notifications_coexist() {
    let mut sink = Notifications::new();
    for i in 0..20 {
        sink.info(format!("message {i}"));
    }
    assert_eq!(sink.len(), 20);
    // Order is arrival order, oldest first.
    assert_eq!(sink.visible()[0].message, "message 0");
    assert_eq!(sink.visible()[19].message, "message 19");
}

#[test]
fn ids_are_unique_and_monotonic() {
    let mut sink = Notifications::new();
    let a = sink.info("a");
    let b = sink.error("b");
    let c = sink.warning("c");
    assert!(a < b && b < c);
}

#[test]
fn dismiss_oldest_skips_entries_already_fading() {
    let mut sink = Notifications::new();
    let first = sink.info("first");
    sink.info("second");

    sink.dismiss(first);
    sink.dismiss_oldest();

    let removing: Vec<bool> = sink.visible().iter().map(|n| n.is_removing()).collect();
    assert_eq!(removing, [true, true]);
}

#[test]
fn sweep_only_drops_finished_transitions() {
    let mut sink = Notifications::new();
    let now = Instant::now();
    let a = sink.show("a", Severity::Info, None);
    sink.show("b", Severity::Info, None);

    sink.dismiss(a);
    sink.sweep(now + EXIT_TRANSITION + Duration::from_millis(1));
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.visible()[0].message, "b");
}

#[test]
fn persistent_notification_outlives_timed_ones() {
    let mut sink = Notifications::new();
    sink.show("sticky", Severity::Warning, None);
    sink.show("timed", Severity::Info, Some(Duration::from_secs(1)));

    let later = Instant::now() + Duration::from_secs(5);
    sink.sweep(later);
    sink.sweep(later + EXIT_TRANSITION);
    assert_eq!(sink.len(), 1);
    assert_eq!(sink.visible()[0].message, "sticky");
    assert!(!sink.visible()[0].is_removing());
}

#[test]
fn severity_helpers_tag_their_messages() {
    let mut sink = Notifications::new();
    sink.success("ok");
    sink.error("bad");
    sink.warning("careful");
    sink.info("fyi");
    let severities: Vec<Severity> = sink.visible().iter().map(|n| n.severity).collect();
    assert_eq!(
        severities,
        [
            Severity::Success,
            Severity::Error,
            Severity::Warning,
            Severity::Info
        ]
    );
}
