//! Transient status notifications
//!
//! An ordered queue of toast-style messages. Every notification carries a
//! severity, an optional auto-dismiss deadline, and a short exit transition
//! during which it is still rendered (dimmed) before being dropped. Dismissal
//! is idempotent: dismissing an unknown or already-dismissed id is a no-op.

use std::time::{Duration, Instant};

/// Default time a notification stays visible.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(4);

/// How long a dismissed notification keeps rendering while fading out.
pub const EXIT_TRANSITION: Duration = Duration::from_millis(300);

/// Notification severity. Unknown severity strings fall back to `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn parse(s: &str) -> Self {
        match s {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// One visible status message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    deadline: Option<Instant>,
    removing_since: Option<Instant>,
}

impl Notification {
    /// True while the exit transition is playing.
    pub fn is_removing(&self) -> bool {
        self.removing_since.is_some()
    }
}

/// The notification sink. Messages stack in arrival order; there is no cap on
/// the concurrent count.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a notification. `duration` of `None` (or zero) means the
    /// message persists until manually dismissed. Returns the id so callers
    /// can dismiss it later.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = duration
            .filter(|d| !d.is_zero())
            .map(|d| Instant::now() + d);
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            deadline,
            removing_since: None,
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Success, Some(DEFAULT_DURATION))
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Error, Some(DEFAULT_DURATION))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Warning, Some(DEFAULT_DURATION))
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, Severity::Info, Some(DEFAULT_DURATION))
    }

    /// Start the exit transition for a notification. Unknown ids and ids
    /// already transitioning are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            if n.removing_since.is_none() {
                n.removing_since = Some(Instant::now());
            }
        }
    }

    /// Dismiss the oldest notification that is not already fading out.
    pub fn dismiss_oldest(&mut self) {
        if let Some(id) = self
            .items
            .iter()
            .find(|n| !n.is_removing())
            .map(|n| n.id)
        {
            self.dismiss(id);
        }
    }

    /// Advance timers: expired deadlines start their exit transition, and
    /// entries whose transition has finished are dropped. Called once per
    /// event-loop tick.
    pub fn sweep(&mut self, now: Instant) {
        for n in &mut self.items {
            if n.removing_since.is_none()
                && n.deadline.is_some_and(|deadline| now >= deadline)
            {
                n.removing_since = Some(now);
            }
        }
        self.items.retain(|n| match n.removing_since {
            Some(since) => now.saturating_duration_since(since) < EXIT_TRANSITION,
            None => true,
        });
    }

    /// Currently visible notifications, oldest first.
    pub fn visible(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
