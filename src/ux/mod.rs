//! Client-side UX state coordination
//!
//! These components own all the non-trivial client state: the notification
//! queue, batch progress bookkeeping, the failed-attempt registry with its
//! retry flow, and the preview/history modal lifecycles. None of them touch
//! the terminal; rendering lives in `tui::views`.

pub mod history;
pub mod modal;
pub mod notifications;
pub mod preview;
pub mod progress;
pub mod retry;

pub use history::HistoryController;
pub use modal::{ModalPhase, ModalSession};
pub use notifications::{Notification, Notifications, Severity};
pub use preview::{PreviewController, PreviewDocument, PreviewRequest};
pub use progress::{ProgressSnapshot, ProgressTracker};
pub use retry::{FailedAttempt, RetryCoordinator, RetryOutcome, RetryRefusal};
