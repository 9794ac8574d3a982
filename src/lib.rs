//! Mail2PDF TUI Library
//!
//! This library provides the core functionality for the mail2pdf-tui client.
//! The `api`, `config`, and `ux` modules compile without the terminal UI and
//! can be used headless; the `tui` module is gated behind the `tui` feature.

pub mod api;
pub mod config;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ux;

// Re-export commonly used types for convenience
pub use api::{ApiError, ConversionApi, HttpConvertClient};
pub use ux::{
    FailedAttempt, HistoryController, ModalPhase, Notifications, PreviewController,
    ProgressTracker, RetryCoordinator, RetryOutcome, RetryRefusal, Severity,
};
