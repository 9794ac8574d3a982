//! TUI tuning constants

/// Input poll interval for the main event loop (ms)
pub const EVENT_POLL_MS: u64 = 100;

/// Minimum terminal size before showing the resize hint
pub const MIN_TERMINAL_WIDTH: u16 = 50;
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Width of the stacked notification boxes
pub const NOTIFICATION_WIDTH: u16 = 46;

/// Modal overlay size as a percentage of the terminal
pub const MODAL_WIDTH_PERCENT: u16 = 80;
pub const MODAL_HEIGHT_PERCENT: u16 = 80;
