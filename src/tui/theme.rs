//! Theme and styling definitions
//!
//! A centralized place for all color definitions used by the views.

use crate::ux::Severity;
use ratatui::style::Color;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Header colors
    pub header_title: Color,
    pub header_server: Color,
    pub header_counts: Color,

    // File status colors
    pub status_pending: Color,
    pub status_converting: Color,
    pub status_done: Color,
    pub status_failed: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,
    pub table_normal: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_label: Color,

    // Notification colors
    pub toast_success: Color,
    pub toast_error: Color,
    pub toast_warning: Color,
    pub toast_info: Color,
    pub toast_removing: Color,

    // Progress colors
    pub gauge_fill: Color,
    pub gauge_label: Color,

    // Modal and input colors
    pub modal_border: Color,
    pub input_prompt: Color,

    // Footer colors
    pub footer_key: Color,
    pub footer_text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_title: Color::Cyan,
            header_server: Color::Gray,
            header_counts: Color::White,

            status_pending: Color::DarkGray,
            status_converting: Color::Yellow,
            status_done: Color::Green,
            status_failed: Color::Red,

            table_header: Color::Cyan,
            table_selected: Color::Black,
            table_selected_bg: Color::Cyan,
            table_normal: Color::White,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            toast_success: Color::Green,
            toast_error: Color::Red,
            toast_warning: Color::Yellow,
            toast_info: Color::Blue,
            toast_removing: Color::DarkGray,

            gauge_fill: Color::Green,
            gauge_label: Color::White,

            modal_border: Color::Cyan,
            input_prompt: Color::Yellow,

            footer_key: Color::Cyan,
            footer_text: Color::Gray,
        }
    }
}

impl Theme {
    /// Color for a notification of the given severity.
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.toast_success,
            Severity::Error => self.toast_error,
            Severity::Warning => self.toast_warning,
            Severity::Info => self.toast_info,
        }
    }
}
