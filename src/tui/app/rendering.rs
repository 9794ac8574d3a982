//! Frame rendering
//!
//! Composes the views into the frame each tick. Overlays draw in a fixed
//! order: modals over the file list, the help overlay over modals, and the
//! notification stack on top of everything.

use super::core::App;
use crate::tui::constants::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use crate::tui::views;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::Instant;

impl App {
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();

        if area.width < MIN_TERMINAL_WIDTH || area.height < MIN_TERMINAL_HEIGHT {
            let hint = Paragraph::new(Line::from(Span::styled(
                format!(
                    "Terminal too small ({}x{}); need at least {}x{}",
                    area.width, area.height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
                ),
                Style::default().fg(self.theme.status_failed),
            )));
            f.render_widget(hint, area);
            return;
        }

        let show_progress = self.progress.is_started();
        let mut constraints = vec![Constraint::Length(4), Constraint::Min(3)];
        if show_progress {
            constraints.push(Constraint::Length(4));
        }
        constraints.push(Constraint::Length(2));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        views::render_header(
            f,
            chunks[0],
            &self.config.server_url,
            &self.files,
            &self.theme,
            self.config.ui.no_icons,
        );

        views::render_file_list(
            f,
            chunks[1],
            &self.files,
            &self.retry,
            &mut self.view_state,
            &self.theme,
            self.config.ui.no_icons,
        );

        if show_progress {
            let snapshot = self.progress.snapshot(Instant::now());
            views::render_progress(f, chunks[2], &snapshot, &self.theme);
        }

        let footer_area = chunks[chunks.len() - 1];
        views::render_footer(
            f,
            footer_area,
            self.ui_state.input_mode,
            &self.ui_state.input_buffer,
            &self.theme,
        );

        // Modal overlays; at most one is open at a time
        self.ui_state.modal_area = if self.history.is_open() {
            views::render_history(f, area, &self.history, &mut self.view_state, &self.theme)
        } else if self.preview.is_open() {
            views::render_preview(f, area, &self.preview, &mut self.view_state, &self.theme)
        } else {
            None
        };

        if self.ui_state.show_help {
            views::render_help(f, area, &self.theme);
        }

        views::render_notifications(
            f,
            area,
            &self.notifications,
            &self.theme,
            self.config.ui.no_icons,
        );
    }
}
