//! File batch list rendering

use super::helpers::truncate;
use crate::tui::app::state::{BatchFile, FileStatus, ViewState};
use crate::tui::theme::Theme;
use crate::ux::RetryCoordinator;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the batch file list with status markers and error snippets.
/// The selected failed row expands to its full error text when requested.
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    files: &[BatchFile],
    retry: &RetryCoordinator,
    view_state: &mut ViewState,
    theme: &Theme,
    no_icons: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Files")
        .border_style(Style::default().fg(theme.text_secondary));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if files.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No files yet. Press <o> to add one.",
            Style::default().fg(theme.text_secondary),
        )));
        f.render_widget(empty, inner);
        return;
    }

    let visible_rows = inner.height as usize;
    view_state.page_size = visible_rows.max(1);

    // Keep the selection on screen
    if view_state.selected_index < view_state.scroll_offset {
        view_state.scroll_offset = view_state.selected_index;
    }
    if view_state.selected_index >= view_state.scroll_offset + visible_rows.max(1) {
        view_state.scroll_offset = view_state.selected_index + 1 - visible_rows.max(1);
    }
    let max_scroll = files.len().saturating_sub(visible_rows.max(1));
    view_state.scroll_offset = view_state.scroll_offset.min(max_scroll);

    let mut lines: Vec<Line> = Vec::new();
    let snippet_width = inner.width.saturating_sub(30) as usize;
    for (idx, file) in files
        .iter()
        .enumerate()
        .skip(view_state.scroll_offset)
        .take(visible_rows)
    {
        let selected = idx == view_state.selected_index;
        let (marker, status_label, status_color) = status_display(file.status, theme, no_icons);

        let row_style = if selected {
            Style::default()
                .fg(theme.table_selected)
                .bg(theme.table_selected_bg)
        } else {
            Style::default().fg(theme.table_normal)
        };

        let mut spans = vec![
            Span::styled(format!(" {marker} "), Style::default().fg(status_color)),
            Span::styled(format!("{:<30} ", truncate(&file.name, 30)), row_style),
            Span::styled(
                format!("{status_label:<10}"),
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ];

        if file.status == FileStatus::Failed {
            if let Some(attempt) = retry.get(&file.name) {
                spans.push(Span::styled(
                    format!(" {}", truncate(&attempt.error, snippet_width.max(10))),
                    Style::default().fg(theme.status_failed),
                ));
            }
        }
        lines.push(Line::from(spans));

        // Expanded error text directly under the selected failed row
        if selected && view_state.show_error_detail && file.status == FileStatus::Failed {
            if let Some(attempt) = retry.get(&file.name) {
                for chunk in wrap_text(&attempt.error, inner.width.saturating_sub(6) as usize) {
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(chunk, Style::default().fg(theme.status_failed)),
                    ]));
                }
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("recorded {}", attempt.recorded_at.format("%H:%M:%S")),
                        Style::default().fg(theme.text_secondary),
                    ),
                ]));
            }
        }
    }

    let list = Paragraph::new(lines);
    f.render_widget(list, inner);
}

fn status_display(status: FileStatus, theme: &Theme, no_icons: bool) -> (&'static str, &'static str, ratatui::style::Color) {
    match status {
        FileStatus::Pending => (if no_icons { "-" } else { "○" }, "pending", theme.status_pending),
        FileStatus::Converting => (if no_icons { "~" } else { "◐" }, "converting", theme.status_converting),
        FileStatus::Done => (if no_icons { "+" } else { "✓" }, "done", theme.status_done),
        FileStatus::Failed => (if no_icons { "!" } else { "✗" }, "failed", theme.status_failed),
    }
}

/// Greedy word wrap for the expanded error text.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
