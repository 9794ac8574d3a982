//! Header view rendering

use crate::tui::app::state::{BatchFile, FileStatus};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header: title, server address, and batch status counts
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    server_url: &str,
    files: &[BatchFile],
    theme: &Theme,
    no_icons: bool,
) {
    let pending = count_status(files, FileStatus::Pending);
    let converting = count_status(files, FileStatus::Converting);
    let done = count_status(files, FileStatus::Done);
    let failed = count_status(files, FileStatus::Failed);

    let title_line = Line::from(vec![
        Span::styled(
            "Mail2PDF",
            Style::default()
                .fg(theme.header_title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Server: ", Style::default().fg(theme.text_label)),
        Span::styled(server_url, Style::default().fg(theme.header_server)),
    ]);

    let mut count_spans = vec![
        Span::styled("Files: ", Style::default().fg(theme.text_label)),
        Span::styled(
            files.len().to_string(),
            Style::default()
                .fg(theme.header_counts)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    for (label, count, color) in [
        ("pending", pending, theme.status_pending),
        ("converting", converting, theme.status_converting),
        ("done", done, theme.status_done),
        ("failed", failed, theme.status_failed),
    ] {
        if count > 0 {
            count_spans.push(Span::raw("  "));
            count_spans.push(Span::styled(
                format!("{count} {label}"),
                Style::default().fg(color),
            ));
        }
    }
    if failed > 0 {
        let hint = if no_icons { "[r to retry]" } else { "↻ r to retry" };
        count_spans.push(Span::raw("  "));
        count_spans.push(Span::styled(
            hint,
            Style::default().fg(theme.text_secondary),
        ));
    }

    let header = Paragraph::new(vec![title_line, Line::from(count_spans)])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn count_status(files: &[BatchFile], status: FileStatus) -> usize {
    files.iter().filter(|f| f.status == status).count()
}
