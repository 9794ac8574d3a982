//! Batch progress rendering

use crate::tui::theme::Theme;
use crate::ux::progress::ProgressSnapshot;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use std::time::Duration;

/// Render the progress gauge and its info line
pub fn render_progress(f: &mut Frame, area: Rect, snapshot: &ProgressSnapshot, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(theme.gauge_fill))
        .label(Span::styled(
            format!(
                "{}% ({}/{})",
                snapshot.percentage, snapshot.completed, snapshot.total
            ),
            Style::default().fg(theme.gauge_label),
        ))
        .percent(snapshot.percentage.min(100));
    f.render_widget(gauge, chunks[0]);

    let mut spans = vec![Span::styled(
        format!(" elapsed {}", format_duration(snapshot.elapsed)),
        Style::default().fg(theme.text_secondary),
    )];
    if let Some(eta) = snapshot.eta {
        spans.push(Span::styled(
            format!("  eta {}", format_duration(eta)),
            Style::default().fg(theme.text_secondary),
        ));
    }
    if !snapshot.active_file.is_empty() {
        spans.push(Span::styled(
            format!("  last: {}", snapshot.active_file),
            Style::default().fg(theme.text_primary),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs >= 60 {
        format!("{}m{:02}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}
