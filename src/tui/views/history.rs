//! History modal rendering

use super::helpers::{centered_rect, truncate};
use crate::tui::app::state::ViewState;
use crate::tui::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::tui::theme::Theme;
use crate::ux::{HistoryController, ModalPhase};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the conversion history modal. Returns the modal rect so backdrop
/// clicks can be hit-tested against it.
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    history: &HistoryController,
    view_state: &mut ViewState,
    theme: &Theme,
) -> Option<Rect> {
    let phase = history.phase()?;
    if matches!(phase, ModalPhase::Closed) {
        return None;
    }

    let modal = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversion History ")
        .border_style(Style::default().fg(theme.modal_border));
    let inner = block.inner(modal);

    f.render_widget(Clear, modal);
    f.render_widget(block, modal);

    match phase {
        ModalPhase::Loading => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "Loading history...",
                    Style::default().fg(theme.text_secondary),
                )),
                inner,
            );
        }
        ModalPhase::Errored(message) => {
            f.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        message.as_str(),
                        Style::default()
                            .fg(theme.status_failed)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Press Esc to close",
                        Style::default().fg(theme.text_secondary),
                    )),
                ])
                .wrap(ratatui::widgets::Wrap { trim: false }),
                inner,
            );
        }
        ModalPhase::Loaded(records) if records.is_empty() => {
            f.render_widget(
                Paragraph::new(Span::styled(
                    "No past conversions found.",
                    Style::default().fg(theme.text_secondary),
                )),
                inner,
            );
        }
        ModalPhase::Loaded(records) => {
            view_state.history_selected = view_state.history_selected.min(records.len() - 1);

            let mut lines = vec![Line::from(Span::styled(
                format!(
                    " {:<14} {:<20} {:>6} {:>6} {:>7}",
                    "Session", "Date", "Files", "OK", "Failed"
                ),
                Style::default()
                    .fg(theme.table_header)
                    .add_modifier(Modifier::BOLD),
            ))];

            let body_height = inner.height.saturating_sub(2) as usize;
            let scroll = view_state
                .history_selected
                .saturating_sub(body_height.saturating_sub(1));
            for (idx, record) in records.iter().enumerate().skip(scroll).take(body_height) {
                let style = if idx == view_state.history_selected {
                    Style::default()
                        .fg(theme.table_selected)
                        .bg(theme.table_selected_bg)
                } else {
                    Style::default().fg(theme.table_normal)
                };
                let failed_style = if record.files_failed > 0 {
                    style.patch(Style::default().fg(theme.status_failed))
                } else {
                    style
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(
                            " {:<14} {:<20} {:>6} {:>6}",
                            truncate(&record.session_id, 14),
                            truncate(&record.local_timestamp(), 20),
                            record.files_processed,
                            record.files_success,
                        ),
                        style,
                    ),
                    Span::styled(format!(" {:>7}", record.files_failed), failed_style),
                ]));
            }

            f.render_widget(Paragraph::new(lines), inner);

            let hint = Paragraph::new(Span::styled(
                " <j>/<k> select  <d>/<Enter> download  <Esc> close ",
                Style::default().fg(theme.text_secondary),
            ));
            let hint_rect = Rect {
                x: inner.x,
                y: inner.y + inner.height.saturating_sub(1),
                width: inner.width,
                height: 1,
            };
            f.render_widget(hint, hint_rect);
        }
        ModalPhase::Closed => {}
    }

    Some(modal)
}
