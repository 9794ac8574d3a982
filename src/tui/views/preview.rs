//! Preview modal rendering

use super::helpers::centered_rect;
use crate::tui::app::state::ViewState;
use crate::tui::constants::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::tui::theme::Theme;
use crate::ux::{ModalPhase, PreviewController};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the preview modal overlay. Returns the modal rect so backdrop
/// clicks can be hit-tested against it.
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    preview: &PreviewController,
    view_state: &mut ViewState,
    theme: &Theme,
) -> Option<Rect> {
    let phase = preview.phase()?;
    if matches!(phase, ModalPhase::Closed) {
        return None;
    }

    let modal = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area);
    let title = preview.title().unwrap_or("Preview");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(theme.modal_border));
    let inner = block.inner(modal);

    f.render_widget(Clear, modal);
    f.render_widget(block, modal);

    match phase {
        ModalPhase::Loading => {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Fetching preview...",
                Style::default().fg(theme.text_secondary),
            )));
            f.render_widget(loading, inner);
        }
        ModalPhase::Errored(message) => {
            let error = Paragraph::new(vec![
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
            .wrap(ratatui::widgets::Wrap { trim: false });
            f.render_widget(error, inner);
        }
        ModalPhase::Loaded(doc) => {
            view_state.page_size = inner.height.max(1) as usize;
            let max_scroll = doc.lines.len().saturating_sub(inner.height as usize);
            view_state.preview_scroll = view_state.preview_scroll.min(max_scroll);

            let lines: Vec<Line> = doc
                .lines
                .iter()
                .skip(view_state.preview_scroll)
                .take(inner.height as usize)
                .map(|l| Line::from(Span::styled(l.as_str(), Style::default().fg(theme.text_primary))))
                .collect();
            f.render_widget(Paragraph::new(lines), inner);

            if doc.lines.len() > inner.height as usize {
                let indicator = format!(
                    " {}/{} ",
                    view_state.preview_scroll + inner.height as usize,
                    doc.lines.len()
                );
                let indicator_rect = Rect {
                    x: modal.x + modal.width.saturating_sub(indicator.len() as u16 + 2),
                    y: modal.y + modal.height.saturating_sub(1),
                    width: (indicator.len() as u16).min(modal.width),
                    height: 1,
                };
                f.render_widget(
                    Paragraph::new(Span::styled(
                        indicator,
                        Style::default().fg(theme.text_secondary),
                    )),
                    indicator_rect,
                );
            }
        }
        ModalPhase::Closed => {}
    }

    Some(modal)
}
