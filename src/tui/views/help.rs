//! Help overlay rendering

use super::helpers::centered_rect;
use crate::tui::keybindings::get_help_commands;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the keybinding help overlay
pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let commands = get_help_commands();
    let height = (commands.len() as u16 + 4).min(area.height);
    let modal = centered_rect(60, 100, area);
    let modal = Rect {
        y: area.y + (area.height.saturating_sub(height)) / 2,
        height,
        ..modal
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .border_style(Style::default().fg(theme.modal_border));
    let inner = block.inner(modal);

    let mut lines = vec![Line::from("")];
    for (key, label) in commands {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<18}"),
                Style::default()
                    .fg(theme.footer_key)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(label, Style::default().fg(theme.text_primary)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press ? or Esc to close",
        Style::default().fg(theme.text_secondary),
    )));

    f.render_widget(Clear, modal);
    f.render_widget(block, modal);
    f.render_widget(Paragraph::new(lines), inner);
}
