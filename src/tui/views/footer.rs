//! Footer view rendering
//!
//! Shows the keybinding hints, or the path-entry prompt while the user is
//! typing a file path.

use crate::tui::app::state::InputMode;
use crate::tui::keybindings::get_navigation_commands;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer line
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    input_mode: InputMode,
    input_buffer: &str,
    theme: &Theme,
) {
    let line = match input_mode {
        InputMode::PathEntry => Line::from(vec![
            Span::styled(
                "Add file: ",
                Style::default()
                    .fg(theme.input_prompt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(input_buffer, Style::default().fg(theme.text_primary)),
            Span::styled("█", Style::default().fg(theme.input_prompt)),
            Span::raw("  "),
            Span::styled(
                "(Enter to add, Esc to cancel)",
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        InputMode::Normal => {
            let mut spans = Vec::new();
            for (idx, cmd) in get_navigation_commands().iter().enumerate() {
                if idx > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(theme.footer_text)));
                }
                spans.push(Span::styled(
                    format!("<{}>", cmd.key.trim()),
                    Style::default()
                        .fg(theme.footer_key)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {}", cmd.label),
                    Style::default().fg(theme.footer_text),
                ));
            }
            Line::from(spans)
        }
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
