//! Stacked toast rendering
//!
//! Notifications stack down from the top-right corner, oldest first. Entries
//! in their exit transition render dimmed until the sweep drops them.

use crate::tui::constants::NOTIFICATION_WIDTH;
use crate::tui::theme::Theme;
use crate::ux::Notifications;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render the notification stack on top of whatever is underneath
pub fn render_notifications(
    f: &mut Frame,
    area: Rect,
    notifications: &Notifications,
    theme: &Theme,
    no_icons: bool,
) {
    if notifications.is_empty() {
        return;
    }

    let width = NOTIFICATION_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width);
    let mut y = area.y;

    for notification in notifications.visible() {
        let height = 3u16;
        if y + height > area.y + area.height {
            break;
        }
        let rect = Rect {
            x,
            y,
            width,
            height,
        };

        let color = if notification.is_removing() {
            theme.toast_removing
        } else {
            theme.severity_color(notification.severity)
        };
        let prefix = if no_icons {
            format!("[{}] ", notification.severity.label().to_uppercase())
        } else {
            format!("{} ", notification.severity.icon())
        };

        let inner_width = width.saturating_sub(2) as usize;
        let mut message = notification.message.clone();
        if prefix.chars().count() + message.chars().count() > inner_width {
            let keep = inner_width
                .saturating_sub(prefix.chars().count())
                .saturating_sub(1);
            message = message.chars().take(keep).collect();
            message.push('…');
        }

        let body = Paragraph::new(Line::from(vec![
            Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(message, Style::default().fg(color)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        f.render_widget(Clear, rect);
        f.render_widget(body, rect);
        y += height;
    }
}
