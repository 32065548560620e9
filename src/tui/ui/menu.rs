use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(60, 70, size);
    let block = Block::default().title("Choose a game").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner_all);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it, style)));
    }
    let list = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(list, rows[0]);

    let hints = vec![
        Line::from(Span::styled(
            "Switching ends the current session and starts over.",
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            "[Enter] Play  [Esc] Back  [↑/↓] Move",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let hints = Paragraph::new(hints).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(hints, rows[1]);
}
