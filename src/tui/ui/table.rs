use crate::cards::Card;
use crate::config::MAX_MULTIPLIER;
use crate::events::button_label;
use crate::keymap::HOLD_KEYS;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let status_height: u16 = 3 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // header
            Constraint::Min(9),                // cards + paytable
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let session = app.game.session();
    let header_lines = vec![
        Line::from(Span::styled(
            app.game_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Bankroll: {}   Bet: {} ({}x{})   Hands: {}",
            app.score(),
            session.bet(),
            session.multiplier(),
            session.bet_unit(),
            session.hands_played(),
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("video-poker").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    draw_hand(f, body[0], app);
    draw_paytable(f, body[1], app);

    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info: Vec<Line> = app.messages().iter().map(|m| Line::from(m.as_str())).collect();
    if app.finished() {
        left_info.push(Line::from(Span::styled(
            "Press any key to exit.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let right_keys = vec![
        Line::from(format!("Enter: {}", button_label(app.button()))),
        Line::from("1-5 bet • A-K game • q quit"),
        Line::from("? help • h history • m menu"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let title = if app.hand_name().is_empty() {
        "Hand".to_string()
    } else {
        format!("Hand: {}", app.hand_name())
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(block, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(1), Constraint::Length(1)])
        .split(inner(area));

    let card_cols = columns(rows[0], 5);
    let held_cols = columns(rows[1], 5);
    let key_cols = columns(rows[2], 5);
    let held = app.held();
    for slot in 0..5 {
        let card = app.cards().map(|cards| cards[slot]);
        let border = if held[slot] { Some(Color::Yellow) } else { None };
        render_card_widget(f, card_cols[slot], card, border);

        let mark = if held[slot] { "HELD" } else { "" };
        let mark = Paragraph::new(Span::styled(
            mark,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(mark, held_cols[slot]);

        let key = match HOLD_KEYS[slot] {
            ' ' => "Space".to_string(),
            c => c.to_ascii_uppercase().to_string(),
        };
        let key = Paragraph::new(Span::styled(key, Style::default().add_modifier(Modifier::DIM)))
            .alignment(Alignment::Center);
        f.render_widget(key, key_cols[slot]);
    }
}

fn draw_paytable(f: &mut Frame, area: Rect, app: &AppState) {
    let table = app.game.paytable();
    let session = app.game.session();
    let last = app.game.last_category();
    let block = Block::default().title("Paytable").borders(Borders::ALL);

    let header = Row::new(
        std::iter::once(Cell::from("")).chain(
            (1..=MAX_MULTIPLIER).map(|m| Cell::from(format!("{}", u64::from(m) * session.bet_unit()))),
        ),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = table.rows().filter(|(_, m)| *m > 0).map(|(category, m)| {
        let cells = std::iter::once(Cell::from(category.name())).chain((1..=MAX_MULTIPLIER).map(
            |k| {
                let style = if k == session.multiplier() {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                let pay = u64::from(m) * u64::from(k) * session.bet_unit();
                Cell::from(pay.to_string()).style(style)
            },
        ));
        let row = Row::new(cells);
        if last == Some(category) {
            row.style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(6),
    ];
    let widget = Table::new(rows, widths).header(header).block(block);
    f.render_widget(widget, area);
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No hands played yet."));
    } else {
        for entry in entries.iter().rev() {
            let line = format!(
                "#{:<4} {}  {:<16} bet {:<4} paid {:<6} bankroll {}",
                entry.number,
                entry.hand,
                entry.category.name(),
                entry.bet,
                entry.payout,
                entry.bankroll
            );
            lines.push(Line::from(line));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: h or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Enter: deal a new hand / draw"),
        Line::from("- Space, J, K, L, ;: hold or release cards 1-5"),
        Line::from("- 1-5: bet that many units (between hands)"),
        Line::from("- A-K: switch game (ends the session)"),
        Line::from("- q or e: quit"),
        Line::from("- h: history"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- m: open / close game picker"),
        Line::from("- Up / Down: move selection"),
        Line::from("- Enter: play the selected game"),
        Line::from("- Esc: back"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_style(card: Card) -> Style {
    if card.suit().is_red() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.label(), suit_style(c))),
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
