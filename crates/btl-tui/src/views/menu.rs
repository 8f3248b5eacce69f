//! The main menu: start, difficulty, suspect count, quit.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, MenuItem};
use crate::views::centered_rect;

/// Draw the main menu.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    let block = Block::default()
        .title(" Behind the Lie ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "BEHIND THE LIE: CRIME DETECTIVE",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(Span::styled(
            "One of them is lying. Three rounds to find out who.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for item in MenuItem::ALL {
        let selected = app.menu_cursor == item;
        let marker = if selected { "\u{25b8} " } else { "  " };
        let label = match item {
            MenuItem::Start => "Start Game".to_string(),
            MenuItem::Difficulty => format!("Difficulty      \u{2039} {} \u{203a}", app.difficulty),
            MenuItem::Suspects => format!("Num. of Suspects \u{2039} {} \u{203a}", app.suspects),
            MenuItem::Quit => "Exit".to_string(),
        };
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!("{marker}{label}"), style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        app.load_note.clone(),
        Style::default().fg(Color::DarkGray),
    )));
    if let Some(err) = &app.menu_error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "\u{2191}\u{2193}: move  \u{2190}\u{2192}: adjust  Enter: select  q: quit",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
