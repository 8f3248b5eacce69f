//! The win/lose screen.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use btl_engine::{Outcome, Verdict};

use crate::views::centered_rect;

/// Draw the verdict screen.
pub fn draw(frame: &mut Frame, verdict: &Verdict) {
    let area = centered_rect(50, 40, frame.area());

    let color = match verdict.outcome {
        Outcome::Win => Color::Green,
        Outcome::Lose => Color::Red,
    };

    let lines = vec![
        Line::from(Span::styled(
            verdict.outcome.to_string(),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The imposter was "),
            Span::styled(
                verdict.impostor.clone(),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/r: play again  m: menu  q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Case Closed ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(popup, area);
}
