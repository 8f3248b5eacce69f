//! The interrogation scene: suspects, speech, question boxes, accusation.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use btl_engine::Phase;

use crate::app::GameScreen;

/// Draw the interrogation scene.
pub fn draw(frame: &mut Frame, game: &GameScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Case header
            Constraint::Min(8),    // Suspect line-up
            Constraint::Length(6), // Question boxes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, game, chunks[0]);
    draw_suspects(frame, game, chunks[1]);
    draw_questions(frame, game, chunks[2]);
    draw_status(frame, game, chunks[3]);
}

/// Case description and round counter.
fn draw_header(frame: &mut Frame, game: &GameScreen, area: Rect) {
    let encounter = &game.encounter;
    let title = format!(" Round {}/3 ", encounter.current_round());
    let header = Paragraph::new(Line::from(vec![
        Span::styled("The case: ", Style::default().fg(Color::Yellow).bold()),
        Span::raw(encounter.scenario().description.clone()),
    ]))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(header, area);
}

/// The suspects left to right, each with their name and current speech.
fn draw_suspects(frame: &mut Frame, game: &GameScreen, area: Rect) {
    let encounter = &game.encounter;
    let roster = encounter.roster();
    let accusing = encounter.phase() == Phase::Accusation;

    let constraints: Vec<Constraint> = roster
        .iter()
        .map(|_| Constraint::Ratio(1, roster.len() as u32))
        .collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, name) in roster.iter().enumerate() {
        let targeted = accusing && i == game.suspect_cursor;
        let speaking = game
            .display_line(name)
            .map(|(_, active)| active)
            .unwrap_or(false);

        let border = if targeted {
            Style::default().fg(Color::Red).bold()
        } else if speaking {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" {name} "))
            .borders(Borders::ALL)
            .border_style(border);

        let mut lines = Vec::new();
        if let Some((text, active)) = game.display_line(name) {
            let mut spans = vec![Span::raw(text.to_string())];
            if active {
                spans.push(Span::styled("\u{258c}", Style::default().fg(Color::Green)));
            }
            lines.push(Line::from(spans));
        } else if accusing {
            lines.push(Line::from(Span::styled(
                if targeted { "Accuse?" } else { "..." },
                Style::default().fg(Color::DarkGray),
            )));
        }

        let speech = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(speech, columns[i]);
    }
}

/// The round's three question boxes, or the accusation banner.
fn draw_questions(frame: &mut Frame, game: &GameScreen, area: Rect) {
    let encounter = &game.encounter;

    if encounter.phase() == Phase::Accusation {
        let banner = Paragraph::new(Line::from(Span::styled(
            "CHOOSE THE IMPOSTER",
            Style::default().fg(Color::Red).bold(),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, area);
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let selecting = encounter.phase() == Phase::AwaitingSelection;
    let selected_id = encounter.selected_question().map(|q| q.id.clone());

    for (i, slot) in encounter.questions_for_round().iter().enumerate() {
        let is_locked = match (slot, &selected_id) {
            (btl_engine::QuestionSlot::Available(q), Some(id)) => q.id == *id,
            _ => false,
        };
        let highlighted = selecting && i == game.slot_cursor;

        let border = if is_locked {
            Style::default().fg(Color::Green).bold()
        } else if highlighted && slot.is_available() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text_style = if slot.is_available() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let question = Paragraph::new(Span::styled(slot.text().to_string(), text_style))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", i + 1))
                    .borders(Borders::ALL)
                    .border_style(border),
            );
        frame.render_widget(question, columns[i]);
    }
}

/// Phase-appropriate key hints.
fn draw_status(frame: &mut Frame, game: &GameScreen, area: Rect) {
    let hint = match game.encounter.phase() {
        Phase::AwaitingSelection => "1-3/\u{2190}\u{2192}: pick a question  Enter: ask  Esc: menu",
        Phase::Speaking => "The suspects are answering...",
        Phase::AwaitingAdvance => {
            if game.encounter.current_round() < 3 {
                "Enter/n: next round  Esc: menu"
            } else {
                "Enter/n: make your accusation  Esc: menu"
            }
        }
        Phase::Accusation => "\u{2190}\u{2192}: pick a suspect  Enter: accuse  Esc: menu",
        Phase::Resolved => "",
    };
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, area);
}
