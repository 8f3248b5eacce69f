//! Draw functions, one module per screen.

/// The interrogation scene and accusation line-up.
pub mod game;
/// The main menu.
pub mod menu;
/// The win/lose screen.
pub mod verdict;

use ratatui::prelude::*;

use crate::app::{App, Screen};

/// Draw whichever screen is active.
pub fn draw(frame: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Menu => menu::draw(frame, app),
        Screen::Game(game) => game::draw(frame, game),
        Screen::Verdict(v) => verdict::draw(frame, v),
    }
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
