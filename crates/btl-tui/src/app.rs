//! Application state and event handling.
//!
//! `App` owns the repository, the RNG, the menu settings, and whichever
//! screen is active. Key events and clock ticks arrive from the terminal
//! loop; everything else is engine calls.

use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;

use btl_core::{Difficulty, ScenarioRepository};
use btl_engine::{CHARACTERS, Encounter, Phase, Verdict, choose_roster};

/// Rows of the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Start a new game.
    Start,
    /// Cycle the difficulty tier.
    Difficulty,
    /// Adjust the suspect count.
    Suspects,
    /// Leave the game.
    Quit,
}

impl MenuItem {
    /// Menu rows in display order.
    pub const ALL: [Self; 4] = [Self::Start, Self::Difficulty, Self::Suspects, Self::Quit];

    fn index(self) -> usize {
        Self::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }

    /// The row below, clamped to the bottom.
    pub fn down(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    /// The row above, clamped to the top.
    pub fn up(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// State for the interrogation scene.
pub struct GameScreen {
    /// The live encounter.
    pub encounter: Encounter,
    /// Highlighted question slot (0-2) during selection.
    pub slot_cursor: usize,
    /// Highlighted suspect during the accusation line-up.
    pub suspect_cursor: usize,
}

impl GameScreen {
    /// The text currently on display for a suspect, if any, along with
    /// whether they are still actively speaking.
    pub fn display_line(&self, character: &str) -> Option<(&str, bool)> {
        let speaking = self.encounter.speaking();
        if let Some(active) = speaking.active()
            && active.character().eq_ignore_ascii_case(character)
        {
            return Some((active.revealed_text(), true));
        }
        speaking
            .finished()
            .iter()
            .find(|s| s.character.eq_ignore_ascii_case(character))
            .map(|s| (s.line.as_str(), false))
    }
}

/// Which screen is on display.
pub enum Screen {
    /// The main menu.
    Menu,
    /// The interrogation scene (rounds and accusation).
    Game(GameScreen),
    /// The end-of-game verdict.
    Verdict(Verdict),
}

/// Top-level application state.
pub struct App {
    /// Loaded scenario data.
    pub repository: ScenarioRepository,
    /// The single RNG for scenario pick, roster draw, and impostor draw.
    pub rng: StdRng,
    /// Currently selected difficulty.
    pub difficulty: Difficulty,
    /// Currently selected suspect count (3-5).
    pub suspects: usize,
    /// Active screen.
    pub screen: Screen,
    /// Highlighted menu row.
    pub menu_cursor: MenuItem,
    /// One-line note about the data load, shown on the menu.
    pub load_note: String,
    /// Menu-level warning, e.g. no scenario for the chosen difficulty.
    pub menu_error: Option<String>,
    /// Set when the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Create the application on the main menu.
    pub fn new(
        repository: ScenarioRepository,
        rng: StdRng,
        difficulty: Difficulty,
        suspects: usize,
        load_note: String,
    ) -> Self {
        Self {
            repository,
            rng,
            difficulty,
            suspects: suspects.clamp(3, 5),
            screen: Screen::Menu,
            menu_cursor: MenuItem::Start,
            load_note,
            menu_error: None,
            should_quit: false,
        }
    }

    /// Forward one clock tick to the live encounter, if any.
    pub fn on_tick(&mut self) {
        if let Screen::Game(game) = &mut self.screen {
            game.encounter.tick();
        }
    }

    /// Handle a key press on whichever screen is active.
    pub fn on_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::Menu => self.on_menu_key(key.code),
            Screen::Game(_) => self.on_game_key(key.code),
            Screen::Verdict(_) => self.on_verdict_key(key.code),
        }
    }

    /// Start a fresh encounter with the current settings.
    pub fn start_game(&mut self) {
        self.menu_error = None;
        let Some(scenario) = self
            .repository
            .random_scenario(self.difficulty, &mut self.rng)
            .cloned()
        else {
            self.menu_error = Some(format!("No {} scenarios available.", self.difficulty));
            return;
        };

        let roster = choose_roster(&CHARACTERS, self.suspects, &mut self.rng);
        match Encounter::start(scenario, roster, &mut self.rng) {
            Ok(encounter) => {
                self.screen = Screen::Game(GameScreen {
                    encounter,
                    slot_cursor: 0,
                    suspect_cursor: 0,
                });
            }
            Err(e) => self.menu_error = Some(e.to_string()),
        }
    }

    fn on_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.menu_cursor = self.menu_cursor.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu_cursor = self.menu_cursor.down(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust_setting(false),
            KeyCode::Right | KeyCode::Char('l') => self.adjust_setting(true),
            KeyCode::Enter => match self.menu_cursor {
                MenuItem::Start => self.start_game(),
                MenuItem::Quit => self.should_quit = true,
                MenuItem::Difficulty | MenuItem::Suspects => self.adjust_setting(true),
            },
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn adjust_setting(&mut self, forward: bool) {
        match self.menu_cursor {
            MenuItem::Difficulty => {
                self.difficulty = if forward {
                    self.difficulty.next()
                } else {
                    self.difficulty.prev()
                };
                self.menu_error = None;
            }
            MenuItem::Suspects => {
                self.suspects = if forward {
                    (self.suspects + 1).min(5)
                } else {
                    (self.suspects - 1).max(3)
                };
            }
            _ => {}
        }
    }

    fn on_game_key(&mut self, code: KeyCode) {
        // Esc abandons the encounter and returns to the menu, dropping all
        // in-flight state synchronously.
        if matches!(code, KeyCode::Esc) {
            self.screen = Screen::Menu;
            return;
        }

        let Screen::Game(game) = &mut self.screen else {
            return;
        };

        match game.encounter.phase() {
            Phase::AwaitingSelection => match code {
                KeyCode::Left | KeyCode::Char('h') => {
                    game.slot_cursor = game.slot_cursor.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    game.slot_cursor = (game.slot_cursor + 1).min(2);
                }
                KeyCode::Char(c @ '1'..='3') => {
                    let slot = (c as usize) - ('1' as usize);
                    game.slot_cursor = slot;
                    // A locked or unavailable slot is a silent no-op.
                    let _ = game.encounter.select_question(slot);
                }
                KeyCode::Enter => {
                    let _ = game.encounter.select_question(game.slot_cursor);
                }
                _ => {}
            },
            Phase::Speaking => {
                // The reveal is driven by the clock; input waits.
            }
            Phase::AwaitingAdvance => {
                if matches!(code, KeyCode::Enter | KeyCode::Char('n'))
                    && game.encounter.advance_round().is_ok()
                {
                    game.slot_cursor = 0;
                    game.suspect_cursor = 0;
                }
            }
            Phase::Accusation => match code {
                KeyCode::Left | KeyCode::Char('h') => {
                    game.suspect_cursor = game.suspect_cursor.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    let last = game.encounter.roster().len() - 1;
                    game.suspect_cursor = (game.suspect_cursor + 1).min(last);
                }
                KeyCode::Enter => {
                    let accused = game.encounter.roster()[game.suspect_cursor].clone();
                    if let Ok(verdict) = game.encounter.accuse(&accused) {
                        self.screen = Screen::Verdict(verdict);
                    }
                }
                _ => {}
            },
            Phase::Resolved => {}
        }
    }

    fn on_verdict_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char('r') => self.start_game(),
            KeyCode::Char('m') | KeyCode::Esc => self.screen = Screen::Menu,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn data() -> Vec<String> {
        let mut rows = vec!["header".to_string()];
        for q in 1..=9 {
            for name in CHARACTERS {
                rows.push(format!(
                    "S,Easy,A case,Q{q},Question {q}?,{name},inn {q},guilt {q}"
                ));
            }
        }
        rows
    }

    fn app() -> App {
        App::new(
            ScenarioRepository::from_rows(data()),
            StdRng::seed_from_u64(5),
            Difficulty::Easy,
            4,
            String::new(),
        )
    }

    #[test]
    fn menu_cycles_settings() {
        let mut a = app();
        a.on_key(key(KeyCode::Down));
        assert_eq!(a.menu_cursor, MenuItem::Difficulty);
        a.on_key(key(KeyCode::Right));
        assert_eq!(a.difficulty, Difficulty::Medium);
        a.on_key(key(KeyCode::Left));
        assert_eq!(a.difficulty, Difficulty::Easy);

        a.on_key(key(KeyCode::Down));
        a.on_key(key(KeyCode::Right));
        assert_eq!(a.suspects, 5);
        a.on_key(key(KeyCode::Right));
        assert_eq!(a.suspects, 5);
        for _ in 0..5 {
            a.on_key(key(KeyCode::Left));
        }
        assert_eq!(a.suspects, 3);
    }

    #[test]
    fn start_game_enters_game_screen() {
        let mut a = app();
        a.on_key(key(KeyCode::Enter));
        assert!(matches!(a.screen, Screen::Game(_)));
    }

    #[test]
    fn missing_difficulty_shows_menu_error() {
        let mut a = app();
        a.difficulty = Difficulty::Hard;
        a.start_game();
        assert!(matches!(a.screen, Screen::Menu));
        assert!(a.menu_error.as_deref().unwrap().contains("Hard"));
    }

    #[test]
    fn full_game_via_keys() {
        let mut a = app();
        a.start_game();

        for _ in 0..3 {
            a.on_key(key(KeyCode::Char('1')));
            // Drive the reveal to completion.
            for _ in 0..100_000 {
                let Screen::Game(game) = &a.screen else {
                    panic!("left game screen")
                };
                if game.encounter.phase() != Phase::Speaking {
                    break;
                }
                a.on_tick();
            }
            a.on_key(key(KeyCode::Enter));
        }

        let Screen::Game(game) = &a.screen else {
            panic!("left game screen")
        };
        assert_eq!(game.encounter.phase(), Phase::Accusation);

        a.on_key(key(KeyCode::Enter));
        assert!(matches!(a.screen, Screen::Verdict(_)));
    }

    #[test]
    fn escape_abandons_encounter() {
        let mut a = app();
        a.start_game();
        a.on_key(key(KeyCode::Esc));
        assert!(matches!(a.screen, Screen::Menu));
    }

    #[test]
    fn display_line_tracks_active_speaker() {
        let mut a = app();
        a.start_game();
        a.on_key(key(KeyCode::Char('1')));
        a.on_tick();

        let Screen::Game(game) = &a.screen else {
            panic!("expected game screen")
        };
        let first = game.encounter.roster()[0].clone();
        let (text, speaking) = game.display_line(&first).unwrap();
        assert!(speaking);
        assert_eq!(text.chars().count(), 1);
    }
}
