//! Encounter state machine: rounds, question selection, accusation gating.
//!
//! The per-round flow is `AwaitingSelection -> Speaking -> AwaitingAdvance`;
//! rounds 1 and 2 loop back to `AwaitingSelection`, round 3 opens the
//! `Accusation`, and a single accusation moves the encounter to `Resolved`.
//! There are no backward transitions and no re-selection within a round once
//! a question is locked.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use btl_core::{Question, Scenario};

use crate::error::{EngineError, EngineResult};
use crate::speaking::Sequencer;
use crate::verdict::{Verdict, resolve_accusation};

/// Questions offered per round.
pub const QUESTIONS_PER_ROUND: usize = 3;
/// Rounds per encounter.
pub const TOTAL_ROUNDS: u8 = 3;

/// Where the encounter currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the player to pick one of the round's questions.
    AwaitingSelection,
    /// The suspects are answering the selected question.
    Speaking,
    /// The speaking queue has drained; the round can advance.
    AwaitingAdvance,
    /// All rounds done; waiting for the final accusation.
    Accusation,
    /// The accusation has been made; the encounter is over.
    Resolved,
}

/// One of the three question slots offered in a round.
#[derive(Debug, Clone, Copy)]
pub enum QuestionSlot<'a> {
    /// A real question from the scenario.
    Available(&'a Question),
    /// The scenario ran short; this slot is not selectable.
    Unavailable,
}

impl QuestionSlot<'_> {
    /// The question text, or the placeholder for an empty slot.
    pub fn text(&self) -> &str {
        match self {
            Self::Available(q) => &q.text,
            Self::Unavailable => "No question available",
        }
    }

    /// Whether the slot holds a real question.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

/// What [`Encounter::advance_round`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Moved on to the given round (2 or 3).
    NextRound(u8),
    /// Round 3 finished; the accusation is now open.
    FinalRoundComplete,
}

/// One full game session: scenario, fixed roster, fixed impostor, and the
/// round/speaking/accusation state driven by the presentation layer.
///
/// Created once per session and discarded when the session ends; starting a
/// new encounter means building a new value, which drops all in-flight state
/// synchronously.
#[derive(Debug)]
pub struct Encounter {
    scenario: Scenario,
    roster: Vec<String>,
    impostor: String,
    current_round: u8,
    selected_question: Option<usize>,
    phase: Phase,
    sequencer: Sequencer,
}

impl Encounter {
    /// Start an encounter: fix the roster, draw the impostor, open round 1.
    ///
    /// The roster is the display order (left to right) and must hold 3-5
    /// distinct names; the impostor is drawn uniformly from it and is never
    /// re-rolled for the life of the encounter.
    pub fn start(scenario: Scenario, roster: Vec<String>, rng: &mut StdRng) -> EngineResult<Self> {
        if !(3..=5).contains(&roster.len()) {
            return Err(EngineError::RosterSize(roster.len()));
        }
        for (i, name) in roster.iter().enumerate() {
            if roster[i + 1..]
                .iter()
                .any(|other| other.eq_ignore_ascii_case(name))
            {
                return Err(EngineError::DuplicateCharacter(name.clone()));
            }
        }
        if scenario.questions().is_empty() {
            return Err(EngineError::EmptyScenario(scenario.id.clone()));
        }

        let impostor = roster
            .choose(rng)
            .cloned()
            .ok_or(EngineError::RosterSize(0))?;

        Ok(Self {
            scenario,
            roster,
            impostor,
            current_round: 1,
            selected_question: None,
            phase: Phase::AwaitingSelection,
            sequencer: Sequencer::new(),
        })
    }

    /// The scenario being played.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The active roster in display order.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// The impostor fixed at the start of the encounter.
    pub fn impostor(&self) -> &str {
        &self.impostor
    }

    /// The current round, 1-based.
    pub fn current_round(&self) -> u8 {
        self.current_round
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The speaking sequencer, for rendering reveal progress.
    pub fn speaking(&self) -> &Sequencer {
        &self.sequencer
    }

    /// The question locked in for the current round, if any.
    pub fn selected_question(&self) -> Option<&Question> {
        self.selected_question.and_then(|i| self.scenario.question(i))
    }

    /// The three question slots for the current round.
    ///
    /// Round `n` covers question indices `[(n-1)*3, n*3)`; slots past the end
    /// of the scenario's question list are presented as unavailable.
    pub fn questions_for_round(&self) -> [QuestionSlot<'_>; QUESTIONS_PER_ROUND] {
        let start = (self.current_round as usize - 1) * QUESTIONS_PER_ROUND;
        std::array::from_fn(|i| match self.scenario.question(start + i) {
            Some(q) => QuestionSlot::Available(q),
            None => QuestionSlot::Unavailable,
        })
    }

    /// Lock in one of the round's question slots (0-2) and start speaking.
    ///
    /// Fails with [`EngineError::QuestionLocked`] once a question is chosen
    /// for the round (or outside the selection phase entirely) and with
    /// [`EngineError::UnavailableSlot`] for a padded slot. Failure changes
    /// nothing. Success discards any prior speaking display and seeds the
    /// queue with the roster in display order.
    pub fn select_question(&mut self, slot: usize) -> EngineResult<()> {
        if self.phase != Phase::AwaitingSelection {
            return Err(EngineError::QuestionLocked);
        }
        if slot >= QUESTIONS_PER_ROUND {
            return Err(EngineError::UnavailableSlot(slot));
        }
        let index = (self.current_round as usize - 1) * QUESTIONS_PER_ROUND + slot;
        let Some(question) = self.scenario.question(index) else {
            return Err(EngineError::UnavailableSlot(slot));
        };

        self.sequencer.begin(question, &self.roster, &self.impostor);
        self.selected_question = Some(index);
        self.phase = if self.sequencer.is_complete() {
            // Nobody on the roster had an authored answer.
            Phase::AwaitingAdvance
        } else {
            Phase::Speaking
        };
        Ok(())
    }

    /// Advance the reveal by one unit. Called once per external clock tick.
    ///
    /// Outside the speaking phase this is a no-op, so the presentation layer
    /// can tick unconditionally.
    pub fn tick(&mut self) {
        if self.phase != Phase::Speaking {
            return;
        }
        self.sequencer.tick();
        if self.sequencer.is_complete() {
            self.phase = Phase::AwaitingAdvance;
        }
    }

    /// Move past a finished round.
    ///
    /// Only valid once the round's speaking queue has drained. Rounds 1 and 2
    /// yield [`RoundOutcome::NextRound`] with the lock and speaking display
    /// cleared; finishing round 3 yields [`RoundOutcome::FinalRoundComplete`]
    /// and opens the accusation.
    pub fn advance_round(&mut self) -> EngineResult<RoundOutcome> {
        if self.phase != Phase::AwaitingAdvance {
            return Err(EngineError::RoundNotComplete);
        }

        self.sequencer.reset();
        self.selected_question = None;

        if self.current_round < TOTAL_ROUNDS {
            self.current_round += 1;
            self.phase = Phase::AwaitingSelection;
            Ok(RoundOutcome::NextRound(self.current_round))
        } else {
            self.phase = Phase::Accusation;
            Ok(RoundOutcome::FinalRoundComplete)
        }
    }

    /// Accuse a suspect and resolve the encounter.
    ///
    /// One-shot: only valid in the accusation phase, and the phase moves to
    /// [`Phase::Resolved`] immediately, so a second call fails with
    /// [`EngineError::AlreadyResolved`]. The accused name must be on the
    /// active roster (case-insensitive). The verdict always reports the true
    /// impostor.
    pub fn accuse(&mut self, character: &str) -> EngineResult<Verdict> {
        match self.phase {
            Phase::Accusation => {}
            Phase::Resolved => return Err(EngineError::AlreadyResolved),
            _ => return Err(EngineError::AccusationNotOpen),
        }
        if !self
            .roster
            .iter()
            .any(|name| name.eq_ignore_ascii_case(character))
        {
            return Err(EngineError::UnknownCharacter(character.to_string()));
        }

        self.phase = Phase::Resolved;
        Ok(resolve_accusation(character, &self.impostor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use btl_core::{Difficulty, ScenarioRepository};
    use rand::SeedableRng;

    use crate::verdict::Outcome;

    /// A scenario with `n` questions, each answered by every roster member.
    fn scenario(n: usize) -> Scenario {
        let mut rows = vec!["header".to_string()];
        for q in 1..=n {
            for name in ["Amy", "Bob", "Cid"] {
                rows.push(format!(
                    "S,Easy,A test case,Q{q},Question {q}?,{name},innocent {q},guilty {q}"
                ));
            }
        }
        ScenarioRepository::from_rows(rows).get("S").unwrap().clone()
    }

    fn roster() -> Vec<String> {
        vec!["Amy".into(), "Bob".into(), "Cid".into()]
    }

    fn encounter(n: usize) -> Encounter {
        let mut rng = StdRng::seed_from_u64(11);
        Encounter::start(scenario(n), roster(), &mut rng).unwrap()
    }

    /// Select a slot and tick the speaking queue to completion.
    fn play_question(e: &mut Encounter, slot: usize) {
        e.select_question(slot).unwrap();
        for _ in 0..10_000 {
            if e.phase() == Phase::AwaitingAdvance {
                return;
            }
            e.tick();
        }
        panic!("speaking never completed");
    }

    #[test]
    fn start_validates_roster_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = Encounter::start(scenario(3), vec!["Amy".into()], &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::RosterSize(1)));

        let six: Vec<String> = (0..6).map(|i| format!("S{i}")).collect();
        let err = Encounter::start(scenario(3), six, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::RosterSize(6)));
    }

    #[test]
    fn start_rejects_duplicate_names() {
        let mut rng = StdRng::seed_from_u64(0);
        let dup = vec!["Amy".into(), "Bob".into(), "amy".into()];
        let err = Encounter::start(scenario(3), dup, &mut rng).unwrap_err();
        assert!(matches!(err, EngineError::DuplicateCharacter(_)));
    }

    #[test]
    fn impostor_is_drawn_from_roster_and_fixed() {
        let e = encounter(9);
        assert!(e.roster().contains(&e.impostor().to_string()));
        let impostor = e.impostor().to_string();
        // Nothing between here and resolution may re-roll it.
        assert_eq!(e.impostor(), impostor);
    }

    #[test]
    fn rounds_partition_questions_in_threes() {
        let mut e = encounter(7);

        let texts: Vec<String> = e
            .questions_for_round()
            .iter()
            .map(|s| s.text().to_string())
            .collect();
        assert_eq!(texts, ["Question 1?", "Question 2?", "Question 3?"]);

        play_question(&mut e, 0);
        assert_eq!(e.advance_round().unwrap(), RoundOutcome::NextRound(2));
        assert_eq!(e.questions_for_round()[0].text(), "Question 4?");

        play_question(&mut e, 0);
        assert_eq!(e.advance_round().unwrap(), RoundOutcome::NextRound(3));

        // Round 3 of a 7-question scenario: Q7 plus two unavailable slots.
        let slots = e.questions_for_round();
        assert_eq!(slots[0].text(), "Question 7?");
        assert!(!slots[1].is_available());
        assert_eq!(slots[2].text(), "No question available");
    }

    #[test]
    fn selecting_while_locked_is_a_noop() {
        let mut e = encounter(9);
        e.select_question(0).unwrap();
        let selected = e.selected_question().unwrap().id.clone();

        let err = e.select_question(1).unwrap_err();
        assert!(matches!(err, EngineError::QuestionLocked));
        assert_eq!(e.selected_question().unwrap().id, selected);
        assert_eq!(e.phase(), Phase::Speaking);
    }

    #[test]
    fn selecting_unavailable_slot_is_a_noop() {
        let mut e = encounter(7);
        play_question(&mut e, 0);
        e.advance_round().unwrap();
        play_question(&mut e, 0);
        e.advance_round().unwrap();

        // Round 3: only slot 0 is real.
        let err = e.select_question(2).unwrap_err();
        assert!(matches!(err, EngineError::UnavailableSlot(2)));
        assert_eq!(e.phase(), Phase::AwaitingSelection);

        let err = e.select_question(7).unwrap_err();
        assert!(matches!(err, EngineError::UnavailableSlot(7)));
    }

    #[test]
    fn advance_before_queue_drains_is_rejected() {
        let mut e = encounter(9);
        assert!(matches!(
            e.advance_round().unwrap_err(),
            EngineError::RoundNotComplete
        ));

        e.select_question(0).unwrap();
        assert!(matches!(
            e.advance_round().unwrap_err(),
            EngineError::RoundNotComplete
        ));
        assert_eq!(e.current_round(), 1);
    }

    #[test]
    fn advancing_clears_speaking_display_and_lock() {
        let mut e = encounter(9);
        play_question(&mut e, 1);
        assert!(!e.speaking().finished().is_empty());

        e.advance_round().unwrap();
        assert!(e.speaking().finished().is_empty());
        assert!(e.selected_question().is_none());
        assert_eq!(e.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn full_playthrough_reaches_accusation() {
        let mut e = encounter(9);
        for round in 1..=3u8 {
            assert_eq!(e.current_round(), round);
            play_question(&mut e, 0);
            let outcome = e.advance_round().unwrap();
            if round < 3 {
                assert_eq!(outcome, RoundOutcome::NextRound(round + 1));
            } else {
                assert_eq!(outcome, RoundOutcome::FinalRoundComplete);
            }
        }
        assert_eq!(e.phase(), Phase::Accusation);
    }

    #[test]
    fn accuse_before_final_round_is_rejected() {
        let mut e = encounter(9);
        assert!(matches!(
            e.accuse("Amy").unwrap_err(),
            EngineError::AccusationNotOpen
        ));
    }

    #[test]
    fn accusation_resolves_win_and_lose() {
        let mut e = encounter(9);
        for _ in 0..3 {
            play_question(&mut e, 0);
            e.advance_round().unwrap();
        }

        let impostor = e.impostor().to_string();
        let innocent = roster()
            .into_iter()
            .find(|n| !n.eq_ignore_ascii_case(&impostor))
            .unwrap();

        let mut lose_run = encounter(9);
        for _ in 0..3 {
            play_question(&mut lose_run, 0);
            lose_run.advance_round().unwrap();
        }

        let v = e.accuse(&impostor).unwrap();
        assert_eq!(v.outcome, Outcome::Win);
        assert_eq!(v.impostor, impostor);

        let v = lose_run.accuse(&innocent).unwrap();
        assert_eq!(v.outcome, Outcome::Lose);
        assert_eq!(v.impostor, impostor);
    }

    #[test]
    fn second_accusation_is_rejected() {
        let mut e = encounter(9);
        for _ in 0..3 {
            play_question(&mut e, 0);
            e.advance_round().unwrap();
        }
        e.accuse("Amy").unwrap();
        assert!(matches!(
            e.accuse("Bob").unwrap_err(),
            EngineError::AlreadyResolved
        ));
    }

    #[test]
    fn accusing_a_stranger_is_rejected() {
        let mut e = encounter(9);
        for _ in 0..3 {
            play_question(&mut e, 0);
            e.advance_round().unwrap();
        }
        assert!(matches!(
            e.accuse("Butler").unwrap_err(),
            EngineError::UnknownCharacter(_)
        ));
        // Still open for a real accusation afterwards.
        assert_eq!(e.phase(), Phase::Accusation);
    }

    #[test]
    fn guilty_line_goes_to_the_impostor() {
        let mut e = encounter(9);
        let impostor = e.impostor().to_string();
        play_question(&mut e, 0);

        for line in e.speaking().finished() {
            if line.character.eq_ignore_ascii_case(&impostor) {
                assert_eq!(line.line, "guilty 1");
            } else {
                assert_eq!(line.line, "innocent 1");
            }
        }
    }

    #[test]
    fn tick_outside_speaking_is_harmless() {
        let mut e = encounter(9);
        e.tick();
        assert_eq!(e.phase(), Phase::AwaitingSelection);
        play_question(&mut e, 0);
        e.tick();
        assert_eq!(e.phase(), Phase::AwaitingAdvance);
    }
}
