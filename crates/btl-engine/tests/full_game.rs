//! End-to-end game flow: load scenario data, draw a roster, play all three
//! rounds tick by tick, and resolve the accusation.

use btl_core::{Difficulty, ScenarioRepository};
use btl_engine::{
    CHARACTERS, Encounter, Outcome, Phase, RoundOutcome, choose_roster,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Nine questions, answered by four of the canonical suspects. "Tutor" never
/// answers, exercising the silent-skip path whenever they land on the roster.
fn data() -> Vec<String> {
    let mut rows = vec![
        "scenarioId,difficulty,description,questionId,questionText,character,innocentResponse,guiltyResponse"
            .to_string(),
    ];
    for q in 1..=9 {
        for name in ["Bystander", "Lawyer", "Doctor", "Old Man"] {
            rows.push(format!(
                r#"CASE-1,Medium,"A storm, a scream, a missing brooch.",Q{q},"Question {q}, yes?",{name},"Innocent answer {q}.","Guilty answer {q}.""#
            ));
        }
    }
    rows
}

#[test]
fn full_session_from_rows_to_verdict() {
    let repo = ScenarioRepository::from_rows(data());
    let mut rng = StdRng::seed_from_u64(2024);

    let scenario = repo
        .random_scenario(Difficulty::Medium, &mut rng)
        .expect("a Medium scenario is loaded")
        .clone();
    assert_eq!(scenario.description, "A storm, a scream, a missing brooch.");

    let roster = choose_roster(&CHARACTERS, 4, &mut rng);
    let mut encounter = Encounter::start(scenario, roster, &mut rng).unwrap();
    let impostor = encounter.impostor().to_string();

    for round in 1..=3u8 {
        assert_eq!(encounter.current_round(), round);
        assert_eq!(encounter.phase(), Phase::AwaitingSelection);

        encounter.select_question(0).unwrap();

        // Tick until the speaking queue drains, checking the reveal only
        // ever grows within one speaker.
        let mut last_len = 0usize;
        let mut last_speaker = String::new();
        for _ in 0..100_000 {
            if encounter.phase() != Phase::Speaking {
                break;
            }
            encounter.tick();
            if let Some(active) = encounter.speaking().active() {
                if active.character() == last_speaker {
                    assert!(active.revealed_text().len() >= last_len);
                } else {
                    last_speaker = active.character().to_string();
                }
                last_len = active.revealed_text().len();
            }
        }
        assert_eq!(encounter.phase(), Phase::AwaitingAdvance);

        // Every roster member with an authored answer spoke, in order; the
        // impostor got the guilty line.
        for spoken in encounter.speaking().finished() {
            let expected = if spoken.character.eq_ignore_ascii_case(&impostor) {
                format!("Guilty answer {}.", (round - 1) * 3 + 1)
            } else {
                format!("Innocent answer {}.", (round - 1) * 3 + 1)
            };
            assert_eq!(spoken.line, expected);
            assert_ne!(spoken.character, "Tutor");
        }

        let outcome = encounter.advance_round().unwrap();
        match round {
            1 | 2 => assert_eq!(outcome, RoundOutcome::NextRound(round + 1)),
            _ => assert_eq!(outcome, RoundOutcome::FinalRoundComplete),
        }
    }

    assert_eq!(encounter.phase(), Phase::Accusation);
    let verdict = encounter.accuse(&impostor).unwrap();
    assert_eq!(verdict.outcome, Outcome::Win);
    assert_eq!(verdict.impostor, impostor);
    assert_eq!(encounter.phase(), Phase::Resolved);
}

#[test]
fn losing_session_still_reports_impostor() {
    let repo = ScenarioRepository::from_rows(data());
    let mut rng = StdRng::seed_from_u64(7);

    let scenario = repo
        .random_scenario(Difficulty::Medium, &mut rng)
        .unwrap()
        .clone();
    let roster = choose_roster(&CHARACTERS, 3, &mut rng);
    let mut encounter = Encounter::start(scenario, roster.clone(), &mut rng).unwrap();

    for _ in 0..3 {
        encounter.select_question(0).unwrap();
        while encounter.phase() == Phase::Speaking {
            encounter.tick();
        }
        encounter.advance_round().unwrap();
    }

    let impostor = encounter.impostor().to_string();
    let innocent = roster
        .iter()
        .find(|n| !n.eq_ignore_ascii_case(&impostor))
        .unwrap();

    let verdict = encounter.accuse(innocent).unwrap();
    assert_eq!(verdict.outcome, Outcome::Lose);
    assert_eq!(verdict.impostor, impostor);
}
