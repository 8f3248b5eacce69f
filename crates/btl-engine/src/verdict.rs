//! Accusation resolution and the final verdict.

use serde::{Deserialize, Serialize};

/// Did the player catch the impostor?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The accused suspect was the impostor.
    Win,
    /// The accused suspect was innocent.
    Lose,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "YOU WIN"),
            Self::Lose => write!(f, "YOU LOSE"),
        }
    }
}

/// The result of the final accusation.
///
/// The true impostor is reported whether the player won or lost, so the
/// presentation layer can always display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Win or lose.
    pub outcome: Outcome,
    /// The impostor fixed at the start of the encounter.
    pub impostor: String,
}

/// Compare the accused suspect against the fixed impostor.
///
/// The comparison is case-insensitive. This is a pure function; the one-shot
/// contract (no second accusation per encounter) is enforced by
/// [`Encounter::accuse`](crate::Encounter::accuse).
pub fn resolve_accusation(accused: &str, impostor: &str) -> Verdict {
    let outcome = if accused.eq_ignore_ascii_case(impostor) {
        Outcome::Win
    } else {
        Outcome::Lose
    };
    Verdict {
        outcome,
        impostor: impostor.to_string(),
    }
}
