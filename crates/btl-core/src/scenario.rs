//! Scenario, question, and answer model types.
//!
//! A [`Scenario`] is a complete case: a difficulty tier, a narrative
//! description, and an ordered list of questions. Each [`Question`] carries
//! the responses the suspects give when asked it, an innocent line and a
//! guilty line per character. Which line a character actually speaks is
//! decided at play time by the engine, based on who the impostor is.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Difficulty tier of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Straightforward cases with obvious tells.
    Easy,
    /// Cases that need some cross-referencing.
    Medium,
    /// Cases where the guilty lines are subtle.
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from a user- or data-supplied string.
    ///
    /// Matching is case-insensitive; anything unrecognized (including the
    /// empty string) yields `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// All tiers in ascending order.
    pub fn all() -> &'static [Self] {
        &[Self::Easy, Self::Medium, Self::Hard]
    }

    /// The next tier, wrapping around. Used for menu cycling.
    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    /// The previous tier, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Easy => Self::Hard,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownDifficulty(s.to_string()))
    }
}

/// One character's authored responses to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The character this answer belongs to. Matched case-insensitively
    /// against the active roster.
    pub character: String,
    /// The line spoken when this character is innocent.
    pub innocent_response: String,
    /// The line spoken when this character is the impostor.
    pub guilty_response: String,
}

impl Answer {
    /// The response text for this character's actual role.
    pub fn response_for(&self, guilty: bool) -> &str {
        if guilty {
            &self.guilty_response
        } else {
            &self.innocent_response
        }
    }
}

/// A question the player can put to the suspects, with per-character answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the owning scenario.
    pub id: String,
    /// The question text shown to the player.
    pub text: String,
    answers: Vec<Answer>,
}

impl Question {
    /// Create a question with no answers yet.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            answers: Vec::new(),
        }
    }

    /// All authored answers, in insertion order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Look up the answer for a character (case-insensitive).
    pub fn answer_for(&self, character: &str) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|a| a.character.eq_ignore_ascii_case(character))
    }

    /// Add an answer, keeping at most one per distinct character name.
    ///
    /// A duplicate `(question, character)` pair in the source data is a
    /// data-quality issue, not an error: the later record wins.
    pub fn push_answer(&mut self, answer: Answer) {
        if let Some(existing) = self
            .answers
            .iter_mut()
            .find(|a| a.character.eq_ignore_ascii_case(&answer.character))
        {
            *existing = answer;
        } else {
            self.answers.push(answer);
        }
    }
}

/// A complete case: difficulty tier, description, and ordered questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique scenario identifier.
    pub id: String,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Narrative description of the case.
    pub description: String,
    questions: Vec<Question>,
}

impl Scenario {
    /// Create a scenario with no questions yet.
    pub fn new(
        id: impl Into<String>,
        difficulty: Difficulty,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            difficulty,
            description: description.into(),
            questions: Vec::new(),
        }
    }

    /// The questions in source-data order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// The question at `index`, if the scenario has that many.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Find a question by id, or append a new one with the given text.
    ///
    /// The first occurrence of a question id wins for its text; later records
    /// with the same id only contribute answers.
    pub fn question_mut_or_insert(&mut self, id: &str, text: &str) -> &mut Question {
        if let Some(pos) = self.questions.iter().position(|q| q.id == id) {
            &mut self.questions[pos]
        } else {
            self.questions.push(Question::new(id, text));
            let last = self.questions.len() - 1;
            &mut self.questions[last]
        }
    }
}
