//! Error types for the interrogation engine.

use thiserror::Error;

/// Alias for `Result<T, EngineError>`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving an encounter.
///
/// Every failure leaves the encounter state untouched: a rejected selection
/// or advance is a no-op from the caller's perspective.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The active roster must hold between 3 and 5 suspects.
    #[error("active roster must have 3-5 suspects, got {0}")]
    RosterSize(usize),

    /// The same character appears twice on the roster.
    #[error("duplicate character on roster: \"{0}\"")]
    DuplicateCharacter(String),

    /// The scenario has no questions to ask.
    #[error("scenario \"{0}\" has no questions")]
    EmptyScenario(String),

    /// A question is already locked in for the current round.
    #[error("a question is already locked in for this round")]
    QuestionLocked,

    /// The slot points past the scenario's question list.
    #[error("no question available in slot {0}")]
    UnavailableSlot(usize),

    /// The speaking queue has not drained yet.
    #[error("the round is not complete yet")]
    RoundNotComplete,

    /// All three rounds must finish before an accusation.
    #[error("the accusation is not open yet")]
    AccusationNotOpen,

    /// The encounter has already been resolved.
    #[error("the encounter is already resolved")]
    AlreadyResolved,

    /// The accused name is not on the active roster.
    #[error("unknown suspect: \"{0}\"")]
    UnknownCharacter(String),
}
