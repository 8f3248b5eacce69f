//! Interrogation-round engine for Behind the Lie.
//!
//! One encounter is three rounds of up to three questions each. The player
//! picks one question per round; the active suspects answer it in turn, one
//! speaker at a time, with the text revealed one character per tick. After
//! the third round the player accuses a suspect, and the encounter resolves
//! to a win or a loss against the impostor fixed at the start.
//!
//! The engine is single-threaded and purely reactive: it mutates state only
//! inside explicit calls ([`Encounter::select_question`],
//! [`Encounter::tick`], [`Encounter::advance_round`],
//! [`Encounter::accuse`]) driven by one external clock and event stream. It
//! performs no I/O.

/// Encounter state machine: rounds, question selection, accusation gating.
pub mod encounter;
/// Error types for the engine.
pub mod error;
/// Suspect pool and roster selection.
pub mod roster;
/// The speaking sequencer: per-question reveal of suspect responses.
pub mod speaking;
/// Accusation resolution and the final verdict.
pub mod verdict;

/// Re-export encounter types.
pub use encounter::{Encounter, Phase, QuestionSlot, RoundOutcome};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export roster helpers.
pub use roster::{CHARACTERS, choose_roster};
/// Re-export sequencer types.
pub use speaking::{ActiveSpeaker, Sequencer, SpokenLine};
/// Re-export verdict types.
pub use verdict::{Outcome, Verdict};
