//! Core scenario data for Behind the Lie: the scenario/question/answer
//! graph, raw-record parsing, and the repository that answers
//! random-scenario queries by difficulty.
//!
//! This crate never performs I/O. Callers hand [`ScenarioRepository::load`]
//! an iterator of raw record lines (typically the lines of a CSV file) and
//! get a typed scenario graph back.

/// Error types used throughout the crate.
pub mod error;
/// Raw record splitting and field extraction.
pub mod record;
/// The scenario repository: grouping, loading, and random queries.
pub mod repository;
/// Scenario, question, and answer model types.
pub mod scenario;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the raw record type.
pub use record::RawRecord;
/// Re-export repository types.
pub use repository::{LoadSummary, ScenarioRepository};
/// Re-export model types.
pub use scenario::{Answer, Difficulty, Question, Scenario};
