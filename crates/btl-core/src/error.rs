//! Error types for the core scenario model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when working with scenario data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A difficulty string did not name one of the known tiers.
    #[error("unknown difficulty: \"{0}\"")]
    UnknownDifficulty(String),
}
