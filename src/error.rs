//! Error types for puzzle solving

use thiserror::Error;

/// Result type alias for solver operations
pub type SolveResult<T> = std::result::Result<T, SolveError>;

/// Errors that can occur while driving the solver
#[derive(Debug, Error)]
pub enum SolveError {
    /// Z3 reported sat but the model could not be read back
    #[error("failed to extract model: {0}")]
    ModelError(String),
}
