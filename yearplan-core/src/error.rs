//! Error types for the yearplan core.

use thiserror::Error;

/// Errors that can occur in planner plumbing (config, persistence).
///
/// Store mutations never produce errors: invalid or not-found requests
/// are absorbed as no-ops.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date key '{0}'. Expected YYYY-MM-DD")]
    InvalidDateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
