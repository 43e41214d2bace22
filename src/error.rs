//! Error types for the tunebot configuration-space core

use thiserror::Error;

/// Result type alias for tunebot operations
pub type Result<T> = std::result::Result<T, TunebotError>;

/// Main error type for the tunebot crate.
///
/// Every operation in this crate is deterministic given its inputs, so none
/// of these errors is retryable; callers are expected to fail fast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TunebotError {
    /// Malformed hyperparameter, condition, or space definition
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Unknown classifier name, hyperparameter, or parameter route
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Operation not legal in the current builder state
    #[error("Invalid state: {0}")]
    InvalidStateError(String),

    /// Hyperparameter kind with no distribution rule (closed-world check)
    #[error("Unsupported hyperparameter kind: {0}")]
    UnsupportedKindError(String),

    /// Failure to resolve a space identity to a constructible estimator
    #[error("Materialization error: {0}")]
    MaterializationError(String),
}
