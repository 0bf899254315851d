use thiserror::Error;

/// Custom error type for the ScalarNet engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarNetError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid target: {reason}")]
    InvalidTarget { reason: String },

    #[error("Batch size mismatch: {inputs} inputs for {targets} targets")]
    BatchSizeMismatch { inputs: usize, targets: usize },

    #[error("Cannot reduce an empty batch")]
    EmptyBatch,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Backward error: {0}")]
    BackwardError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
