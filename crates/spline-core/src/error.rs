use thiserror::Error;

/// Every failure in the spline core is recoverable: callers keep the last
/// good curve and carry on with the next tick.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid window: segment {segment} references missing control point at index {index}")]
    InvalidWindow { segment: usize, index: usize },

    #[error("Mutation rejected: {0}")]
    MutationRejected(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SplineError>;
