use thiserror::Error;

/// Errors raised by the pair-matching engine
#[derive(Debug, Error)]
pub enum PairingError {
    /// A hero record cannot be used with the requested filters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The filter configuration itself is malformed
    #[error("Invalid filter configuration: {0}")]
    InvalidFilterConfig(String),

    /// The caller asked the run to stop
    #[error("Ranking run cancelled")]
    Cancelled,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PairingError>;
