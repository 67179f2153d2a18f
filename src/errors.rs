use thiserror::Error;

/// Error type that captures generation failures.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
