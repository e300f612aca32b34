// src/error/types.rs
use crate::domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure or non-success HTTP status.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Malformed JSON or a document that does not match the envelope shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Mapping error: {0}")]
    Domain(#[from] DomainError),

    #[error("Cannot compute statistics of an empty planet list")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Fetch(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
