// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// The save should be rejected with a message to the editor.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(err) if err.is_validation())
    }

    /// A fresh assignment against the refreshed namespace may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DuplicateSlugOnPersist(_)))
    }
}
