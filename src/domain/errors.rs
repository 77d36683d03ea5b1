// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid label: {0}")]
    InvalidLabel(String),
    #[error("slug space exhausted for '{base}' after {attempts} attempts")]
    SlugSpaceExhausted { base: String, attempts: u32 },
    #[error("slug existence check failed: {0}")]
    ExistsCheck(String),
    #[error("duplicate slug on persist: {0}")]
    DuplicateSlugOnPersist(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// Errors caused by caller input rather than by the server or storage.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidLabel(_) | Self::Validation(_))
    }
}
