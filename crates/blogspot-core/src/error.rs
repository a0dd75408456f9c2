//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;
use crate::form::ValidationErrors;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    NotFound(PostId),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid post id: {0}")]
    InvalidId(String),

    #[error("Invalid status: {0} (expected Draft or Published)")]
    InvalidStatus(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}

/// Storage-level errors. Never fatal to the in-memory session.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
