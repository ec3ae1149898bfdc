//! Typed error enum for the service layer.

use asides_storage::StorageError;
use thiserror::Error;

/// Service-layer error. Every variant except `Storage` maps to a client-facing status.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed for a reason the caller cannot fix.
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Caller provided invalid input (empty body).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Another aside already has this body.
    #[error("duplicate body")]
    DuplicateBody,

    /// No aside with this id.
    #[error("aside {0} not found")]
    NotFound(i64),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error represents a duplicate/conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateBody)
    }

    /// Lifts storage-level duplicate and constraint failures into domain errors.
    pub(crate) fn from_write(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate(_) => Self::DuplicateBody,
            StorageError::Constraint(msg) => Self::InvalidInput(msg),
            other => Self::Storage(other),
        }
    }
}
