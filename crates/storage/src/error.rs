//! Typed error enum for the storage layer.
//!
//! Lets callers match on constraint failures instead of downcasting opaque
//! boxes. Absent rows are `Option::None` at the trait level, not errors.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique constraint violation.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Check constraint violation (e.g. empty body).
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be converted into the domain type.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Hand-written `From<sqlx::Error>` rather than a blanket `#[from]`.
///
/// - unique violation → `Duplicate`
/// - check violation → `Constraint`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_owned())
            },
            sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
                Self::Constraint(db_err.message().to_owned())
            },
            _ => Self::Database(err),
        }
    }
}
